use std::collections::HashMap;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use campusfeed_database::{Database, Education, UserProfile};
use campusfeed_result::Result;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct DataSetProfile {
    /// Display name
    pub display_name: String,
    /// Role (student, mentor, organiser, ...)
    pub role: String,
    /// Education details
    pub education: Option<Education>,
    /// Listed skills
    #[serde(default)]
    pub skills: Vec<String>,
    /// Short biography
    pub bio: Option<String>,
    /// Social links, keyed by platform name
    #[serde(default)]
    pub social_links: HashMap<String, String>,
    /// Avatar URL
    pub avatar: Option<String>,
}

/// Insert or replace a user's profile
#[utoipa::path(
    put,
    path = "/profiles/{user_id}",
    tag = "Profiles",
    params(
        ("user_id" = String, Path, description = "User id")
    ),
    request_body = DataSetProfile,
    responses(
        (status = 200, description = "Stored profile", body = UserProfile)
    )
)]
pub async fn set_profile(
    State(db): State<Database>,
    Path(user_id): Path<String>,
    Json(data): Json<DataSetProfile>,
) -> Result<Json<UserProfile>> {
    let profile = UserProfile {
        user_id: user_id.clone(),
        display_name: data.display_name,
        role: data.role,
        education: data.education,
        skills: data.skills,
        bio: data.bio,
        social_links: data.social_links,
        avatar: data.avatar,
    };

    db.set_user_profile(&user_id, &profile).await?;
    Ok(Json(profile))
}
