use axum::{
    extract::{Path, State},
    Json,
};

use campusfeed_database::{Database, UserProfile};
use campusfeed_result::Result;

/// Fetch a user's profile
#[utoipa::path(
    get,
    path = "/profiles/{user_id}",
    tag = "Profiles",
    params(
        ("user_id" = String, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "Profile", body = UserProfile),
        (status = 404, description = "Unknown user")
    )
)]
pub async fn fetch_profile(
    State(db): State<Database>,
    Path(user_id): Path<String>,
) -> Result<Json<UserProfile>> {
    db.fetch_user_profile(&user_id).await.map(Json)
}
