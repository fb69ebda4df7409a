use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use campusfeed_database::{Category, Database, Event};
use campusfeed_result::Result;

#[derive(Deserialize, IntoParams)]
pub struct ListQueryParams {
    /// Narrow the list to one category
    pub category: Option<Category>,
}

/// List events, newest first
///
/// The whole collection is returned; there is no pagination.
#[utoipa::path(
    get,
    path = "/events",
    tag = "Events",
    params(ListQueryParams),
    responses(
        (status = 200, description = "Events, newest first", body = Vec<Event>)
    )
)]
pub async fn list_events(
    State(db): State<Database>,
    Query(params): Query<ListQueryParams>,
) -> Result<Json<Vec<Event>>> {
    match params.category {
        Some(category) => db.fetch_events_by_category(category).await.map(Json),
        None => db.fetch_all_events().await.map(Json),
    }
}
