use axum::{
    extract::{Path, State},
    Json,
};

use campusfeed_database::{Database, Event};
use campusfeed_result::Result;

/// Fetch a single event by its id
#[utoipa::path(
    get,
    path = "/events/{event_id}",
    tag = "Events",
    params(
        ("event_id" = String, Path, description = "Event id")
    ),
    responses(
        (status = 200, description = "Event", body = Event),
        (status = 404, description = "Unknown event")
    )
)]
pub async fn fetch_event(
    State(db): State<Database>,
    Path(event_id): Path<String>,
) -> Result<Json<Event>> {
    db.fetch_event(&event_id).await.map(Json)
}
