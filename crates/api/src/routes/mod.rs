use axum::{
    routing::{get, post},
    Router,
};

use campusfeed_database::Database;

pub mod events;
pub mod profiles;
pub mod root;

pub fn router() -> Router<Database> {
    Router::new()
        .route("/", get(root::root))
        .route("/events", get(events::event_list::list_events))
        .route("/events/create", post(events::event_create::create_event))
        .route(
            "/events/recommended",
            get(events::event_recommended::recommended_events),
        )
        .route("/events/:event_id", get(events::event_fetch::fetch_event))
        .route(
            "/profiles/:user_id",
            get(profiles::profile_fetch::fetch_profile).put(profiles::profile_set::set_profile),
        )
}
