use axum::{extract::State, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use ulid::Ulid;
use utoipa::ToSchema;
use validator::Validate;

use campusfeed_database::{Category, Database, Event};
use campusfeed_result::{create_error, Result};

#[derive(Validate, Serialize, Deserialize, ToSchema)]
pub struct DataCreateEvent {
    /// Event title
    #[validate(length(min = 1, max = 100))]
    pub title: String,
    /// Event description
    #[validate(length(min = 0, max = 2000))]
    pub description: String,
    /// Organisation hosting the event
    pub organization: String,
    /// Category this event is filed under
    pub category: Category,
    /// Date as entered by the submitter
    pub date: String,
    /// Location as entered by the submitter
    pub location: String,
    /// Link with further details
    pub link: Option<String>,
    /// Promotional image URL
    pub image: Option<String>,
    /// Id of the submitting user
    pub user_id: Option<String>,
}

/// Create a new event
#[utoipa::path(
    post,
    path = "/events/create",
    tag = "Events",
    request_body = DataCreateEvent,
    responses(
        (status = 200, description = "Created event", body = Event)
    )
)]
pub async fn create_event(
    State(db): State<Database>,
    Json(data): Json<DataCreateEvent>,
) -> Result<Json<Event>> {
    if let Err(validation_errors) = data.validate() {
        let error_messages: Vec<String> = validation_errors
            .field_errors()
            .iter()
            .map(|(field, errors)| {
                format!(
                    "{}: {}",
                    field,
                    errors
                        .first()
                        .and_then(|error| error.message.clone())
                        .unwrap_or_default()
                )
            })
            .collect();

        return Err(create_error!(FailedValidation {
            error: error_messages.join(", ")
        }));
    }

    let event = Event {
        id: Ulid::new().to_string(),
        title: data.title,
        description: data.description,
        organization: data.organization,
        category: data.category,
        date: data.date,
        is_online: Event::is_online_location(&data.location),
        location: data.location,
        link: data.link,
        image: data.image,
        created_at: Utc::now(),
        user_id: data.user_id,
    };

    db.insert_event(&event).await?;
    Ok(Json(event))
}
