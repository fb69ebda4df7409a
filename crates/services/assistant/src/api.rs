use axum::{routing::get, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use campusfeed_result::{create_error, Result};

use crate::requests;

pub fn router() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/api/chat", post(chat))
        .route("/api/assistant", post(chat))
}

/// Successful root response
#[derive(Serialize, Debug, ToSchema)]
pub struct RootResponse {
    message: &'static str,
    version: &'static str,
}

/// Capture crate version from Cargo
static CRATE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Root response from service
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Echo response", body = RootResponse)
    )
)]
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "The assistant is listening!",
        version: CRATE_VERSION,
    })
}

/// Message sent to the assistant
#[derive(Deserialize, Serialize, Debug, ToSchema)]
pub struct ChatData {
    pub message: String,
}

/// Reply from the assistant
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ChatReply {
    pub reply: String,
}

/// Send one message to the study assistant
#[utoipa::path(
    post,
    path = "/api/chat",
    request_body = ChatData,
    responses(
        (status = 200, description = "Assistant reply", body = ChatReply),
        (status = 422, description = "Empty message"),
        (status = 502, description = "Upstream failure")
    )
)]
pub async fn chat(Json(data): Json<ChatData>) -> Result<Json<ChatReply>> {
    if data.message.trim().is_empty() {
        return Err(create_error!(EmptyMessage));
    }

    let reply = requests::complete(&data.message).await?;
    Ok(Json(ChatReply { reply }))
}
