use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

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
        message: "Campusfeed API is up!",
        version: CRATE_VERSION,
    })
}
