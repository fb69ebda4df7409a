use std::net::{Ipv4Addr, SocketAddr};

use axum::Router;
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as ScalarServable};

mod api;
pub mod requests;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    // Configure logging and environment
    campusfeed_config::configure!(assistant);

    // Configure API schema
    #[derive(OpenApi)]
    #[openapi(
        paths(
            api::root,
            api::chat
        ),
        components(
            schemas(
                api::RootResponse,
                api::ChatData,
                api::ChatReply,
                campusfeed_result::Error,
                campusfeed_result::ErrorType
            )
        )
    )]
    struct ApiDoc;

    // Configure Axum and router
    let app = Router::new()
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .merge(api::router());

    // Configure TCP listener and bind
    let config = campusfeed_config::config().await;
    tracing::info!("Listening on 0.0.0.0:14706");
    tracing::info!("Play around with the API: {}/scalar", config.hosts.assistant);
    let address = SocketAddr::from((Ipv4Addr::UNSPECIFIED, 14706));
    let listener = TcpListener::bind(&address).await?;
    axum::serve(listener, app.into_make_service()).await
}
