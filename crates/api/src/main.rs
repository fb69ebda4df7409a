use std::net::{Ipv4Addr, SocketAddr};

use axum::Router;
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as ScalarServable};

use campusfeed_database::DatabaseInfo;

mod routes;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    // Configure logging and environment
    campusfeed_config::configure!(api);

    // Configure API schema
    #[derive(OpenApi)]
    #[openapi(
        paths(
            routes::root::root,
            routes::events::event_create::create_event,
            routes::events::event_fetch::fetch_event,
            routes::events::event_list::list_events,
            routes::events::event_recommended::recommended_events,
            routes::profiles::profile_fetch::fetch_profile,
            routes::profiles::profile_set::set_profile,
        ),
        components(
            schemas(
                routes::root::RootResponse,
                routes::events::event_create::DataCreateEvent,
                routes::profiles::profile_set::DataSetProfile,
                campusfeed_result::Error,
                campusfeed_result::ErrorType,
                campusfeed_database::Category,
                campusfeed_database::Event,
                campusfeed_database::Education,
                campusfeed_database::UserProfile,
            )
        )
    )]
    struct ApiDoc;

    // Connect to the database
    let db = DatabaseInfo::Auto
        .connect()
        .await
        .expect("Database connection failed.");

    // Configure Axum and router
    let app = Router::new()
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .merge(routes::router().with_state(db));

    // Configure TCP listener and bind
    let config = campusfeed_config::config().await;
    tracing::info!("Listening on 0.0.0.0:14702");
    tracing::info!("Play around with the API: {}/scalar", config.hosts.api);
    let address = SocketAddr::from((Ipv4Addr::UNSPECIFIED, 14702));
    let listener = TcpListener::bind(&address).await?;
    axum::serve(listener, app.into_make_service()).await
}
