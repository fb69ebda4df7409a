use cached::proc_macro::cached;
use config::{Config, File, FileFormat};
use futures_locks::RwLock;
use once_cell::sync::Lazy;
use serde::Deserialize;

pub use tracing_subscriber;

static CONFIG_BUILDER: Lazy<RwLock<Config>> = Lazy::new(|| {
    RwLock::new({
        let mut builder = Config::builder().add_source(File::from_str(
            include_str!("../Campusfeed.toml"),
            FileFormat::Toml,
        ));

        if std::path::Path::new("Campusfeed.toml").exists() {
            builder = builder.add_source(File::new("Campusfeed.toml", FileFormat::Toml));
        }

        builder.build().unwrap()
    })
});

#[derive(Deserialize, Debug, Clone)]
pub struct Database {
    pub mongodb: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Hosts {
    pub api: String,
    pub assistant: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Assistant {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    pub system_prompt: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
    pub database: Database,
    pub hosts: Hosts,
    pub assistant: Assistant,
}

/// Install the tracing subscriber for a service binary
pub fn setup_logging(service: &str) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting {service}");
}

#[macro_export]
macro_rules! configure {
    ( $service: ident ) => {
        $crate::setup_logging(stringify!($service));
    };
}

pub async fn read() -> Config {
    CONFIG_BUILDER.read().await.clone()
}

#[cached(time = 30)]
pub async fn config() -> Settings {
    read().await.try_deserialize::<Settings>().unwrap()
}

#[cfg(test)]
mod tests {
    use crate::config;

    #[async_std::test]
    async fn it_works() {
        let settings = config().await;
        assert!(settings.database.mongodb.is_empty());
        assert!(settings.hosts.api.starts_with("http"));
        assert!(settings.hosts.assistant.starts_with("http"));
        assert!(!settings.assistant.model.is_empty());
    }
}
