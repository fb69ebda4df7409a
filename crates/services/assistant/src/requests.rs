use std::time::Duration;

use lazy_static::lazy_static;
use reqwest::Client;
use serde_json::{json, Value};

use campusfeed_config::config;
use campusfeed_result::{create_error, Result};

lazy_static! {
    static ref CLIENT: Client = reqwest::Client::builder()
        .user_agent(concat!("campusfeed-assistant/", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(10))
        .connect_timeout(Duration::from_secs(5))
        .build()
        .expect("reqwest Client");
}

/// Forward one user message to the configured chat-completion API and
/// return the assistant's reply
///
/// One attempt per message, no retries; any upstream problem surfaces as
/// `AssistantUnavailable`.
pub async fn complete(message: &str) -> Result<String> {
    let config = config().await.assistant;

    let response = CLIENT
        .post(format!(
            "{}/chat/completions",
            config.base_url.trim_end_matches('/')
        ))
        .bearer_auth(&config.api_key)
        .json(&json!({
            "model": config.model,
            "messages": [
                {
                    "role": "system",
                    "content": config.system_prompt,
                },
                {
                    "role": "user",
                    "content": message,
                }
            ]
        }))
        .send()
        .await
        .map_err(|error| {
            tracing::error!("Chat completion request failed: {error}");
            create_error!(AssistantUnavailable)
        })?;

    if !response.status().is_success() {
        tracing::error!("{:?}", response);
        return Err(create_error!(AssistantUnavailable));
    }

    let body: Value = response
        .json()
        .await
        .map_err(|_| create_error!(AssistantUnavailable))?;

    extract_reply(&body)
}

/// Pull the reply text out of a chat-completion response body
fn extract_reply(body: &Value) -> Result<String> {
    body["choices"][0]["message"]["content"]
        .as_str()
        .map(|content| content.trim().to_string())
        .ok_or_else(|| {
            tracing::error!("Chat completion response had no content");
            create_error!(AssistantUnavailable)
        })
}
