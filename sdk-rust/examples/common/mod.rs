use confluence_assistant_sdk::{
    api_key::{EnvApiKey, JsonFileKeyStore},
    ApiKeyProvider, AssistantClient, AssistantClientOptions,
};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Build a client from the environment:
/// - `ASSISTANT_API_BASE_URL` overrides the hosted backend
/// - `ASSISTANT_KEY_STORE` points at a JSON key-value file holding
///   `selectedApiKeyId`; otherwise `ASSISTANT_API_KEY` is read per request
pub fn get_client() -> AssistantClient {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let api_key: Arc<dyn ApiKeyProvider> = match std::env::var("ASSISTANT_KEY_STORE") {
        Ok(path) => Arc::new(JsonFileKeyStore::new(path)),
        Err(_) => Arc::new(EnvApiKey::new("ASSISTANT_API_KEY")),
    };

    AssistantClient::new(AssistantClientOptions {
        base_url: std::env::var("ASSISTANT_API_BASE_URL").ok(),
        api_key: Some(api_key),
        ..Default::default()
    })
}
