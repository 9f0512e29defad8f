#![allow(dead_code)]

mod stub;

pub use stub::{BoxedError, RecordedRequest, StubServer};

use confluence_assistant_sdk::{
    api_key::StaticApiKey, ApiKeyProvider, AssistantClient, AssistantClientOptions,
    AssistantResult,
};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

pub fn client_for(stub: &StubServer) -> AssistantClient {
    AssistantClient::new(AssistantClientOptions {
        base_url: Some(stub.url().to_string()),
        ..Default::default()
    })
}

pub fn client_with_provider(
    stub: &StubServer,
    provider: Arc<dyn ApiKeyProvider>,
) -> AssistantClient {
    AssistantClient::new(AssistantClientOptions {
        base_url: Some(stub.url().to_string()),
        api_key: Some(provider),
        ..Default::default()
    })
}

pub fn client_with_key(stub: &StubServer, key: &str) -> AssistantClient {
    client_with_provider(stub, Arc::new(StaticApiKey::new(key)))
}

/// The typed response, serialized back, must equal what the server sent.
pub fn assert_echoes<R: Serialize>(result: AssistantResult<R>, expected: &Value) {
    let response = result.expect("call should succeed");
    let actual = serde_json::to_value(&response).expect("response should serialize");
    assert_eq!(&actual, expected);
}

/// The call must fail with an API error whose message is exactly `message`.
pub fn assert_api_error<R: std::fmt::Debug>(result: AssistantResult<R>, message: &str) {
    let error = result.expect_err("call should fail");
    assert!(error.is_api(), "expected API error, got {error:?}");
    assert_eq!(error.to_string(), message);
}
