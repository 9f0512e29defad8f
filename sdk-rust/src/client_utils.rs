use crate::{telemetry, AssistantError, AssistantResult};
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE},
    Client, Method, Response,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::collections::HashMap;

pub const API_KEY_HEADER: &str = "x-api-key";
pub const API_FALLBACK_MESSAGE: &str = "API request failed";
pub const EXPORT_FALLBACK_MESSAGE: &str = "Export failed";

/// Build the outgoing header set. Later layers override earlier ones:
/// content type, then the API key, then caller headers.
pub fn merge_headers(
    api_key: Option<&str>,
    extra: &HashMap<String, String>,
) -> AssistantResult<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    if let Some(key) = api_key.filter(|key| !key.is_empty()) {
        let mut value = HeaderValue::from_str(key).map_err(|error| {
            AssistantError::InvalidInput(format!("Invalid API key header value: {error}"))
        })?;
        value.set_sensitive(true);
        headers.insert(HeaderName::from_static(API_KEY_HEADER), value);
    }

    for (key, value) in extra {
        let header_name = HeaderName::from_bytes(key.as_bytes()).map_err(|error| {
            AssistantError::InvalidInput(format!("Invalid header name '{key}': {error}"))
        })?;
        let header_value = HeaderValue::from_str(value).map_err(|error| {
            AssistantError::InvalidInput(format!("Invalid header value for '{key}': {error}"))
        })?;
        headers.insert(header_name, header_value);
    }

    Ok(headers)
}

/// Send a request, optionally with a JSON body, and return the raw response
/// once its status is known to be a success.
pub async fn send<T: Serialize + ?Sized>(
    client: &Client,
    method: Method,
    url: &str,
    body: Option<&T>,
    headers: HeaderMap,
    fallback_message: &str,
) -> AssistantResult<Response> {
    let mut request = client.request(method, url).headers(headers);
    if let Some(body) = body {
        let payload = serde_json::to_vec(body).map_err(|error| {
            AssistantError::InvalidInput(format!("Failed to serialize request body: {error}"))
        })?;
        request = request.body(payload);
    }

    let response = request.send().await?;
    let status = response.status();
    telemetry::record_status(status);

    if status.is_success() {
        Ok(response)
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(AssistantError::Api {
            status,
            message: error_message(&body, fallback_message),
        })
    }
}

/// Create a JSON request, parse the JSON response.
/// Throws error on non-success status code.
pub async fn send_json<T: Serialize + ?Sized, R: DeserializeOwned>(
    client: &Client,
    method: Method,
    url: &str,
    body: Option<&T>,
    headers: HeaderMap,
    fallback_message: &str,
) -> AssistantResult<R> {
    let response = send(client, method, url, body, headers, fallback_message).await?;
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes)
        .map_err(|error| AssistantError::Decode(format!("Failed to parse response body: {error}")))
}

/// Pull the `detail` out of an error body. String details are returned as
/// is; any other truthy detail (FastAPI validation errors are lists) is
/// returned as compact JSON. Falsy details (`null`, `false`, `0`, `""`) and
/// unparseable bodies yield `fallback`.
#[must_use]
pub fn error_message(body: &str, fallback: &str) -> String {
    let Ok(envelope) = serde_json::from_str::<Value>(body) else {
        return fallback.to_string();
    };

    match envelope.get("detail") {
        Some(Value::String(detail)) if !detail.is_empty() => detail.clone(),
        Some(Value::Number(number)) if number.as_f64() == Some(0.0) => fallback.to_string(),
        Some(Value::Null | Value::String(_) | Value::Bool(false)) | None => fallback.to_string(),
        Some(detail) => detail.to_string(),
    }
}
