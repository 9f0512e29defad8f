use serde_json::Value;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Key under which the panel persists the selected API key identifier.
pub const SELECTED_API_KEY_ID: &str = "selectedApiKeyId";

/// Supplies the API key attached to outgoing requests.
///
/// The client asks the provider on every call and never caches the answer,
/// so a provider backed by mutable storage takes effect immediately.
/// `None` and empty strings both mean "send no key".
pub trait ApiKeyProvider: Send + Sync {
    fn api_key(&self) -> Option<String>;
}

impl<F> ApiKeyProvider for F
where
    F: Fn() -> Option<String> + Send + Sync,
{
    fn api_key(&self) -> Option<String> {
        self()
    }
}

/// Never sends a key.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoApiKey;

impl ApiKeyProvider for NoApiKey {
    fn api_key(&self) -> Option<String> {
        None
    }
}

#[derive(Debug, Clone)]
pub struct StaticApiKey(pub String);

impl StaticApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }
}

impl ApiKeyProvider for StaticApiKey {
    fn api_key(&self) -> Option<String> {
        non_empty(self.0.clone())
    }
}

/// Reads an environment variable each time a key is needed.
#[derive(Debug, Clone)]
pub struct EnvApiKey {
    pub var: String,
}

impl EnvApiKey {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl ApiKeyProvider for EnvApiKey {
    fn api_key(&self) -> Option<String> {
        std::env::var(&self.var).ok().and_then(non_empty)
    }
}

/// A persisted key-value store kept as a flat JSON object on disk,
/// e.g. `{"selectedApiKeyId": "GENAI_API_KEY_2"}`.
///
/// The file is re-read on every lookup. Any problem reading it (missing,
/// unreadable, not an object, entry not a string) yields no key.
#[derive(Debug, Clone)]
pub struct JsonFileKeyStore {
    path: PathBuf,
    key: String,
}

impl JsonFileKeyStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            key: SELECTED_API_KEY_ID.to_string(),
        }
    }

    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lookup(&self) -> Option<String> {
        let raw = fs::read_to_string(&self.path).ok()?;
        let store: Value = serde_json::from_str(&raw).ok()?;
        match store.get(&self.key)? {
            Value::String(value) => non_empty(value.clone()),
            _ => None,
        }
    }
}

impl ApiKeyProvider for JsonFileKeyStore {
    fn api_key(&self) -> Option<String> {
        let key = self.lookup();
        if key.is_none() {
            tracing::trace!(path = %self.path.display(), entry = %self.key, "no api key in store");
        }
        key
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
