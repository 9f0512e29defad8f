use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssistantError {
    /// A caller-supplied value could not be turned into a request
    /// (e.g. a header name with spaces). Nothing was sent.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// The request could not complete: DNS, connection, TLS or a broken
    /// response stream.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    /// The backend answered with a non-success status. `message` is the
    /// server `detail` when present, otherwise a fixed fallback.
    #[error("{message}")]
    Api {
        status: reqwest::StatusCode,
        message: String,
    },
    /// A success response whose body could not be decoded (invalid JSON for
    /// the expected record, invalid base64 in an export payload).
    #[error("Decode error: {0}")]
    Decode(String),
    /// The caller's cancellation token fired before the response arrived.
    #[error("Request cancelled")]
    Cancelled,
}

impl AssistantError {
    /// The HTTP status for API errors.
    #[must_use]
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the failure happened below the API layer. Decode failures
    /// count here: the body never became a usable response.
    #[must_use]
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Decode(_))
    }

    #[must_use]
    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api { .. })
    }
}

pub type AssistantResult<T> = Result<T, AssistantError>;
