pub mod api_key;
mod assistant_api;
mod cancellation;
mod client;
pub mod client_utils;
mod errors;
mod export;
mod telemetry;
mod types;

pub use api_key::ApiKeyProvider;
pub use assistant_api::AssistantApi;
pub use cancellation::cancellable;
pub use client::{AssistantClient, AssistantClientOptions, DEFAULT_BASE_URL};
pub use errors::*;
pub use export::*;
pub use types::*;
