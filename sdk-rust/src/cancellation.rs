use crate::{AssistantError, AssistantResult};
use std::future::Future;
use tokio_util::sync::CancellationToken;

/// Race a client call against `token`.
///
/// When the token fires first the call future is dropped, which aborts the
/// in-flight HTTP request, and `AssistantError::Cancelled` is returned.
/// A token that is already cancelled prevents the request from being sent.
pub async fn cancellable<F, T>(token: &CancellationToken, future: F) -> AssistantResult<T>
where
    F: Future<Output = AssistantResult<T>>,
{
    if token.is_cancelled() {
        return Err(AssistantError::Cancelled);
    }

    tokio::select! {
        biased;
        () = token.cancelled() => {
            tracing::debug!("assistant request cancelled by caller");
            Err(AssistantError::Cancelled)
        }
        result = future => result,
    }
}
