use crate::AssistantResult;
use opentelemetry::trace::Status;
use std::time::Instant;
use tracing::{info_span, Span};
use tracing_futures::Instrument;
use tracing_opentelemetry::OpenTelemetrySpanExt;

pub struct RequestSpan {
    span: Span,
    operation: &'static str,
    start_time: Instant,
}

impl RequestSpan {
    pub fn new(operation: &'static str, method: &reqwest::Method, path: &str) -> Self {
        let span = info_span!("assistant_sdk.request", operation, method = %method, path);
        span.set_attribute("http.request.method", method.to_string());
        span.set_attribute("url.path", path.to_string());
        span.set_attribute("assistant_sdk.operation", operation);

        Self {
            span,
            operation,
            start_time: Instant::now(),
        }
    }

    fn span(&self) -> Span {
        self.span.clone()
    }

    pub async fn instrument_future<F>(&self, future: F) -> F::Output
    where
        F: std::future::Future,
    {
        future.instrument(self.span()).await
    }

    pub fn on_error(&mut self, error: &crate::AssistantError) {
        if let Some(status) = error.status() {
            self.span
                .set_attribute("http.response.status_code", i64::from(status.as_u16()));
        }
        self.span
            .set_attribute("exception.message", error.to_string());
        self.span.set_status(Status::error(error.to_string()));
        self.span.in_scope(|| {
            tracing::debug!(operation = self.operation, %error, "assistant request failed");
        });
    }

    pub fn on_end(&mut self) {
        self.span.set_attribute(
            "assistant_sdk.duration_seconds",
            self.start_time.elapsed().as_secs_f64(),
        );
    }
}

/// Record the response status on the span of the request in flight.
pub fn record_status(status: reqwest::StatusCode) {
    let span = Span::current();
    span.set_attribute("http.response.status_code", i64::from(status.as_u16()));
    tracing::debug!(status = status.as_u16(), "assistant response received");
}

pub async fn trace_request<Fut, R>(
    operation: &'static str,
    method: &reqwest::Method,
    path: &str,
    future: Fut,
) -> AssistantResult<R>
where
    Fut: std::future::Future<Output = AssistantResult<R>>,
{
    let mut span = RequestSpan::new(operation, method, path);
    let result = span.instrument_future(future).await;

    if let Err(error) = &result {
        span.on_error(error);
    }

    span.on_end();
    result
}
