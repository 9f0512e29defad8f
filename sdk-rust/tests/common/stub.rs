use axum::{
    extract::State,
    http::{header::CONTENT_TYPE, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use serde_json::Value;
use std::{
    collections::HashMap,
    error::Error,
    sync::{Arc, Mutex},
    time::Duration,
};
use tokio::{net::TcpListener, sync::oneshot, time::sleep};

pub type BoxedError = Box<dyn Error + Send + Sync>;

#[derive(Clone)]
struct StubRoute {
    status: StatusCode,
    body: String,
    delay: Duration,
}

/// A request as the stub backend saw it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub headers: HeaderMap,
    pub body: String,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }

    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).expect("request body should be JSON")
    }
}

#[derive(Default)]
struct StubState {
    routes: Mutex<HashMap<(Method, String), StubRoute>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

/// In-process stand-in for the assistant backend. Routes answer with canned
/// bodies; every request is recorded for later assertions.
pub struct StubServer {
    url: String,
    state: Arc<StubState>,
    shutdown: Option<oneshot::Sender<()>>,
    handle: tokio::task::JoinHandle<()>,
}

impl StubServer {
    pub async fn start() -> Result<Self, BoxedError> {
        let state = Arc::new(StubState::default());
        let app = Router::new()
            .fallback(handle_request)
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let url = format!("http://{addr}");

        let (shutdown_tx, shutdown_rx) = oneshot::channel();

        let handle = tokio::spawn(async move {
            let server = axum::serve(listener, app).with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            });

            if let Err(err) = server.await {
                eprintln!("Stub backend error: {err}");
            }
        });

        Ok(Self {
            url,
            state,
            shutdown: Some(shutdown_tx),
            handle,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn respond(&self, method: Method, path: &str, status: StatusCode, body: &Value) {
        self.respond_raw(method, path, status, &body.to_string());
    }

    pub fn respond_raw(&self, method: Method, path: &str, status: StatusCode, body: &str) {
        self.insert_route(method, path, status, body, Duration::ZERO);
    }

    pub fn respond_after(
        &self,
        delay: Duration,
        method: Method,
        path: &str,
        status: StatusCode,
        body: &Value,
    ) {
        self.insert_route(method, path, status, &body.to_string(), delay);
    }

    fn insert_route(
        &self,
        method: Method,
        path: &str,
        status: StatusCode,
        body: &str,
        delay: Duration,
    ) {
        self.state.routes.lock().unwrap().insert(
            (method, path.to_string()),
            StubRoute {
                status,
                body: body.to_string(),
                delay,
            },
        );
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests()
            .pop()
            .expect("stub backend should have received a request")
    }

    pub async fn stop(mut self) -> Result<(), BoxedError> {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }

        self.handle
            .await
            .map_err(|err| format!("Failed to join stub backend task: {err}"))?;
        Ok(())
    }
}

async fn handle_request(
    State(state): State<Arc<StubState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Response {
    let path = uri.path().to_string();
    state.requests.lock().unwrap().push(RecordedRequest {
        method: method.clone(),
        path: path.clone(),
        headers,
        body,
    });

    let route = state.routes.lock().unwrap().get(&(method, path)).cloned();

    match route {
        Some(route) => {
            if !route.delay.is_zero() {
                sleep(route.delay).await;
            }
            (
                route.status,
                [(CONTENT_TYPE, "application/json")],
                route.body,
            )
                .into_response()
        }
        None => (
            StatusCode::NOT_FOUND,
            [(CONTENT_TYPE, "application/json")],
            r#"{"detail":"Not Found"}"#,
        )
            .into_response(),
    }
}
