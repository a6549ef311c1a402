//! Shared helpers: an in-process stand-in for the chat completions API and a
//! launcher for the web UI, both bound to `127.0.0.1:0`.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::post;
use serde_json::Value;
use tokio::net::TcpListener;

use sql_explainer::connector::api::{Container, ContainerConfig};
use sql_explainer::connector::web::run_server_on_listener;
use sql_explainer::CompletionService;

/// One request as seen by the stub.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub authorization: Option<String>,
    pub body: Value,
}

pub struct CompletionStub {
    status: StatusCode,
    body: String,
    requests: Mutex<Vec<CapturedRequest>>,
}

impl CompletionStub {
    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

/// Body of a well-formed completion with a single choice.
pub fn completion_body(text: &str) -> String {
    serde_json::json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "model": "llama-3.3-70b-versatile",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": text },
            "finish_reason": "stop"
        }]
    })
    .to_string()
}

/// Start a stub answering every completion request with `status` and `body`.
/// Returns the base URL to hand to `GroqCompletion` and the stub for inspection.
pub async fn spawn_completion_stub(status: u16, body: impl Into<String>) -> (String, Arc<CompletionStub>) {
    let stub = Arc::new(CompletionStub {
        status: StatusCode::from_u16(status).unwrap(),
        body: body.into(),
        requests: Mutex::new(Vec::new()),
    });

    let app = axum::Router::new()
        .route("/openai/v1/chat/completions", post(completions))
        .with_state(stub.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), stub)
}

async fn completions(
    State(stub): State<Arc<CompletionStub>>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, [(header::HeaderName, &'static str); 1], String) {
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(String::from);
    let body = serde_json::from_str(&body).unwrap_or(Value::Null);
    stub.requests.lock().unwrap().push(CapturedRequest {
        authorization,
        body,
    });

    (
        stub.status,
        [(header::CONTENT_TYPE, "application/json")],
        stub.body.clone(),
    )
}

/// A base URL nothing is listening on.
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

/// Start the web UI over `service`. Returns the UI base URL.
pub async fn spawn_web_ui(service: Arc<dyn CompletionService>) -> String {
    let container = Arc::new(Container::with_completion_service(
        service,
        ContainerConfig::default(),
    ));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(run_server_on_listener(listener, container));
    format!("http://{}", addr)
}
