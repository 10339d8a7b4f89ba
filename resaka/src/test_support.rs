//! Stub chat backends served over real HTTP for tests.

use std::sync::{Arc, Mutex};

use tokio::sync::Notify;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;

/// Request bodies received by a stub backend, in arrival order.
pub type Received = Arc<Mutex<Vec<Value>>>;

/// Serve `app` on an ephemeral localhost port and return its base URL.
pub async fn spawn_backend(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// A base URL nothing listens on.
pub async fn unreachable_backend() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

/// Backend answering every chat turn with `reply` and recording bodies.
/// `conversation_id` in the reply is whatever `issue_id` returns for the
/// request body.
pub async fn recording_backend(
    reply: &'static str,
    issue_id: fn(&Value) -> String,
) -> (String, Received) {
    let received: Received = Arc::default();

    let app = Router::new()
        .route(
            "/api/chat",
            post(
                move |State(received): State<Received>, Json(body): Json<Value>| async move {
                    let conversation_id = issue_id(&body);
                    received.lock().unwrap().push(body);
                    Json(serde_json::json!({
                        "response": reply,
                        "conversation_id": conversation_id,
                        "status": "success",
                    }))
                },
            ),
        )
        .route("/api/health", get(|| async { StatusCode::OK }))
        .with_state(received.clone());

    (spawn_backend(app).await, received)
}

/// Backend whose every route answers with `status` and `body`.
pub async fn fixed_backend(status: StatusCode, body: &'static str) -> String {
    let app = Router::new()
        .route("/api/chat", post(move || async move { (status, body) }))
        .route("/api/health", get(move || async move { (status, body) }));
    spawn_backend(app).await
}

/// Backend whose chat route answers at once with `reply` while
/// `/api/health` holds its answer until the returned `Notify` fires.
pub async fn gated_health_backend(reply: &'static str) -> (String, Arc<Notify>) {
    let release = Arc::new(Notify::new());

    let app = Router::new()
        .route(
            "/api/chat",
            post(move || async move {
                Json(serde_json::json!({
                    "response": reply,
                    "conversation_id": "c1",
                    "status": "success",
                }))
            }),
        )
        .route(
            "/api/health",
            get(|State(release): State<Arc<Notify>>| async move {
                release.notified().await;
                StatusCode::OK
            }),
        )
        .with_state(release.clone());

    (spawn_backend(app).await, release)
}
