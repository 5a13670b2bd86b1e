use axum::{
    extract::Path,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::time::Duration;
use tracing::debug;

pub async fn run(addr: SocketAddr) {
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, router()).await.unwrap();
}

pub fn router() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/rpc", post(rpc))
        .route("/delay/ms/:delay_ms", get(delay))
        .route("/paid", get(paid))
        .route("/broken", get(broken))
}

async fn health() -> &'static str {
    "ok"
}

async fn rpc(Json(req): Json<Value>) -> Json<Value> {
    debug!("rpc request: {req}");
    let id = req.get("id").cloned().unwrap_or_else(|| json!(1));
    Json(json!({ "jsonrpc": "2.0", "id": id, "result": "0x10d4f" }))
}

async fn delay(Path(delay_ms): Path<u64>) {
    tokio::time::sleep(Duration::from_millis(delay_ms)).await;
}

async fn paid() -> StatusCode {
    StatusCode::PAYMENT_REQUIRED
}

async fn broken() -> StatusCode {
    StatusCode::INTERNAL_SERVER_ERROR
}
