use axum::Json;
use serde_json::{json, Value};

pub async fn health_check() -> Json<Value> {
    tracing::debug!("Health check requested");
    Json(json!({ "status": "ok" }))
}
