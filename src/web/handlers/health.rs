use axum::response::Json;
use serde_json::{json, Value};

pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "stagelight",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}
