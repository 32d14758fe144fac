use axum::Json;
use serde_json::{Value, json};

pub async fn root() -> Json<Value> {
    Json(json!({ "message": "Chat API is running. POST to /chat to use it." }))
}
