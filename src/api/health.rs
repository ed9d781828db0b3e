use axum::response::Json;
use serde_json::{Value, json};

/// Liveness check for the callback server, handy when checking the redirect URI.
pub async fn health() -> Json<Value> {
    Json(json!({
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "callback": "/callback",
        "status": "ok",
    }))
}
