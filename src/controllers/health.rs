use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};

use crate::infrastructure::config::{APP_NAME, APP_VERSION};

/// GET / - API landing document
pub async fn root() -> Json<Value> {
    Json(json!({
        "message": format!("Welcome to {}", APP_NAME),
        "version": APP_VERSION,
        "docs": "/docs",
        "health": "/api/murshid/health"
    }))
}

/// GET /health
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "app": APP_NAME,
        "version": APP_VERSION
    }))
}

/// GET /api/murshid/health
pub async fn murshid_health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "AI Murshid",
        "timestamp": Utc::now().to_rfc3339()
    }))
}
