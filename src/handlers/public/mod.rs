// handlers/public/mod.rs - Public handlers (no authentication required)
//
// Security Level: None
// Middleware: None

use axum::response::Json;
use serde_json::{json, Value};

/// GET / - service description and the planned API mount points
pub async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "name": "Mastery API",
        "version": version,
        "description": "Daily practice for tech interviews",
        "endpoints": {
            "health": "/api/health (public)",
            "auth": "/api/auth/* (protected)",
            "admin": "/api/admin/* (admin only)",
        },
        "planned": [
            "/api/settings",
            "/api/daily-pack",
            "/api/attempts",
            "/api/practice",
            "/api/progress",
            "/api/behavioral",
        ]
    }))
}

/// GET /api/health - liveness check
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
