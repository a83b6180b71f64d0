use axum::response::Json;
use serde_json::{json, Value};

use crate::auth::AuthUser;
use crate::config;

/// GET /api/admin/status - server status for administrators
pub async fn status(user: AuthUser) -> Json<Value> {
    let config = config::config();

    tracing::info!("Admin status requested by {}", user.subject().unwrap_or("<anonymous>"));

    Json(json!({
        "admin": user.subject(),
        "environment": config.environment,
        "version": env!("CARGO_PKG_VERSION"),
        "server_time": chrono::Utc::now(),
    }))
}
