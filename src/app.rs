use axum::{
    http::{header, HeaderValue, Method},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::any::Any;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

use crate::auth::{JwtError, JwtKeys};
use crate::config::AppConfig;
use crate::error::ApiError;
use crate::handlers;
use crate::middleware::{self, AuthState};

/// Build the full router. Fails if no signing secret is configured.
pub fn app(config: &AppConfig) -> Result<Router, JwtError> {
    let keys = JwtKeys::from_secret(&config.security.jwt_secret)?;
    let auth = AuthState::new(keys, config.security.auth_cookie.as_str());

    let router = Router::new()
        // Public
        .route("/", get(handlers::root))
        .route("/api/health", get(handlers::health))
        .merge(auth_routes(auth.clone()))
        .merge(admin_routes(auth));

    // Remaining mount points, each to be guarded the same way:
    // /api/settings, /api/daily-pack, /api/attempts, /api/practice,
    // /api/progress, /api/behavioral

    Ok(with_error_handling(router)
        .layer(cors_layer(&config.security.cors_origins))
        .layer(TraceLayer::new_for_http()))
}

fn auth_routes(auth: AuthState) -> Router {
    middleware::authenticated(
        Router::new().route("/api/auth/whoami", get(handlers::session_whoami)),
        auth,
    )
}

fn admin_routes(auth: AuthState) -> Router {
    middleware::admin_only(
        Router::new().route("/api/admin/status", get(handlers::admin_status)),
        auth,
    )
}

/// JSON 404 for unknown routes and a generic 500 for any panic.
pub fn with_error_handling(router: Router) -> Router {
    router
        .fallback(not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
}

async fn not_found() -> ApiError {
    ApiError::not_found("Not found")
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    ApiError::internal(format!("request handler panicked: {}", detail)).into_response()
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
}
