// HTTP API Error Types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::auth::AuthError;

/// Message returned for every internal failure; the detail only goes to the log
pub const INTERNAL_ERROR_MESSAGE: &str = "Something went wrong";

/// HTTP API error with appropriate status codes and client-friendly messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    // 401 Unauthorized
    Unauthorized(String),

    // 403 Forbidden
    Forbidden(String),

    // 404 Not Found
    NotFound(String),

    // 500 Internal Server Error
    InternalServerError,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get client-safe error message
    pub fn message(&self) -> &str {
        match self {
            ApiError::Unauthorized(msg) => msg,
            ApiError::Forbidden(msg) => msg,
            ApiError::NotFound(msg) => msg,
            ApiError::InternalServerError => INTERNAL_ERROR_MESSAGE,
        }
    }

    pub fn to_json(&self) -> Value {
        json!({ "message": self.message() })
    }
}

impl ApiError {
    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        ApiError::Forbidden(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    /// Log the real cause and hide it from the client
    pub fn internal(cause: impl std::fmt::Display) -> Self {
        tracing::error!("Internal error: {}", cause);
        ApiError::InternalServerError
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Unauthenticated | AuthError::InvalidCredential => {
                ApiError::unauthorized(err.to_string())
            }
            AuthError::InsufficientPrivilege { .. } => ApiError::forbidden(err.to_string()),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status_code(), Json(self.to_json())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_errors_map_to_status_and_message() {
        let cases = [
            (AuthError::Unauthenticated, StatusCode::UNAUTHORIZED, "Not logged in"),
            (AuthError::InvalidCredential, StatusCode::UNAUTHORIZED, "Bad token"),
            (
                AuthError::InsufficientPrivilege { denial: "Admin only" },
                StatusCode::FORBIDDEN,
                "Admin only",
            ),
        ];

        for (auth_error, status, message) in cases {
            let api_error = ApiError::from(auth_error);
            assert_eq!(api_error.status_code(), status);
            assert_eq!(api_error.to_json(), json!({ "message": message }));
        }
    }

    #[test]
    fn test_internal_error_hides_cause() {
        let api_error = ApiError::internal("connection refused to 10.0.0.3");
        assert_eq!(api_error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.to_json(), json!({ "message": "Something went wrong" }));
    }
}
