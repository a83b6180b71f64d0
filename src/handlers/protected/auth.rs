use axum::response::Json;

use crate::auth::{AuthUser, Claims};

/// GET /api/auth/whoami - Claims of the current credential
///
/// Returns the decoded token payload exactly as it was signed:
/// ```json
/// { "sub": "user-42", "role": "user", "iat": 1760000000, "exp": 1760604800 }
/// ```
pub async fn whoami(user: AuthUser) -> Json<Claims> {
    Json(user.into_claims())
}
