use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::auth::{AuthError, AuthUser, JwtKeys, RoleGate};
use crate::error::ApiError;

/// Verifier state: keys built once at startup plus the credential cookie name
#[derive(Clone, Debug)]
pub struct AuthState {
    pub keys: Arc<JwtKeys>,
    pub cookie_name: Arc<str>,
}

impl AuthState {
    pub fn new(keys: JwtKeys, cookie_name: impl Into<Arc<str>>) -> Self {
        Self {
            keys: Arc::new(keys),
            cookie_name: cookie_name.into(),
        }
    }
}

/// Cookie JWT middleware: verifies the credential cookie and injects the
/// verified claims into the request
pub async fn authenticate(
    State(auth): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_cookie(request.headers(), &auth.cookie_name).ok_or_else(|| {
        tracing::warn!("{} {} rejected: no '{}' cookie", request.method(), request.uri().path(), auth.cookie_name);
        AuthError::Unauthenticated
    })?;

    let user = auth.keys.verify(&token)?;

    tracing::debug!(
        "Authenticated {} with role {}",
        user.subject().unwrap_or("<anonymous>"),
        user.role().unwrap_or("<none>")
    );

    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}

/// Role gate middleware. Takes the verified user as an extractor, so it can
/// only pass once `authenticate` has run for the request.
pub async fn require_role(
    State(gate): State<RoleGate>,
    user: AuthUser,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if let Err(err) = gate.check(&user) {
        tracing::warn!(
            "{} {} rejected: role {:?} is not '{}'",
            request.method(),
            request.uri().path(),
            user.role(),
            gate.role()
        );
        return Err(err.into());
    }

    Ok(next.run(request).await)
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<AuthUser>().cloned().ok_or_else(|| {
            // Route was mounted without the token verifier in front of it
            tracing::error!("{} {} needs a verified user but no verifier ran", parts.method, parts.uri.path());
            AuthError::Unauthenticated.into()
        })
    }
}

/// Value of the named cookie across all Cookie headers. Empty values count
/// as absent.
pub fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| key.trim() == name)
        .map(|(_, value)| value.trim().trim_matches('"').to_string())
        .filter(|value| !value.is_empty())
}
