pub mod auth;

use axum::Router;

use crate::auth::RoleGate;

pub use auth::{authenticate, extract_cookie, require_role, AuthState};

/// Require a verified credential cookie on every route in `router`.
pub fn authenticated<S>(router: Router<S>, auth: AuthState) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.route_layer(axum::middleware::from_fn_with_state(auth, authenticate))
}

/// Require a verified credential carrying `gate`'s role. The verifier is
/// layered outside the gate, so it always runs first.
pub fn require<S>(router: Router<S>, gate: RoleGate, auth: AuthState) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    authenticated(
        router.route_layer(axum::middleware::from_fn_with_state(gate, require_role)),
        auth,
    )
}

pub fn admin_only<S>(router: Router<S>, auth: AuthState) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    require(router, RoleGate::ADMIN, auth)
}
