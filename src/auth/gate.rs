use super::{AuthError, Claims, ADMIN_ROLE};

/// Claims of a request whose credential has been verified.
///
/// Only `JwtKeys::verify` can build one, so holding an `AuthUser` proves the
/// token verifier ran for this request.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthUser {
    claims: Claims,
}

impl AuthUser {
    pub(super) fn verified(claims: Claims) -> Self {
        Self { claims }
    }

    pub fn claims(&self) -> &Claims {
        &self.claims
    }

    pub fn role(&self) -> Option<&str> {
        self.claims.role()
    }

    pub fn subject(&self) -> Option<&str> {
        self.claims.subject()
    }

    pub fn into_claims(self) -> Claims {
        self.claims
    }
}

/// Pure role check against a verified claim set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoleGate {
    role: &'static str,
    denial: &'static str,
}

impl RoleGate {
    pub const ADMIN: RoleGate = RoleGate::new(ADMIN_ROLE, "Admin only");

    pub const fn new(role: &'static str, denial: &'static str) -> Self {
        Self { role, denial }
    }

    pub fn role(&self) -> &'static str {
        self.role
    }

    pub fn check(&self, user: &AuthUser) -> Result<(), AuthError> {
        if user.role() == Some(self.role) {
            Ok(())
        } else {
            Err(AuthError::InsufficientPrivilege { denial: self.denial })
        }
    }
}
