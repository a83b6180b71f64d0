pub mod gate;
pub mod keys;

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub use gate::{AuthUser, RoleGate};
pub use keys::JwtKeys;

pub const ADMIN_ROLE: &str = "admin";
pub const USER_ROLE: &str = "user";

/// Decoded JWT payload, kept as the signed JSON object so any claim of any
/// type survives verification unchanged. Registered claims are read through
/// typed accessors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Claims(Map<String, Value>);

impl Claims {
    pub fn new(sub: impl Into<String>, role: impl Into<String>, expiry_hours: u64) -> Result<Self, JwtError> {
        let now = Utc::now();
        let exp = i64::try_from(expiry_hours)
            .ok()
            .and_then(Duration::try_hours)
            .and_then(|ttl| now.checked_add_signed(ttl))
            .ok_or_else(|| {
                JwtError::TokenGeneration(format!("expiry of {} hours is out of range", expiry_hours))
            })?;

        Ok(Self::default()
            .with_claim("sub", Value::String(sub.into()))
            .with_claim("role", Value::String(role.into()))
            .with_claim("iat", Value::from(now.timestamp()))
            .with_claim("exp", Value::from(exp.timestamp())))
    }

    pub fn from_map(claims: Map<String, Value>) -> Self {
        Self(claims)
    }

    pub fn with_claim(mut self, key: impl Into<String>, value: Value) -> Self {
        self.0.insert(key.into(), value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.0.insert(key.into(), value);
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// The `role` claim when it is a string; any other type is no role
    pub fn role(&self) -> Option<&str> {
        self.get("role").and_then(Value::as_str)
    }

    /// The `sub` claim when it is a string
    pub fn subject(&self) -> Option<&str> {
        self.get("sub").and_then(Value::as_str)
    }

    pub fn issued_at(&self) -> Option<i64> {
        self.numeric_date("iat")
    }

    pub fn expires_at(&self) -> Option<i64> {
        self.numeric_date("exp")
    }

    // NumericDate may be fractional; whole seconds are enough here
    fn numeric_date(&self, key: &str) -> Option<i64> {
        let value = self.get(key)?;
        value.as_i64().or_else(|| value.as_f64().map(|secs| secs.trunc() as i64))
    }
}

/// Request-authorization failures. The Display text is the message sent
/// to the client.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Not logged in")]
    Unauthenticated,

    #[error("Bad token")]
    InvalidCredential,

    #[error("{denial}")]
    InsufficientPrivilege { denial: &'static str },
}

#[derive(Debug, thiserror::Error)]
pub enum JwtError {
    #[error("JWT generation error: {0}")]
    TokenGeneration(String),

    #[error("Invalid JWT secret")]
    InvalidSecret,
}
