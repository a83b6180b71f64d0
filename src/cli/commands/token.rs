use anyhow::Context;
use serde_json::json;

use crate::auth::{Claims, JwtKeys};
use crate::cli::{utils, OutputFormat};
use crate::config;

pub fn handle(sub: &str, role: &str, hours: Option<u64>, output_format: OutputFormat) -> anyhow::Result<()> {
    let security = &config::config().security;
    let hours = hours.unwrap_or(security.jwt_expiry_hours);

    let keys = JwtKeys::from_secret(&security.jwt_secret).context("JWT_SECRET must be set to sign tokens")?;
    let claims = Claims::new(sub, role, hours)?;
    let token = keys.issue(&claims)?;

    match output_format {
        OutputFormat::Json => utils::output_value(
            output_format,
            &json!({
                "token": token,
                "cookie": format!("{}={}", security.auth_cookie, token),
                "claims": claims,
            }),
        ),
        OutputFormat::Text => {
            println!("{}", token);
            Ok(())
        }
    }
}
