use crate::cli::{utils, OutputFormat};
use crate::client::{ApiClient, ClientError};
use crate::config;

pub async fn health(server: &str, output_format: OutputFormat) -> anyhow::Result<()> {
    let client = ApiClient::new(server);
    match client.health().await {
        Ok(body) => {
            let status = body.get("status").and_then(|s| s.as_str()).unwrap_or("unknown");
            utils::output_success(output_format, &format!("{} is {}", server, status), Some(body))
        }
        Err(e) => report(e, output_format),
    }
}

pub async fn whoami(server: &str, token: &str, output_format: OutputFormat) -> anyhow::Result<()> {
    let client = authenticated_client(server, token);
    match client.whoami().await {
        Ok(claims) => utils::output_value(output_format, &claims),
        Err(e) => report(e, output_format),
    }
}

pub async fn admin(server: &str, token: &str, output_format: OutputFormat) -> anyhow::Result<()> {
    let client = authenticated_client(server, token);
    match client.admin_status().await {
        Ok(status) => utils::output_value(output_format, &status),
        Err(e) => report(e, output_format),
    }
}

/// Client carrying `token` in the configured credential cookie
fn authenticated_client(server: &str, token: &str) -> ApiClient {
    ApiClient::new(server)
        .with_cookie_name(config::config().security.auth_cookie.as_str())
        .with_token(token)
}

fn report(err: ClientError, output_format: OutputFormat) -> anyhow::Result<()> {
    let code = match &err {
        ClientError::LoginRequired { .. } => "LOGIN_REQUIRED",
        ClientError::Status { .. } => "REQUEST_FAILED",
        ClientError::Transport(_) => "UNREACHABLE",
    };
    // Text mode errors are printed once by the binary
    if let OutputFormat::Json = output_format {
        utils::output_error(output_format, &err.to_string(), Some(code))?;
    }
    Err(err.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authenticated_client_uses_configured_cookie() {
        let client = authenticated_client("http://localhost:5001", "abc");
        assert_eq!(client.cookie_name(), config::config().security.auth_cookie);
    }
}
