use reqwest::{header, StatusCode};
use serde_json::Value;

/// Where a client should send the user when the API says they are not logged in
pub const LOGIN_PATH: &str = "/login";

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("not logged in, go to {redirect}")]
    LoginRequired { redirect: &'static str },

    #[error("request failed with {status}: {message}")]
    Status { status: StatusCode, message: String },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// HTTP client for the Mastery API that carries the credential cookie
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    cookie_name: String,
    token: Option<String>,
}

impl ApiClient {
    /// `server` is the origin, e.g. `http://localhost:5001`; requests go to `<server>/api`.
    pub fn new(server: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: format!("{}/api", server.trim_end_matches('/')),
            cookie_name: "token".to_string(),
            token: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_cookie_name(mut self, name: impl Into<String>) -> Self {
        self.cookie_name = name.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    pub async fn health(&self) -> Result<Value, ClientError> {
        self.get("/health").await
    }

    pub async fn whoami(&self) -> Result<Value, ClientError> {
        self.get("/auth/whoami").await
    }

    pub async fn admin_status(&self) -> Result<Value, ClientError> {
        self.get("/admin/status").await
    }

    pub async fn get(&self, path: &str) -> Result<Value, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.http.get(&url);
        if let Some(token) = &self.token {
            request = request.header(header::COOKIE, format!("{}={}", self.cookie_name, token));
        }

        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            tracing::debug!("GET {} returned 401, login required", url);
            return Err(ClientError::LoginRequired { redirect: LOGIN_PATH });
        }

        if !status.is_success() {
            let body: Value = response.json().await.unwrap_or(Value::Null);
            let message = body
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown error"))
                .to_string();
            return Err(ClientError::Status { status, message });
        }

        Ok(response.json().await?)
    }
}
