#![allow(dead_code)]

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use mastery_api::auth::{Claims, JwtKeys};
use mastery_api::config::AppConfig;
use reqwest::StatusCode;

pub const TEST_JWT_SECRET: &str = "test-secret-for-integration-tests";

pub struct TestServer {
    pub port: u16,
    pub base_url: String,
}

impl TestServer {
    /// Serve the full router on an unused port inside this test's runtime
    pub async fn spawn() -> Result<Self> {
        Self::spawn_with(AppConfig::development()).await
    }

    /// Same as `spawn`, with `config`'s settings and the test secret
    pub async fn spawn_with(config: AppConfig) -> Result<Self> {
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        let config = config.with_jwt_secret(TEST_JWT_SECRET);
        let app = mastery_api::app(&config)?;

        let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
            .await
            .context("failed to bind test listener")?;
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        let server = Self { port, base_url };
        server.wait_ready(Duration::from_secs(5)).await?;
        Ok(server)
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        while Instant::now() < deadline {
            let url = format!("{}/api/health", self.base_url);
            if let Ok(resp) = client.get(&url).send().await {
                if resp.status() == StatusCode::OK {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        anyhow::bail!("server did not become ready on {} within {:?}", self.base_url, timeout)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

pub fn token_with(secret: &str, claims: &Claims) -> String {
    JwtKeys::from_secret(secret)
        .expect("test secret is not empty")
        .issue(claims)
        .expect("failed to sign test token")
}

pub fn token_for_role(role: &str) -> String {
    token_with(TEST_JWT_SECRET, &claims_for_role(role))
}

pub fn claims_for_role(role: &str) -> Claims {
    Claims::new("test-user", role, 1).expect("one hour is a valid expiry")
}

pub fn cookie(token: &str) -> String {
    format!("token={}", token)
}
