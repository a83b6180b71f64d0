use anyhow::Context;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up JWT_SECRET, PORT, etc.
    let _ = dotenvy::dotenv();

    mastery_api::init_tracing();

    // Initialize configuration (this loads the config singleton)
    let config = mastery_api::config::config();
    tracing::info!("Starting Mastery API in {:?} mode", config.environment);

    if mastery_api::is_development!() {
        tracing::info!("CORS origins: {:?}", config.security.cors_origins);
    }

    let app = mastery_api::app(config).context("JWT_SECRET must be set")?;

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Mastery API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
