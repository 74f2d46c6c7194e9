#![recursion_limit = "256"]

mod config;
mod routes;
mod state;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "voyage-desk failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let config = config::ServerConfig::from_env().map_err(|e| e.to_string())?;
    let port = config.port;
    tracing::info!(api_url = %config.api_url, "forwarding /api to voyage API");

    let state = state::AppState::new(config).map_err(|e| format!("http client init: {e}"))?;
    let app = routes::app(state)?;

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .map_err(|e| format!("bind port {port}: {e}"))?;

    tracing::info!(%port, "voyage-desk listening");
    axum::serve(listener, app).await.map_err(|e| format!("server failed: {e}"))
}
