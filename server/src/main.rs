#![recursion_limit = "256"]

mod config;
mod routes;


use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use crate::config::{ConfigError, ServerConfig};

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to bind {addr}: {source}")]
    Bind { addr: std::net::SocketAddr, source: std::io::Error },

    #[error("server failed: {0}")]
    Serve(std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    // Read .env before the subscriber so RUST_LOG from it applies; report after.
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    if let Some(err) = unreadable_dotenv(&dotenv) {
        tracing::warn!(error = %err, "ignoring unreadable .env");
    }

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "lampstore stopped");
            ExitCode::FAILURE
        }
    }
}

/// The `.env` error worth reporting: a missing file is normal.
fn unreadable_dotenv(result: &Result<std::path::PathBuf, dotenvy::Error>) -> Option<&dotenvy::Error> {
    result.as_ref().err().filter(|err| !err.not_found())
}

async fn run() -> Result<(), StartupError> {
    let config = ServerConfig::from_env()?;
    let app = routes::app(&config)?;

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })?;

    tracing::info!(%addr, "lampstore listening");
    axum::serve(listener, app).await.map_err(StartupError::Serve)
}
