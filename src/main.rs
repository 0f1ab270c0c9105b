//! EcoPack360 server: renders the dashboard with Leptos SSR and serves the
//! hydration bundle.

#![recursion_limit = "256"]

mod config;
mod error;
mod routes;

use crate::config::ServerConfig;
use crate::error::ServerError;

async fn run() -> Result<(), ServerError> {
    let config = ServerConfig::from_env()?;
    let leptos_options = routes::load_leptos_options()?;
    let app = routes::app(leptos_options);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind { addr: addr.clone(), source })?;

    tracing::info!(%addr, "ecopack360 listening");
    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    tracing_subscriber::fmt::init();

    // A missing .env file is normal outside local development.
    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!(error = %e, "no .env file loaded");
    }

    if let Err(e) = run().await {
        tracing::error!(error = %e, "server exited");
        return Err(e);
    }
    Ok(())
}
