//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server has no data API. It renders the Leptos shell at `/`, serves the
//! compiled WASM/JS/CSS bundle under `/pkg` and answers `/healthz` for
//! liveness probes.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::ServerError;

/// Read `[package.metadata.leptos]` (or the `LEPTOS_*` overrides set by
/// cargo-leptos).
///
/// # Errors
///
/// Returns [`ServerError::LeptosConfig`] if the configuration is missing or
/// malformed.
pub fn load_leptos_options() -> Result<LeptosOptions, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::LeptosConfig(e.to_string()))?;
    Ok(conf.leptos_options)
}

/// Liveness routes, independent of the Leptos build.
pub fn health_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Full application: SSR shell, static bundle and health check, with request
/// tracing and gzip.
pub fn app(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(client::app::App);
    let site_root = PathBuf::from(leptos_options.site_root.as_ref());

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options);

    health_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
