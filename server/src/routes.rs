//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Serves the server-rendered store page at `/`, the compiled WASM/CSS
//! bundle under `/pkg`, static assets from the site root, and a liveness
//! probe at `/healthz`.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use storefront::app::{App, shell};

use crate::config::{ConfigError, ServerConfig};

/// Site root to serve from: the configured override, else Leptos' own.
pub fn resolve_site_root(configured: Option<&Path>, leptos_site_root: &str) -> PathBuf {
    configured.map_or_else(|| PathBuf::from(leptos_site_root), Path::to_path_buf)
}

/// Leptos SSR app plus static assets.
///
/// # Errors
///
/// Returns [`ConfigError::Leptos`] if the Leptos configuration cannot be
/// loaded (missing or malformed `[workspace.metadata.leptos]` section).
pub fn app(config: &ServerConfig) -> Result<Router, ConfigError> {
    let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
    let mut leptos_options = conf.leptos_options;
    let site_root = resolve_site_root(config.site_root.as_deref(), &leptos_options.site_root);
    leptos_options.site_root = Arc::from(site_root.to_string_lossy().as_ref());

    let routes = generate_route_list(App);
    let router = Router::new()
        .route("/healthz", get(healthz))
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone())
        })
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .fallback_service(ServeDir::new(&site_root))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options);

    tracing::info!(site_root = %site_root.display(), "store routes ready");
    Ok(router)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
