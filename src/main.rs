use crate::config::F1Config;
use crate::database::F1Repository;
use crate::database::sqlite::SqliteRepository;
use crate::error::{apply_error_status, url_not_found};
use axum::{Router, http::StatusCode, middleware::map_response_with_state, routing::get};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
mod database;
mod domain;
mod error;
mod features;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn F1Repository>,
    pub config: Arc<F1Config>,
}

/// Builds the full service: root, `/api` features, the 404 fallback and the
/// error status policy.
pub fn build_router(state: AppState) -> Router {
    let policy = state.config.error_status;

    Router::new()
        .route("/", get(root_handler))
        .nest("/api", features::api_router())
        .fallback(url_not_found)
        // registered paths answer other methods like unregistered ones
        .method_not_allowed_fallback(url_not_found)
        .layer(map_response_with_state(policy, apply_error_status))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root_handler() -> StatusCode {
    StatusCode::OK
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // determine environment variables
    dotenv::dotenv().ok();

    // load centralized config
    let config = F1Config::from_env()?;

    let filter =
        EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(true).compact().init();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        database_url = %config.database_url,
        error_status = ?config.error_status,
        "f1-query-server starting"
    );

    // one read-only pool for the lifetime of the process
    let repo = Arc::new(
        SqliteRepository::connect(&config.database_url, config.max_connections).await?,
    );

    let missing = repo.missing_tables().await?;
    if !missing.is_empty() {
        warn!(?missing, "database is missing tables, affected endpoints will report errors");
    }

    let app_state = AppState {
        repo: repo.clone(),
        config: Arc::new(config.clone()),
    };
    let app = build_router(app_state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    repo.close().await;
    info!("server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}
