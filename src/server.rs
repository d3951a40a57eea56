//! HTTP server initialization and runtime setup.
//!
//! Builds the visit store, credential table and session store, then runs the
//! Axum server until Ctrl-C.

use crate::application::services::{AuthService, VisitService};
use crate::config::Config;
use crate::infrastructure::persistence::{InMemorySessionRepository, JsonVisitRepository};
use crate::infrastructure::security::{DEMO_USERS, seed_credentials};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use chrono::TimeDelta;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;

/// Builds the shared state from configuration.
///
/// Initializes:
/// - The visit file (created empty if missing) and the in-memory counters
/// - The demo credential table (Argon2 hashes)
/// - An empty session store
///
/// # Errors
///
/// Returns an error if the visit file cannot be created or a demo password
/// cannot be hashed.
pub async fn build_state(config: &Config) -> Result<AppState> {
    let visit_repository = Arc::new(
        JsonVisitRepository::init(&config.data_file)
            .await
            .with_context(|| format!("Failed to prepare {}", config.data_file.display()))?,
    );
    let visit_service = Arc::new(VisitService::load(visit_repository).await);

    let credentials = seed_credentials(&DEMO_USERS)
        .map_err(|e| anyhow::anyhow!("Failed to hash demo credentials: {e}"))?;
    tracing::info!(users = credentials.len(), "Credential table seeded");

    let ttl = TimeDelta::seconds(i64::try_from(config.session_ttl_seconds)?);
    let auth_service = Arc::new(AuthService::new(
        Arc::new(InMemorySessionRepository::new()),
        Arc::new(credentials),
        config.session_secret.clone(),
        ttl,
    ));

    Ok(AppState::new(
        visit_service,
        auth_service,
        config.cookie_secure,
    ))
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - State initialization fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config).await?;

    let app =
        NormalizePathLayer::trim_trailing_slash().layer(app_router(state, &config.static_dir));

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");
    for (username, _) in DEMO_USERS {
        tracing::info!("Demo user available: {username}");
    }

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}
