//! Top-level router configuration combining pages, API and static files.
//!
//! # Route Structure
//!
//! - `GET  /`           - Redirect to the login page
//! - `GET  /login`      - Login page
//! - `POST /login`      - Sign in
//! - `POST /logout`     - Sign out
//! - `GET  /dashboard`  - Dashboard (cookie session required, else redirect)
//! - `GET  /api/me`     - Session status (public)
//! - `GET  /api/visits` - Raw counters (cookie session required, else 401)
//! - `GET  /api/stats`  - Weekly counters (cookie session required, else 401)
//! - anything else      - Static files from the configured directory
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Visit counting** - Runs on every request before routing
//! - **Authentication** - 401 for the API, redirect for pages

use crate::api;
use crate::api::middleware::{auth, tracing, visit_counter};
use crate::state::AppState;
use crate::web;
use crate::web::middleware::web_auth;
use axum::{Router, middleware};
use std::path::Path;
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `static_dir` - directory served for paths no route matches
pub fn app_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    let api_router = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer))
        .merge(api::routes::public_routes());

    let pages = web::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            web_auth::layer,
        ))
        .merge(web::routes::public_routes());

    Router::new()
        .merge(pages)
        .nest("/api", api_router)
        .fallback_service(ServeDir::new(static_dir.as_ref()))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            visit_counter::layer,
        ))
        .with_state(state)
        .layer(tracing::layer())
}
