//! API route configuration, nested under `/api`.

use crate::api::handlers::{me_handler, stats_handler, visits_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// API routes requiring a live session.
///
/// Protected via [`crate::api::middleware::auth`].
///
/// # Endpoints
///
/// - `GET /visits` - Raw visit record
/// - `GET /stats`  - Total plus the last seven days
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/visits", get(visits_handler))
        .route("/stats", get(stats_handler))
}

/// API routes open to anonymous callers.
///
/// # Endpoints
///
/// - `GET /me` - Current session status
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/me", get(me_handler))
}
