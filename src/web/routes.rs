//! Page route configuration.

use crate::api::handlers::{login_handler, logout_handler};
use crate::state::AppState;
use crate::web::handlers::{dashboard_handler, login_page_handler};
use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};

/// Pages requiring a live session.
///
/// Protected via [`crate::web::middleware::web_auth`].
///
/// # Endpoints
///
/// - `GET /dashboard` - Visit dashboard
pub fn protected_routes() -> Router<AppState> {
    Router::new().route("/dashboard", get(dashboard_handler))
}

/// Public pages and the session endpoints.
///
/// # Endpoints
///
/// - `GET  /`       - Redirects to `/login`
/// - `GET  /login`  - Login page
/// - `POST /login`  - Sign in (JSON)
/// - `POST /logout` - Sign out (JSON)
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(|| async { Redirect::to("/login") }))
        .route("/login", get(login_page_handler).post(login_handler))
        .route("/logout", post(logout_handler))
}
