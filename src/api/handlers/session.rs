//! Handler for the current session status.

use axum::{Json, extract::State, http::HeaderMap};

use crate::api::cookies::session_cookie;
use crate::api::dto::auth::SessionResponse;
use crate::state::AppState;

/// Reports whether the request carries a live session.
///
/// # Endpoint
///
/// `GET /api/me`
///
/// # Response
///
/// ```json
/// { "authenticated": true, "user": "admin" }
/// ```
///
/// `user` is omitted when not authenticated. Never fails.
pub async fn me_handler(State(state): State<AppState>, headers: HeaderMap) -> Json<SessionResponse> {
    let user = match session_cookie(&headers) {
        Some(cookie) => state.auth_service.check_session(&cookie).await,
        None => None,
    };

    Json(SessionResponse::from_user(user))
}
