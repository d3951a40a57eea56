//! Session cookie authentication middleware for protected API routes.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::api::cookies::session_cookie;
use crate::{error::AppError, state::AppState};

/// Username of the session that passed authentication.
///
/// Inserted into request extensions by [`layer`] and by
/// [`crate::web::middleware::web_auth::layer`].
#[derive(Debug, Clone)]
pub struct CurrentUser(pub String);

/// Rejects requests that carry no live session.
///
/// # Cookie Format
///
/// ```text
/// Cookie: visit_session=<token>.<signature>
/// ```
///
/// # Errors
///
/// Returns `401 Unauthorized` if:
/// - The session cookie is missing
/// - The cookie signature is invalid
/// - The session was closed or has expired
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, routing::get, middleware};
/// use crate::api::middleware::auth;
///
/// let protected = Router::new()
///     .route("/stats", get(stats_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let cookie = session_cookie(req.headers());

    let username = st
        .auth_service
        .require_session(cookie.as_deref())
        .await?;

    req.extensions_mut().insert(CurrentUser(username));

    Ok(next.run(req).await)
}
