//! Cookie-based authentication middleware for dashboard pages.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{Redirect, Response},
};

use crate::api::cookies::session_cookie;
use crate::api::middleware::auth::CurrentUser;
use crate::state::AppState;

/// Lets a page request through only when it carries a live session.
///
/// Unlike the API auth middleware which returns `401 Unauthorized`, this
/// middleware redirects to `/login` so a browser lands on the sign-in form.
/// On success the username is stored as a [`CurrentUser`] extension.
pub async fn layer(
    State(st): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Redirect> {
    let cookie = session_cookie(req.headers());

    match st.auth_service.require_session(cookie.as_deref()).await {
        Ok(username) => {
            req.extensions_mut().insert(CurrentUser(username));
            Ok(next.run(req).await)
        }
        Err(_) => Err(Redirect::to("/login")),
    }
}
