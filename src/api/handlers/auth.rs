//! Handlers for login and logout.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode, header::SET_COOKIE},
    response::{IntoResponse, Response},
};

use crate::api::cookies::{session_clear_cookie, session_cookie, session_set_cookie};
use crate::api::dto::auth::{LoginRequest, LoginResponse, LogoutResponse};
use crate::application::services::AuthError;
use crate::error::AppError;
use crate::state::AppState;

/// Message returned after a successful login.
pub const WELCOME_MESSAGE: &str = "¡Bienvenido!";

/// Message returned for an unknown user or wrong password.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Usuario o contraseña incorrectos";

/// Signs a user in and sets the session cookie.
///
/// # Endpoint
///
/// `POST /login`
///
/// # Request Body
///
/// ```json
/// { "username": "admin", "password": "admin123" }
/// ```
///
/// # Response
///
/// - **200 OK** `{"success": true, "message": "¡Bienvenido!"}` with a
///   `Set-Cookie` header
/// - **401 Unauthorized** `{"success": false, "message": "..."}`, also for
///   a body that is not a JSON object with both fields
///
/// A session cookie already present on the request is closed first.
pub async fn login_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let req = match body {
        Ok(Json(req)) => req,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Malformed login body");
            return Ok(invalid_credentials());
        }
    };

    match state.auth_service.login(&req.username, &req.password).await {
        Ok(issued) => {
            if let Some(previous) = session_cookie(&headers) {
                state.auth_service.logout(&previous).await;
            }

            let cookie = session_set_cookie(
                &issued.cookie_value,
                state.auth_service.ttl(),
                state.cookie_secure,
            );

            let body = LoginResponse {
                success: true,
                message: WELCOME_MESSAGE.to_string(),
            };

            Ok(([(SET_COOKIE, cookie)], Json(body)).into_response())
        }
        Err(AuthError::InvalidCredentials) => Ok(invalid_credentials()),
        Err(e) => Err(e.into()),
    }
}

fn invalid_credentials() -> Response {
    let body = LoginResponse {
        success: false,
        message: INVALID_CREDENTIALS_MESSAGE.to_string(),
    };

    (StatusCode::UNAUTHORIZED, Json(body)).into_response()
}

/// Closes the current session, if any, and clears the cookie.
///
/// # Endpoint
///
/// `POST /logout`
///
/// Always answers `{"success": true}`.
pub async fn logout_handler(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if let Some(cookie) = session_cookie(&headers) {
        state.auth_service.logout(&cookie).await;
    }

    (
        [(SET_COOKIE, session_clear_cookie(state.cookie_secure))],
        Json(LogoutResponse { success: true }),
    )
        .into_response()
}
