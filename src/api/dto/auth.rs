//! DTOs for login, logout and session status.

use serde::{Deserialize, Serialize};

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login result shown to the user.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
}

/// Logout acknowledgement.
#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub success: bool,
}

/// Current session status.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub authenticated: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

impl SessionResponse {
    pub fn from_user(user: Option<String>) -> Self {
        Self {
            authenticated: user.is_some(),
            user,
        }
    }
}
