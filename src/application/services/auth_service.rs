//! Session-based authentication service.

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{TimeDelta, Utc};
use hmac::{Hmac, Mac};
use rand::RngCore;
use sha2::Sha256;
use std::sync::Arc;

use crate::domain::entities::{CredentialTable, Session};
use crate::domain::repositories::SessionRepository;
use crate::error::AppError;
use crate::infrastructure::security::verify_password;
use serde_json::json;

type HmacSha256 = Hmac<Sha256>;

/// Random bytes behind each session token.
const TOKEN_BYTES: usize = 32;

/// Authentication failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// Unknown username or wrong password.
    #[error("invalid username or password")]
    InvalidCredentials,

    /// No live session is attached to the request.
    #[error("not authenticated")]
    Unauthenticated,
}

impl From<AuthError> for AppError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::InvalidCredentials => AppError::unauthorized(
                "Unauthorized",
                json!({"reason": "Invalid username or password"}),
            ),
            AuthError::Unauthenticated => AppError::unauthorized(
                "Unauthorized",
                json!({"reason": "Missing or expired session"}),
            ),
        }
    }
}

/// A session created by a successful login.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    /// Signed value to hand to the browser as the session cookie.
    pub cookie_value: String,
    pub username: String,
}

/// Service validating credentials and tracking login sessions.
///
/// Session tokens are random and never leave the server unsigned: the cookie
/// value is `<token>.<hmac>` where the MAC is HMAC-SHA256 of the token keyed
/// by `signing_secret`. Cookies with a missing or wrong MAC are treated as
/// absent without touching the session store.
pub struct AuthService<R: SessionRepository> {
    sessions: Arc<R>,
    credentials: Arc<CredentialTable>,
    signing_secret: String,
    ttl: TimeDelta,
}

impl<R: SessionRepository> AuthService<R> {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `sessions` - session storage
    /// - `credentials` - fixed user table
    /// - `signing_secret` - HMAC key for cookie signatures
    /// - `ttl` - lifetime of a session from the moment it is created
    pub fn new(
        sessions: Arc<R>,
        credentials: Arc<CredentialTable>,
        signing_secret: String,
        ttl: TimeDelta,
    ) -> Self {
        Self {
            sessions,
            credentials,
            signing_secret,
            ttl,
        }
    }

    pub fn ttl(&self) -> TimeDelta {
        self.ttl
    }

    /// Checks credentials and opens a new session.
    ///
    /// Sessions that expired without being looked up again are dropped
    /// before the new one is stored.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] if the user is unknown or
    /// the password does not match. No session is created in that case.
    pub async fn login(&self, username: &str, password: &str) -> Result<IssuedSession, AuthError> {
        let hash = self
            .credentials
            .password_hash(username)
            .ok_or(AuthError::InvalidCredentials)?;

        if !verify_password(password, hash) {
            tracing::info!(username, "Login rejected");
            return Err(AuthError::InvalidCredentials);
        }

        let now = Utc::now();
        let purged = self.sessions.purge_expired(now, self.ttl).await;
        if purged > 0 {
            tracing::debug!(purged, "Dropped expired sessions");
        }

        let token = generate_token();
        self.sessions
            .insert(token.clone(), Session::new(username, now))
            .await;

        tracing::info!(username, "Login succeeded");

        Ok(IssuedSession {
            cookie_value: self.sign(&token),
            username: username.to_string(),
        })
    }

    /// Destroys the session behind `cookie_value`, if any.
    pub async fn logout(&self, cookie_value: &str) {
        if let Some(token) = self.verify(cookie_value)
            && self.sessions.remove(token).await
        {
            tracing::info!("Session closed");
        }
    }

    /// Returns the username of the live session behind `cookie_value`.
    ///
    /// An expired session is removed on the spot and reported as absent.
    pub async fn check_session(&self, cookie_value: &str) -> Option<String> {
        let token = self.verify(cookie_value)?;
        let session = self.sessions.find(token).await?;

        if session.is_expired(Utc::now(), self.ttl) {
            self.sessions.remove(token).await;
            tracing::debug!(username = %session.username, "Session expired");
            return None;
        }

        Some(session.username)
    }

    /// Like [`Self::check_session`], for callers that require a session.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Unauthenticated`] if `cookie_value` is absent or
    /// does not resolve to a live session.
    pub async fn require_session(&self, cookie_value: Option<&str>) -> Result<String, AuthError> {
        match cookie_value {
            Some(value) => self
                .check_session(value)
                .await
                .ok_or(AuthError::Unauthenticated),
            None => Err(AuthError::Unauthenticated),
        }
    }

    fn mac(&self) -> HmacSha256 {
        HmacSha256::new_from_slice(self.signing_secret.as_bytes())
            .expect("HMAC accepts any key length")
    }

    /// Appends the hex-encoded HMAC to `token`.
    fn sign(&self, token: &str) -> String {
        let mut mac = self.mac();
        mac.update(token.as_bytes());
        format!("{}.{}", token, hex::encode(mac.finalize().into_bytes()))
    }

    /// Returns the token inside a correctly signed cookie value.
    fn verify<'a>(&self, cookie_value: &'a str) -> Option<&'a str> {
        let (token, signature) = cookie_value.rsplit_once('.')?;
        let signature = hex::decode(signature).ok()?;

        let mut mac = self.mac();
        mac.update(token.as_bytes());
        mac.verify_slice(&signature).ok()?;

        Some(token)
    }
}

/// Generates a fresh opaque session token.
fn generate_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}
