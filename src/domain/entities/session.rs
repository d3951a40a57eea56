//! Login session entity.

use chrono::{DateTime, TimeDelta, Utc};

/// Server-side state attached to a session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Opens a session for `username` starting at `created_at`.
    pub fn new(username: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            username: username.into(),
            created_at,
        }
    }

    /// Returns true once `ttl` has elapsed since the session was created.
    ///
    /// Expiry is fixed at creation time; reading a session does not extend it.
    pub fn is_expired(&self, now: DateTime<Utc>, ttl: TimeDelta) -> bool {
        now - self.created_at >= ttl
    }
}
