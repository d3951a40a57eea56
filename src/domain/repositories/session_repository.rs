//! Repository trait for login sessions.

use crate::domain::entities::Session;
use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};

/// Storage for sessions keyed by their opaque token.
///
/// Expiry is not enforced on lookup; callers decide whether a returned
/// session is still live and pass the TTL to [`Self::purge_expired`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemorySessionRepository`] - process-local map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Stores `session` under `token`, replacing any previous entry.
    async fn insert(&self, token: String, session: Session);

    /// Looks up the session for `token`.
    async fn find(&self, token: &str) -> Option<Session>;

    /// Removes the session for `token`. Returns whether one existed.
    async fn remove(&self, token: &str) -> bool;

    /// Drops every session expired at `now` under `ttl`. Returns how many.
    async fn purge_expired(&self, now: DateTime<Utc>, ttl: TimeDelta) -> usize;
}
