//! In-memory implementation of [`SessionRepository`].

use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::entities::Session;
use crate::domain::repositories::SessionRepository;

/// Process-local session map. All sessions are lost on restart.
#[derive(Default)]
pub struct InMemorySessionRepository {
    sessions: RwLock<HashMap<String, Session>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored sessions, including ones not yet found to be expired.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn insert(&self, token: String, session: Session) {
        self.sessions.write().await.insert(token, session);
    }

    async fn find(&self, token: &str) -> Option<Session> {
        self.sessions.read().await.get(token).cloned()
    }

    async fn remove(&self, token: &str) -> bool {
        self.sessions.write().await.remove(token).is_some()
    }

    async fn purge_expired(&self, now: DateTime<Utc>, ttl: TimeDelta) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| !session.is_expired(now, ttl));
        before - sessions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_find_remove() {
        let repo = InMemorySessionRepository::new();

        repo.insert("tok".to_string(), Session::new("admin", Utc::now()))
            .await;

        assert_eq!(repo.find("tok").await.unwrap().username, "admin");
        assert!(repo.remove("tok").await);
        assert!(repo.find("tok").await.is_none());
        assert!(!repo.remove("tok").await);
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_purge_expired_keeps_live_sessions() {
        let repo = InMemorySessionRepository::new();
        let now = Utc::now();

        repo.insert(
            "old".to_string(),
            Session::new("admin", now - TimeDelta::hours(2)),
        )
        .await;
        repo.insert("new".to_string(), Session::new("usuario", now)).await;

        assert_eq!(repo.purge_expired(now, TimeDelta::hours(1)).await, 1);
        assert!(repo.find("old").await.is_none());
        assert_eq!(repo.find("new").await.unwrap().username, "usuario");
        assert_eq!(repo.purge_expired(now, TimeDelta::hours(1)).await, 0);
    }
}
