//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{AuthService, VisitService};
use crate::infrastructure::persistence::{InMemorySessionRepository, JsonVisitRepository};

/// Process-scoped services, cloned cheaply into each request.
#[derive(Clone)]
pub struct AppState {
    pub visit_service: Arc<VisitService<JsonVisitRepository>>,
    pub auth_service: Arc<AuthService<InMemorySessionRepository>>,
    /// Adds the `Secure` attribute to the session cookie.
    pub cookie_secure: bool,
}

impl AppState {
    pub fn new(
        visit_service: Arc<VisitService<JsonVisitRepository>>,
        auth_service: Arc<AuthService<InMemorySessionRepository>>,
        cookie_secure: bool,
    ) -> Self {
        Self {
            visit_service,
            auth_service,
            cookie_secure,
        }
    }
}
