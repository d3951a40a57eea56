//! Business logic services for the application layer.

pub mod auth_service;
pub mod visit_service;

pub use auth_service::{AuthError, AuthService, IssuedSession};
pub use visit_service::VisitService;
