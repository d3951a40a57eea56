//! Repository trait definitions for the domain layer.
//!
//! Traits define the storage contracts; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! with `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`VisitRepository`] - Persisted visit counters
//! - [`SessionRepository`] - Login sessions

pub mod session_repository;
pub mod visit_repository;

pub use session_repository::SessionRepository;
pub use visit_repository::VisitRepository;

#[cfg(test)]
pub use session_repository::MockSessionRepository;
#[cfg(test)]
pub use visit_repository::MockVisitRepository;
