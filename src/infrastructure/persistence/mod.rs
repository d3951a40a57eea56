//! Storage implementations of the domain repository traits.
//!
//! - [`JsonVisitRepository`] - visit counters in a JSON file
//! - [`InMemorySessionRepository`] - sessions in a process-local map

pub mod json_visit_repository;
pub mod memory_session_repository;

pub use json_visit_repository::JsonVisitRepository;
pub use memory_session_repository::InMemorySessionRepository;
