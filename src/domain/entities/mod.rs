//! Core domain entities.
//!
//! Entities are plain data structures; persistence and HTTP concerns live in
//! the infrastructure and API layers.
//!
//! # Entity Types
//!
//! - [`VisitRecord`] - All-time and per-day visit counters
//! - [`Session`] - An authenticated browser session
//! - [`CredentialTable`] - The fixed set of users allowed to sign in

pub mod credential;
pub mod session;
pub mod visit;

pub use credential::CredentialTable;
pub use session::Session;
pub use visit::{DailyCount, VisitRecord, WeeklyStats};
