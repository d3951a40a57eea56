//! # Visit Dashboard
//!
//! A small page-visit counter with a session-protected dashboard, built with Axum.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Visit counters, sessions, credentials and repository traits
//! - **Application Layer** ([`application`]) - Visit counting and authentication services
//! - **Infrastructure Layer** ([`infrastructure`]) - JSON visit file, session map, password hashing
//! - **API Layer** ([`api`]) - JSON handlers, DTOs and middleware
//! - **Web Layer** ([`web`]) - Login and dashboard pages
//!
//! ## Request Flow
//!
//! 1. Every request passes the visit counting filter
//!    ([`api::middleware::visit_counter`]), which counts `GET` page loads
//!    outside `/api` that are not static assets
//! 2. Protected API routes then pass the session check
//!    ([`api::middleware::auth`]); dashboard pages pass
//!    [`web::middleware::web_auth`]
//! 3. Unmatched paths are served from the static directory
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run
//! # open http://localhost:3000 and sign in as admin / admin123
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AuthError, AuthService, VisitService};
    pub use crate::domain::entities::{CredentialTable, Session, VisitRecord, WeeklyStats};
    pub use crate::error::{AppError, StoreError};
    pub use crate::state::AppState;
}
