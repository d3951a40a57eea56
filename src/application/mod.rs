//! Application layer services implementing business logic.
//!
//! Services consume repository traits and give HTTP handlers a storage-agnostic
//! API.
//!
//! # Available Services
//!
//! - [`services::visit_service::VisitService`] - Visit counting and weekly aggregation
//! - [`services::auth_service::AuthService`] - Credential checks and login sessions

pub mod services;
