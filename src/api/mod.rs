//! JSON API layer.
//!
//! # Modules
//!
//! - [`cookies`] - Session cookie parsing and construction
//! - [`dto`] - Request/response bodies
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Authentication, visit counting and tracing
//! - [`routes`] - Route configuration

pub mod cookies;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
