//! HTTP middleware for request processing and protection.
//!
//! Provides session authentication, visit counting and request tracing.

pub mod auth;
pub mod tracing;
pub mod visit_counter;
