//! Infrastructure layer for storage and security primitives.
//!
//! # Modules
//!
//! - [`persistence`] - Visit file and session map implementations
//! - [`security`] - Argon2 password hashing

pub mod persistence;
pub mod security;
