//! Domain layer containing entities and repository contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Visit counters, sessions and credentials
//! - [`repositories`] - Storage trait definitions
//!
//! The domain layer has no dependency on HTTP or on any concrete storage.
//! Business rules that need storage live in [`crate::application::services`].

pub mod entities;
pub mod repositories;
