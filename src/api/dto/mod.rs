//! Data Transfer Objects for API requests and responses.

pub mod auth;
pub mod stats;
pub mod visits;
