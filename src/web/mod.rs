//! Web dashboard layer for browser-based UI.
//!
//! Pages are rendered server-side with Askama; live data is fetched by
//! client scripts from the JSON API.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`middleware`] - Session check with redirect to the login page
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod middleware;
pub mod routes;
