//! HTTP request handlers for API endpoints.

pub mod auth;
pub mod session;
pub mod stats;
pub mod visits;

pub use auth::{login_handler, logout_handler};
pub use session::me_handler;
pub use stats::stats_handler;
pub use visits::visits_handler;
