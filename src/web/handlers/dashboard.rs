//! Dashboard page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Extension, response::IntoResponse};

use crate::api::middleware::auth::CurrentUser;

/// Template for the dashboard page.
///
/// Renders `templates/dashboard.html`. Counters and the weekly chart are
/// filled in by `dashboard.js` from `/api/stats`.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub username: String,
    pub initial: String,
}

/// Renders the dashboard for the signed-in user.
///
/// # Endpoint
///
/// `GET /dashboard`
pub async fn dashboard_handler(
    Extension(CurrentUser(username)): Extension<CurrentUser>,
) -> impl IntoResponse {
    let initial = username
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect::<String>())
        .unwrap_or_default();

    DashboardTemplate { username, initial }
}
