//! Handler for raw visit counters.

use axum::{Json, extract::State};

use crate::api::dto::visits::VisitsResponse;
use crate::state::AppState;

/// Returns the stored visit record unchanged.
///
/// # Endpoint
///
/// `GET /api/visits` (session required)
pub async fn visits_handler(State(state): State<AppState>) -> Json<VisitsResponse> {
    Json(state.visit_service.get_visits().await.into())
}
