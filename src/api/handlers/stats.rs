//! Handler for the seven-day statistics.

use axum::{Json, extract::State};

use crate::api::dto::stats::StatsResponse;
use crate::state::AppState;

/// Returns the all-time total and the last seven days of visits.
///
/// # Endpoint
///
/// `GET /api/stats` (session required)
///
/// # Response
///
/// ```json
/// {
///   "total": 42,
///   "days": [
///     { "date": "2026-10-11", "label": "dom 11", "count": 0 },
///     ...
///     { "date": "2026-10-17", "label": "sáb 17", "count": 9 }
///   ]
/// }
/// ```
///
/// `days` always has seven entries ordered oldest first and ending today (UTC).
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(state.visit_service.get_weekly_stats().await.into())
}
