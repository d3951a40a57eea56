//! DTOs for raw visit counters.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::entities::VisitRecord;

/// All-time total and the full per-day map.
///
/// ```json
/// { "total": 12, "daily": { "2026-10-16": 5, "2026-10-17": 7 } }
/// ```
#[derive(Debug, Serialize)]
pub struct VisitsResponse {
    pub total: u64,
    pub daily: BTreeMap<String, u64>,
}

impl From<VisitRecord> for VisitsResponse {
    fn from(record: VisitRecord) -> Self {
        Self {
            total: record.total,
            daily: record.daily,
        }
    }
}
