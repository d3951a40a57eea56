//! DTOs for the seven-day statistics endpoint.

use serde::Serialize;

use crate::domain::entities::{DailyCount, WeeklyStats};

/// Visits for one day in the weekly window.
#[derive(Debug, Serialize)]
pub struct DayStats {
    pub date: String,
    pub label: String,
    pub count: u64,
}

/// All-time total plus seven days of counts, oldest first.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total: u64,
    pub days: Vec<DayStats>,
}

impl From<DailyCount> for DayStats {
    fn from(day: DailyCount) -> Self {
        Self {
            date: day.date,
            label: day.label,
            count: day.count,
        }
    }
}

impl From<WeeklyStats> for StatsResponse {
    fn from(stats: WeeklyStats) -> Self {
        Self {
            total: stats.total,
            days: stats.days.into_iter().map(DayStats::from).collect(),
        }
    }
}
