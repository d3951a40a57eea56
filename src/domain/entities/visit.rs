//! Visit record entity and its weekly aggregation.

use chrono::{Datelike, NaiveDate, TimeDelta};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Number of days covered by [`VisitRecord::weekly`].
pub const WEEK_LEN: i64 = 7;

/// Short weekday names as rendered by the `es-ES` locale, Monday first.
const WEEKDAYS_ES: [&str; 7] = ["lun", "mar", "mié", "jue", "vie", "sáb", "dom"];

/// Running visit counters.
///
/// This is also the on-disk format of the visit file:
///
/// ```json
/// { "total": 42, "daily": { "2026-10-16": 30, "2026-10-17": 12 } }
/// ```
///
/// Counters only ever grow, so `total` equals the sum of every increment
/// applied to `daily`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitRecord {
    pub total: u64,
    #[serde(default)]
    pub daily: BTreeMap<String, u64>,
}

impl VisitRecord {
    /// Counts one visit on `day`. Counters saturate at `u64::MAX`.
    pub fn record(&mut self, day: NaiveDate) {
        self.total = self.total.saturating_add(1);
        let count = self.daily.entry(day_key(day)).or_insert(0);
        *count = count.saturating_add(1);
    }

    /// Visits counted on `day`, zero if none.
    pub fn count_on(&self, day: NaiveDate) -> u64 {
        self.daily.get(&day_key(day)).copied().unwrap_or(0)
    }

    /// Builds the seven-day window ending at `today`, oldest day first.
    pub fn weekly(&self, today: NaiveDate) -> WeeklyStats {
        let days = (0..WEEK_LEN)
            .rev()
            .map(|offset| {
                let day = today - TimeDelta::days(offset);
                DailyCount {
                    date: day_key(day),
                    label: day_label(day),
                    count: self.count_on(day),
                }
            })
            .collect();

        WeeklyStats {
            total: self.total,
            days,
        }
    }
}

/// Visits for a single calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyCount {
    pub date: String,
    pub label: String,
    pub count: u64,
}

/// All-time total plus the last seven days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyStats {
    pub total: u64,
    pub days: Vec<DailyCount>,
}

/// ISO `YYYY-MM-DD` key used in the daily map.
pub fn day_key(day: NaiveDate) -> String {
    day.format("%Y-%m-%d").to_string()
}

/// Short weekday plus day of month, e.g. `lun 13`.
pub fn day_label(day: NaiveDate) -> String {
    let weekday = WEEKDAYS_ES[day.weekday().num_days_from_monday() as usize];
    format!("{} {}", weekday, day.day())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_record_creates_and_increments_day() {
        let mut record = VisitRecord::default();
        let day = date(2026, 10, 17);

        record.record(day);
        record.record(day);

        assert_eq!(record.total, 2);
        assert_eq!(record.daily.get("2026-10-17"), Some(&2));
    }

    #[test]
    fn test_record_saturates_at_max() {
        let day = date(2026, 10, 17);
        let mut record = VisitRecord {
            total: u64::MAX,
            daily: [(day_key(day), u64::MAX)].into(),
        };

        record.record(day);
        record.record(date(2026, 10, 18));

        assert_eq!(record.total, u64::MAX);
        assert_eq!(record.count_on(day), u64::MAX);
        assert_eq!(record.count_on(date(2026, 10, 18)), 1);
    }

    #[test]
    fn test_total_matches_daily_sum() {
        let mut record = VisitRecord::default();
        for offset in 0..10 {
            record.record(date(2026, 10, 1) + TimeDelta::days(offset % 4));
        }

        assert_eq!(record.total, 10);
        assert_eq!(record.daily.values().sum::<u64>(), 10);
    }

    #[test]
    fn test_weekly_has_seven_days_ending_today() {
        let mut record = VisitRecord::default();
        let today = date(2026, 10, 17);
        record.record(today);
        record.record(date(2026, 10, 11));
        record.record(date(2026, 10, 10));

        let stats = record.weekly(today);

        assert_eq!(stats.total, 3);
        assert_eq!(stats.days.len(), 7);
        assert_eq!(stats.days[0].date, "2026-10-11");
        assert_eq!(stats.days[0].count, 1);
        assert_eq!(stats.days[6].date, "2026-10-17");
        assert_eq!(stats.days[6].count, 1);
        assert!(stats.days[1..6].iter().all(|d| d.count == 0));
    }

    #[test]
    fn test_weekly_crosses_month_boundary() {
        let stats = VisitRecord::default().weekly(date(2026, 3, 2));

        let dates: Vec<_> = stats.days.iter().map(|d| d.date.as_str()).collect();
        assert_eq!(
            dates,
            [
                "2026-02-24",
                "2026-02-25",
                "2026-02-26",
                "2026-02-27",
                "2026-02-28",
                "2026-03-01",
                "2026-03-02"
            ]
        );
    }

    #[test]
    fn test_day_label() {
        // 2026-10-12 is a Monday
        assert_eq!(day_label(date(2026, 10, 12)), "lun 12");
        assert_eq!(day_label(date(2026, 10, 17)), "sáb 17");
        assert_eq!(day_label(date(2026, 10, 18)), "dom 18");
    }

    #[test]
    fn test_deserialize_without_daily() {
        let record: VisitRecord = serde_json::from_str(r#"{"total": 5}"#).unwrap();
        assert_eq!(record.total, 5);
        assert!(record.daily.is_empty());
    }
}
