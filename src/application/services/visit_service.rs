//! Visit counting and aggregation service.

use chrono::{NaiveDate, Utc};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::entities::{VisitRecord, WeeklyStats};
use crate::domain::repositories::VisitRepository;
use crate::error::AppError;

/// Service owning the global visit counters.
///
/// The record is loaded once at startup and kept in memory; every recorded
/// visit rewrites the full record through the repository before returning.
/// Increments are serialised by an async mutex.
pub struct VisitService<R: VisitRepository> {
    repository: Arc<R>,
    record: Mutex<VisitRecord>,
}

impl<R: VisitRepository> VisitService<R> {
    /// Loads the stored record and builds the service.
    ///
    /// An unreadable or corrupt store is logged and replaced by an empty
    /// record; it never fails startup.
    pub async fn load(repository: Arc<R>) -> Self {
        let record = match repository.load().await {
            Ok(record) => {
                tracing::info!(total = record.total, "Loaded visit record");
                record
            }
            Err(e) => {
                tracing::warn!(error = %e, "Visit store unreadable, starting from zero");
                VisitRecord::default()
            }
        };

        Self::with_record(repository, record)
    }

    /// Builds the service around an already loaded record.
    pub fn with_record(repository: Arc<R>, record: VisitRecord) -> Self {
        Self {
            repository,
            record: Mutex::new(record),
        }
    }

    /// Counts one visit for the current UTC date.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the record cannot be persisted.
    /// The in-memory counters keep the increment either way.
    pub async fn record_visit(&self) -> Result<VisitRecord, AppError> {
        self.record_visit_on(today()).await
    }

    /// Counts one visit on `day` and persists the updated record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the record cannot be persisted.
    pub async fn record_visit_on(&self, day: NaiveDate) -> Result<VisitRecord, AppError> {
        let mut record = self.record.lock().await;
        record.record(day);
        self.repository.save(&record).await?;

        tracing::debug!(total = record.total, "Visit recorded");

        Ok(record.clone())
    }

    /// Returns a snapshot of the current record.
    pub async fn get_visits(&self) -> VisitRecord {
        self.record.lock().await.clone()
    }

    /// Seven-day summary ending at the current UTC date.
    pub async fn get_weekly_stats(&self) -> WeeklyStats {
        self.get_weekly_stats_ending(today()).await
    }

    /// Seven-day summary ending at `day`.
    pub async fn get_weekly_stats_ending(&self, day: NaiveDate) -> WeeklyStats {
        self.record.lock().await.weekly(day)
    }
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}
