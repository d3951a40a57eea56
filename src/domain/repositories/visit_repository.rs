//! Repository trait for the persisted visit record.

use crate::domain::entities::VisitRecord;
use crate::error::StoreError;
use async_trait::async_trait;

/// Durable storage for the single global [`VisitRecord`].
///
/// The record is always read and written whole; implementations do not
/// need to support partial updates.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::JsonVisitRepository`] - JSON file on disk
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VisitRepository: Send + Sync {
    /// Reads the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the backing store cannot be read and
    /// [`StoreError::Corrupt`] if its contents cannot be parsed.
    async fn load(&self) -> Result<VisitRecord, StoreError>;

    /// Replaces the stored record with `record`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the write fails.
    async fn save(&self, record: &VisitRecord) -> Result<(), StoreError>;
}
