//! JSON file implementation of [`VisitRepository`].

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::entities::VisitRecord;
use crate::domain::repositories::VisitRepository;
use crate::error::StoreError;

/// Stores the visit record as a pretty-printed JSON document.
///
/// Every save rewrites the whole file.
pub struct JsonVisitRepository {
    path: PathBuf,
}

impl JsonVisitRepository {
    /// Creates a repository backed by `path` without touching the filesystem.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a repository and makes sure the backing file exists.
    ///
    /// Missing parent directories are created and a missing file is seeded
    /// with an empty record. An existing file is left untouched, even if it
    /// is unreadable.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the directory or seed file cannot be created.
    pub async fn init(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let repo = Self::new(path);

        if let Some(parent) = repo.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).await?;
        }

        if !fs::try_exists(&repo.path).await? {
            repo.save(&VisitRecord::default()).await?;
            tracing::info!(path = %repo.path.display(), "Created empty visit file");
        }

        Ok(repo)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl VisitRepository for JsonVisitRepository {
    async fn load(&self) -> Result<VisitRecord, StoreError> {
        let raw = fs::read(&self.path).await?;
        Ok(serde_json::from_slice(&raw)?)
    }

    async fn save(&self, record: &VisitRecord) -> Result<(), StoreError> {
        let body = serde_json::to_vec_pretty(record)?;
        fs::write(&self.path, body).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[tokio::test]
    async fn test_init_seeds_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("visits.json");

        let repo = JsonVisitRepository::init(&path).await.unwrap();

        assert!(path.exists());
        assert_eq!(repo.load().await.unwrap(), VisitRecord::default());
    }

    #[tokio::test]
    async fn test_init_keeps_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("visits.json");
        std::fs::write(&path, r#"{"total": 7, "daily": {"2026-10-17": 7}}"#).unwrap();

        let repo = JsonVisitRepository::init(&path).await.unwrap();

        assert_eq!(repo.load().await.unwrap().total, 7);
    }

    #[tokio::test]
    async fn test_save_rewrites_whole_record() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonVisitRepository::init(dir.path().join("visits.json"))
            .await
            .unwrap();

        let mut record = VisitRecord::default();
        record.record(NaiveDate::from_ymd_opt(2026, 10, 17).unwrap());
        repo.save(&record).await.unwrap();

        let raw = std::fs::read_to_string(repo.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["total"], 1);
        assert_eq!(value["daily"]["2026-10-17"], 1);
    }

    #[tokio::test]
    async fn test_load_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("visits.json");
        std::fs::write(&path, "{ not json").unwrap();

        let repo = JsonVisitRepository::new(&path);

        assert!(matches!(repo.load().await, Err(StoreError::Corrupt(_))));
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonVisitRepository::new(dir.path().join("absent.json"));

        assert!(matches!(repo.load().await, Err(StoreError::Io(_))));
    }
}
