use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::error;

use business::domain::errors::RepositoryError;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store.read_error")]
    ReadError,
    #[error("store.write_error")]
    WriteError,
    #[error("store.malformed_data")]
    MalformedData,
}

impl From<StoreError> for RepositoryError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::MalformedData => RepositoryError::CorruptedData,
            StoreError::ReadError | StoreError::WriteError => RepositoryError::Persistence,
        }
    }
}

/// Whole-file JSON array store, one file per collection.
///
/// Every operation holds the file lock, so a reader never observes a
/// partially written collection. The underlying I/O error is logged here and
/// never travels past the repository boundary.
pub struct JsonFileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates parent directories and seeds the file with an empty
    /// collection when it does not exist yet.
    pub async fn init(&self) -> Result<(), StoreError> {
        let _guard = self.lock.lock().await;

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                error!("Failed to create store directory for {}: {}", self.path.display(), e);
                StoreError::WriteError
            })?;
        }

        match tokio::fs::try_exists(&self.path).await {
            Ok(true) => Ok(()),
            Ok(false) => tokio::fs::write(&self.path, "[]").await.map_err(|e| {
                error!("Failed to seed store file {}: {}", self.path.display(), e);
                StoreError::WriteError
            }),
            Err(e) => {
                error!("Failed to probe store file {}: {}", self.path.display(), e);
                Err(StoreError::ReadError)
            }
        }
    }

    /// Reads the whole collection. A store that has not been initialised yet
    /// reads as empty.
    pub async fn read<T: DeserializeOwned>(&self) -> Result<Vec<T>, StoreError> {
        let _guard = self.lock.lock().await;

        let data = match tokio::fs::read_to_string(&self.path).await {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                error!("Failed to read store file {}: {}", self.path.display(), e);
                return Err(StoreError::ReadError);
            }
        };

        serde_json::from_str(&data).map_err(|e| {
            error!("Malformed store file {}: {}", self.path.display(), e);
            StoreError::MalformedData
        })
    }

    /// Replaces the whole collection on disk. Output stays pretty-printed so
    /// the store file remains hand-inspectable.
    pub async fn write<T: Serialize>(&self, records: &[T]) -> Result<(), StoreError> {
        let _guard = self.lock.lock().await;

        let data = serde_json::to_string_pretty(records).map_err(|e| {
            error!("Failed to serialize records for {}: {}", self.path.display(), e);
            StoreError::WriteError
        })?;
        tokio::fs::write(&self.path, data).await.map_err(|e| {
            error!("Failed to write store file {}: {}", self.path.display(), e);
            StoreError::WriteError
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::tempdir;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Record {
        id: i64,
    }

    #[tokio::test]
    async fn should_read_missing_file_as_empty_collection() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("records.json"));

        let records: Vec<Record> = store.read().await.unwrap();

        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn should_seed_empty_collection_on_init() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested").join("records.json"));

        store.init().await.unwrap();

        let data = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(data, "[]");
    }

    #[tokio::test]
    async fn should_not_clobber_existing_file_on_init() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("records.json"));
        store.write(&[Record { id: 1 }]).await.unwrap();

        store.init().await.unwrap();

        let records: Vec<Record> = store.read().await.unwrap();
        assert_eq!(records, vec![Record { id: 1 }]);
    }

    #[tokio::test]
    async fn should_round_trip_records() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("records.json"));

        store
            .write(&[Record { id: 1 }, Record { id: 2 }])
            .await
            .unwrap();
        let records: Vec<Record> = store.read().await.unwrap();

        assert_eq!(records, vec![Record { id: 1 }, Record { id: 2 }]);
    }

    #[tokio::test]
    async fn should_report_malformed_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("records.json");
        std::fs::write(&path, "not json at all").unwrap();
        let store = JsonFileStore::new(path);

        let result: Result<Vec<Record>, _> = store.read().await;

        assert!(matches!(result.unwrap_err(), StoreError::MalformedData));
    }
}
