//! File-based History Store Adapter
//!
//! Stores the quiz history log as a single JSON file on disk, the flat-file
//! equivalent of the original's one browser storage slot.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::warn;

use crate::domain::foundation::DomainError;
use crate::domain::quiz::HistoryEntry;
use crate::ports::HistoryStore;

/// File-based storage for the history log.
#[derive(Debug, Clone)]
pub struct FileHistoryStore {
    path: PathBuf,
}

impl FileHistoryStore {
    /// Create a store backed by the given JSON file path.
    ///
    /// The file and its parent directories are created on first save.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn ensure_parent_dir(&self) -> Result<(), DomainError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| DomainError::storage(e.to_string()))?;
        }
        Ok(())
    }
}

#[async_trait]
impl HistoryStore for FileHistoryStore {
    async fn load(&self) -> Result<Vec<HistoryEntry>, DomainError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let json = fs::read_to_string(&self.path)
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?;

        match serde_json::from_str(&json) {
            Ok(entries) => Ok(entries),
            Err(err) => {
                // Corrupt history is an empty log, not a fatal error
                warn!(
                    path = %self.path.display(),
                    error = %err,
                    "discarding undecodable history file"
                );
                Ok(Vec::new())
            }
        }
    }

    async fn save(&self, entries: &[HistoryEntry]) -> Result<(), DomainError> {
        self.ensure_parent_dir().await?;

        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| DomainError::storage(e.to_string()))?;

        fs::write(&self.path, json)
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::quiz::AlignmentVector;
    use tempfile::TempDir;

    fn entry(name: &str, scores: Vec<u8>) -> HistoryEntry {
        HistoryEntry::new(AlignmentVector::new(scores), name)
    }

    fn store_in(dir: &TempDir) -> FileHistoryStore {
        FileHistoryStore::new(dir.path().join("quiz_history.json"))
    }

    #[tokio::test]
    async fn load_missing_file_returns_empty_log() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let entries = store.load().await.unwrap();
        assert!(entries.is_empty());
    }

    #[tokio::test]
    async fn save_and_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let entries = vec![entry("Delegate A", vec![5, 1]), entry("Delegate B", vec![1, 5])];
        store.save(&entries).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded, entries);
    }

    #[tokio::test]
    async fn load_corrupt_file_returns_empty_log() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        std::fs::write(store.path(), "{not valid json").unwrap();

        let entries = store.load().await.unwrap();
        assert!(entries.is_empty());
    }

    #[tokio::test]
    async fn save_creates_missing_parent_directories() {
        let dir = TempDir::new().unwrap();
        let store = FileHistoryStore::new(dir.path().join("nested/data/history.json"));

        store.save(&[entry("A", vec![3])]).await.unwrap();

        assert!(store.path().exists());
        assert_eq!(store.load().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn save_overwrites_with_full_log() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.save(&[entry("A", vec![3])]).await.unwrap();
        let mut log = store.load().await.unwrap();
        log.push(entry("B", vec![4]));
        store.save(&log).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].match_name, "A");
        assert_eq!(loaded[1].match_name, "B");
    }

    #[tokio::test]
    async fn file_uses_documented_layout() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.save(&[entry("Delegate C", vec![5, 3, 2])]).await.unwrap();

        let raw = std::fs::read_to_string(store.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value[0]["matchName"], "Delegate C");
        assert_eq!(value[0]["scores"], serde_json::json!([5, 3, 2]));
        assert!(value[0]["date"].is_string());
    }
}
