//! In-Memory History Store Adapter
//!
//! Keeps the history log in memory. Useful for testing and development.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::DomainError;
use crate::domain::quiz::HistoryEntry;
use crate::ports::HistoryStore;

/// In-memory storage for the history log.
#[derive(Debug, Clone, Default)]
pub struct InMemoryHistoryStore {
    entries: Arc<RwLock<Vec<HistoryEntry>>>,
}

impl InMemoryHistoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with entries.
    pub fn with_entries(entries: Vec<HistoryEntry>) -> Self {
        Self {
            entries: Arc::new(RwLock::new(entries)),
        }
    }

    /// Clear all stored data (useful for tests).
    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }

    /// Get the number of stored entries.
    pub async fn entry_count(&self) -> usize {
        self.entries.read().await.len()
    }
}

#[async_trait]
impl HistoryStore for InMemoryHistoryStore {
    async fn load(&self) -> Result<Vec<HistoryEntry>, DomainError> {
        Ok(self.entries.read().await.clone())
    }

    async fn save(&self, entries: &[HistoryEntry]) -> Result<(), DomainError> {
        *self.entries.write().await = entries.to_vec();
        Ok(())
    }
}
