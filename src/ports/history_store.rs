//! History store port.
//!
//! Defines the contract for persisting the append-only quiz history log.
//! The log is one serialized ordered sequence under a single storage slot:
//! it is read in full once at startup and written back in full after each
//! append.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::quiz::HistoryEntry;

/// Storage port for the quiz history log.
///
/// Implementations must treat absent or corrupt data as an empty log, never
/// as an error; only genuine I/O failures surface as `StorageError`.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Loads the full history log in completion order.
    ///
    /// Returns an empty log when nothing has been stored yet or the stored
    /// data cannot be decoded.
    ///
    /// # Errors
    ///
    /// - `StorageError` on I/O failure
    async fn load(&self) -> Result<Vec<HistoryEntry>, DomainError>;

    /// Writes the full history log back to storage.
    ///
    /// # Errors
    ///
    /// - `StorageError` on I/O failure
    async fn save(&self, entries: &[HistoryEntry]) -> Result<(), DomainError>;
}
