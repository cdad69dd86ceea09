//! Storage adapters for the history store port.

mod file_history_store;
mod in_memory_history_store;

pub use file_history_store::FileHistoryStore;
pub use in_memory_history_store::InMemoryHistoryStore;
