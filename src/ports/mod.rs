//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `HistoryStore` - Durable key-value style storage for the quiz history
//!   log (read-all-at-startup, write-all-on-append semantics)

mod history_store;

pub use history_store::HistoryStore;
