//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, error types, and the state machine trait
//! that form the vocabulary of the Alignment Scorer domain.

mod answer;
mod errors;
mod state_machine;
mod timestamp;

pub use answer::Answer;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
