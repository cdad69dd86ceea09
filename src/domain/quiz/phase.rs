//! Quiz session phase - the session lifecycle status enum.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// Lifecycle phase of a quiz session.
///
/// Completed and Errored are terminal: the only way out is an explicit
/// reset, which returns the session to InProgress at question 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    /// Answering questions; the session tracks the current index.
    InProgress,
    /// All questions answered and a profile matched.
    Completed,
    /// Matching failed (no reference profiles available).
    Errored,
}

impl StateMachine for SessionPhase {
    fn can_transition_to(&self, target: &Self) -> bool {
        use SessionPhase::*;
        matches!(
            (self, target),
            // Finishing the last question
            (InProgress, Completed) | (InProgress, Errored)
            // Reset, from any phase
            | (InProgress, InProgress) | (Completed, InProgress) | (Errored, InProgress)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use SessionPhase::*;
        match self {
            InProgress => vec![Completed, Errored, InProgress],
            Completed => vec![InProgress],
            Errored => vec![InProgress],
        }
    }

    fn is_terminal(&self) -> bool {
        !matches!(self, SessionPhase::InProgress)
    }
}
