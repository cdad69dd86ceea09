//! History entry - one appended record per completed quiz.

use serde::{Deserialize, Serialize};

use super::AlignmentVector;
use crate::domain::foundation::Timestamp;

/// A completed quiz run: when it finished, the aggregated vector, and the
/// matched profile's name.
///
/// Entries are append-only and never edited or removed. The serialized form
/// is the persisted storage layout: `{date, scores, matchName}` with an
/// ISO-8601 date and an integer array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub date: Timestamp,
    pub scores: AlignmentVector,
    #[serde(rename = "matchName")]
    pub match_name: String,
}

impl HistoryEntry {
    /// Creates an entry stamped with the current time.
    pub fn new(scores: AlignmentVector, match_name: impl Into<String>) -> Self {
        Self {
            date: Timestamp::now(),
            scores,
            match_name: match_name.into(),
        }
    }
}
