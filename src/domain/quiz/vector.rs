//! Aggregated alignment vector value object.

use serde::{Deserialize, Serialize};

/// One score per category, in the bank's category order.
///
/// Entries are conceptually in 1..=5 (a rounded mean of 1-5 answers).
/// Length always equals the category count of the bank the vector was
/// aggregated from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlignmentVector(Vec<u8>);

impl AlignmentVector {
    /// Wraps a per-category score list.
    pub fn new(scores: Vec<u8>) -> Self {
        Self(scores)
    }

    /// Returns the number of categories covered.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the vector covers no categories.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the score for the given category index.
    pub fn get(&self, index: usize) -> Option<u8> {
        self.0.get(index).copied()
    }

    /// Returns the scores as a slice.
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Iterates over the per-category scores.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.iter().copied()
    }
}

impl From<Vec<u8>> for AlignmentVector {
    fn from(scores: Vec<u8>) -> Self {
        Self::new(scores)
    }
}
