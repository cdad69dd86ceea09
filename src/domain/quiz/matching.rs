//! Profile matching by linear similarity.

use super::{AlignmentVector, ProfileSet, ReferenceProfile};
use crate::domain::foundation::{DomainError, ErrorCode};

/// A matched profile with its similarity score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub profile: ReferenceProfile,
    pub similarity: i32,
}

/// Similarity between two vectors: sum over categories of
/// `5 - |user - reference|`. Higher is closer; identical vectors score
/// [`max_similarity`].
///
/// Both vectors must have the same length. `ProfileSet` construction and
/// score aggregation both guarantee the category count, so mismatched
/// inputs can only come from bypassing those constructors; debug builds
/// assert on them, release builds compare only the common prefix.
pub fn similarity(user: &AlignmentVector, reference: &AlignmentVector) -> i32 {
    debug_assert_eq!(user.len(), reference.len());
    user.iter()
        .zip(reference.iter())
        .map(|(u, r)| 5 - (u as i32 - r as i32).abs())
        .sum()
}

/// The maximum achievable similarity for a given category count.
pub fn max_similarity(category_count: usize) -> i32 {
    5 * category_count as i32
}

/// Selects the profile with the highest similarity to the aggregated vector.
///
/// Stable left-to-right scan with a strictly-greater comparison, so ties
/// keep the earliest-listed profile.
///
/// # Errors
///
/// - `NoProfilesAvailable` if the set is empty
pub fn best_match(scores: &AlignmentVector, profiles: &ProfileSet) -> Result<MatchResult, DomainError> {
    let mut best: Option<MatchResult> = None;
    for profile in profiles.iter() {
        let score = similarity(scores, profile.scores());
        let is_better = best.as_ref().map_or(true, |b| score > b.similarity);
        if is_better {
            best = Some(MatchResult {
                profile: profile.clone(),
                similarity: score,
            });
        }
    }

    best.ok_or_else(|| {
        DomainError::new(
            ErrorCode::NoProfilesAvailable,
            "No reference profiles available to match against",
        )
    })
}
