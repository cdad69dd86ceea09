//! Reference profiles - the fixed stances users are matched against.

use serde::{Deserialize, Serialize};

use super::AlignmentVector;
use crate::domain::foundation::{DomainError, ValidationError};

/// A named, fixed alignment vector representing a pre-defined stance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceProfile {
    name: String,
    scores: AlignmentVector,
}

impl ReferenceProfile {
    /// Creates a profile.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the name is blank
    /// - `OutOfRange` if any score is outside 1..=5
    pub fn new(name: impl Into<String>, scores: AlignmentVector) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        for score in scores.iter() {
            if !(1..=5).contains(&score) {
                return Err(ValidationError::out_of_range("scores", 1, 5, score as i32));
            }
        }
        Ok(Self { name, scores })
    }

    /// Returns the profile name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the profile's alignment vector.
    pub fn scores(&self) -> &AlignmentVector {
        &self.scores
    }
}

/// Ordered, immutable set of reference profiles.
///
/// # Invariants
///
/// - Every profile's vector length equals the declared category count.
///
/// An empty set is constructible; the matcher rejects it with
/// `NoProfilesAvailable` so the error path stays reachable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileSet {
    profiles: Vec<ReferenceProfile>,
    category_count: usize,
}

impl ProfileSet {
    /// Builds a profile set, checking every vector against the category count.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if any profile's vector length differs from
    ///   `category_count`
    pub fn new(
        profiles: Vec<ReferenceProfile>,
        category_count: usize,
    ) -> Result<Self, DomainError> {
        for profile in &profiles {
            if profile.scores().len() != category_count {
                return Err(DomainError::validation(
                    "scores",
                    format!(
                        "Profile '{}' has {} scores, expected {}",
                        profile.name(),
                        profile.scores().len(),
                        category_count
                    ),
                ));
            }
        }
        Ok(Self {
            profiles,
            category_count,
        })
    }

    /// Returns the number of profiles.
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Returns true if the set holds no profiles.
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Returns the category count every vector matches.
    pub fn category_count(&self) -> usize {
        self.category_count
    }

    /// Returns the profiles in declaration order.
    pub fn profiles(&self) -> &[ReferenceProfile] {
        &self.profiles
    }

    /// Iterates over the profiles in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &ReferenceProfile> {
        self.profiles.iter()
    }
}
