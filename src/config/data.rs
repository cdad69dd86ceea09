//! Quiz data definition - the question bank and reference profiles.
//!
//! The bank and profiles were literal in-source tables in the original
//! program; here they are immutable configuration. A YAML file can override
//! the built-in default, and `into_parts` fails fast at load time on any
//! broken invariant rather than letting aggregation or matching hit it
//! later.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::error::DataError;
use crate::domain::foundation::DomainError;
use crate::domain::quiz::{
    AlignmentVector, Category, ProfileSet, Question, QuestionBank, ReferenceProfile,
};

/// One question as declared in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSpec {
    pub category: String,
    pub prompt: String,
}

/// One reference profile as declared in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSpec {
    pub name: String,
    pub scores: Vec<u8>,
}

/// Serializable quiz definition: the ordered question list plus the
/// reference profiles to match against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizData {
    pub questions: Vec<QuestionSpec>,
    pub profiles: Vec<ProfileSpec>,
}

static DEFAULT_QUIZ: Lazy<QuizData> = Lazy::new(|| {
    fn q(category: &str, prompt: &str) -> QuestionSpec {
        QuestionSpec {
            category: category.to_string(),
            prompt: prompt.to_string(),
        }
    }

    QuizData {
        questions: vec![
            q("Experience-Expertise", "Have you ever participated in or contributed to a DAO before?"),
            q("Experience-Expertise", "Do you possess technical skills relevant to the DAO's projects (e.g., smart contracts, dApp development)?"),
            q("Experience-Expertise", "Do you have experience with open-source projects, particularly in the Ethereum ecosystem?"),
            q("Experience-Expertise", "Are you interested in contributing to specific initiatives or projects within the DAO?"),
            q("Experience-Expertise", "Do you have endorsements from well-known members of the Ethereum community or previous DAOs?"),
            q("Principle-Value", "Do you think that transparency and openness should always be prioritized over privacy and security in a DAO's operations?"),
            q("Principle-Value", "Should a DAO primarily focus on supporting and funding projects that align with its core values and principles?"),
            q("Decentralization-Governance", "Do you believe that full decentralization should always be the primary goal of a DAO?"),
            q("Decentralization-Governance", "Do you think that a DAO should prioritize a more hierarchical governance structure for efficient decision-making?"),
            q("Decentralization-Governance", "Do you believe that community-driven governance models should always be preferred over more centralized alternatives?"),
            q("Regulations-Compliance", "Do you think that DAOs should actively engage with regulators to ensure compliance and foster mainstream adoption?"),
            q("Regulations-Compliance", "Do you support the idea of implementing self-regulation within the Ethereum ecosystem to minimize the need for external regulations?"),
            q("Coordination-Collaboration", "Do you believe that DAOs should primarily focus on human coordination and collaboration over technical solutions?"),
            q("Coordination-Collaboration", "Are you open to collaborating with other members of the Ethereum community to achieve common goals?"),
            q("Coordination-Collaboration", "Do you believe that DAOs should prioritize open-source development to foster innovation and collaboration within the Ethereum ecosystem?"),
            q("Finance-Sustainability", "Is the financial success of a DAO more important than its impact on the broader Ethereum ecosystem?"),
            q("Finance-Sustainability", "Should a DAO prioritize long-term, sustainable growth over short-term financial gains?"),
        ],
        profiles: vec![
            ProfileSpec {
                name: "Delegate A".to_string(),
                scores: vec![4, 2, 5, 3, 4, 4],
            },
            ProfileSpec {
                name: "Delegate B".to_string(),
                scores: vec![2, 4, 3, 5, 1, 2],
            },
            ProfileSpec {
                name: "Delegate C".to_string(),
                scores: vec![5, 3, 2, 4, 5, 2],
            },
        ],
    }
});

impl Default for QuizData {
    /// The built-in DAO delegate-alignment quiz.
    fn default() -> Self {
        DEFAULT_QUIZ.clone()
    }
}

impl QuizData {
    /// Parses a YAML quiz definition.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, DataError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Reads and parses a YAML quiz definition file.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, DataError> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    /// Builds the validated domain objects.
    ///
    /// # Errors
    ///
    /// Fails fast on an empty question list, blank categories or prompts,
    /// profile scores outside 1..=5, or any profile vector whose length
    /// differs from the derived category count.
    pub fn into_parts(self) -> Result<(QuestionBank, ProfileSet), DataError> {
        let mut questions = Vec::with_capacity(self.questions.len());
        for spec in self.questions {
            let category = Category::new(spec.category).map_err(DomainError::from)?;
            questions.push(Question::new(category, spec.prompt).map_err(DomainError::from)?);
        }
        let bank = QuestionBank::new(questions)?;

        let mut profiles = Vec::with_capacity(self.profiles.len());
        for spec in self.profiles {
            profiles.push(
                ReferenceProfile::new(spec.name, AlignmentVector::new(spec.scores))
                    .map_err(DomainError::from)?,
            );
        }
        let profiles = ProfileSet::new(profiles, bank.category_count())?;

        Ok((bank, profiles))
    }
}
