//! Quiz module - Question bank, scoring, matching, and session lifecycle.
//!
//! The quiz domain is a linear pipeline: raw answers are aggregated into one
//! mean score per category, the aggregated vector is matched against a fixed
//! set of reference profiles, and each completed run becomes a history entry.

mod history;
mod matching;
mod phase;
mod profile;
mod question;
mod scoring;
mod session;
mod vector;

pub use history::HistoryEntry;
pub use matching::{best_match, max_similarity, similarity, MatchResult};
pub use phase::SessionPhase;
pub use profile::{ProfileSet, ReferenceProfile};
pub use question::{Category, Question, QuestionBank};
pub use scoring::aggregate_scores;
pub use session::{MatchOutcome, QuizSession};
pub use vector::AlignmentVector;
