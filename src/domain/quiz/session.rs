//! Quiz session aggregate.
//!
//! The session is the single owner of in-progress quiz state: the recorded
//! answers and the lifecycle phase. Answering the last question runs
//! aggregation and matching inside the same call, so there is no window in
//! which partial results are observable.

use std::sync::Arc;

use super::{
    aggregate_scores, best_match, AlignmentVector, ProfileSet, Question, QuestionBank,
    ReferenceProfile, SessionPhase,
};
use crate::domain::foundation::{Answer, DomainError, ErrorCode, StateMachine};

/// The result a completed session carries: the aggregated vector and the
/// matched profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOutcome {
    scores: AlignmentVector,
    profile: ReferenceProfile,
    similarity: i32,
}

impl MatchOutcome {
    /// Returns the user's aggregated per-category scores.
    pub fn scores(&self) -> &AlignmentVector {
        &self.scores
    }

    /// Returns the matched reference profile.
    pub fn profile(&self) -> &ReferenceProfile {
        &self.profile
    }

    /// Returns the similarity between user and profile vectors.
    pub fn similarity(&self) -> i32 {
        self.similarity
    }
}

/// Internal lifecycle state with its phase-specific payload.
#[derive(Debug, Clone, PartialEq)]
enum SessionState {
    InProgress,
    Completed(MatchOutcome),
    Errored(String),
}

/// Quiz session state machine.
///
/// # Invariants
///
/// - While in progress, `answers.len()` is the current question index.
/// - `answers.len()` never exceeds the bank's question count.
/// - Completed always carries a match outcome; Errored always carries a
///   reason.
#[derive(Debug, Clone)]
pub struct QuizSession {
    bank: Arc<QuestionBank>,
    profiles: Arc<ProfileSet>,
    answers: Vec<Answer>,
    state: SessionState,
}

impl QuizSession {
    /// Starts a new session at question 0.
    pub fn new(bank: Arc<QuestionBank>, profiles: Arc<ProfileSet>) -> Self {
        Self {
            bank,
            profiles,
            answers: Vec::new(),
            state: SessionState::InProgress,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the question bank this session runs against.
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    /// Returns the current lifecycle phase.
    pub fn phase(&self) -> SessionPhase {
        match &self.state {
            SessionState::InProgress => SessionPhase::InProgress,
            SessionState::Completed(_) => SessionPhase::Completed,
            SessionState::Errored(_) => SessionPhase::Errored,
        }
    }

    /// Returns the index of the question awaiting an answer.
    ///
    /// Equals the question count once the session has left InProgress.
    pub fn current_index(&self) -> usize {
        self.answers.len()
    }

    /// Returns the question awaiting an answer, or None in a terminal phase.
    pub fn current_question(&self) -> Option<&Question> {
        match self.state {
            SessionState::InProgress => self.bank.question(self.answers.len()),
            _ => None,
        }
    }

    /// Returns how many questions have been answered.
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// Returns the match outcome if the session completed.
    pub fn outcome(&self) -> Option<&MatchOutcome> {
        match &self.state {
            SessionState::Completed(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Returns the error reason if the session errored.
    pub fn error_reason(&self) -> Option<&str> {
        match &self.state {
            SessionState::Errored(reason) => Some(reason),
            _ => None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Records an answer for the current question.
    ///
    /// Advances to the next question, or on the last question aggregates the
    /// answers, matches against the profile set, and transitions to
    /// Completed (match found) or Errored (no profiles). Returns the phase
    /// after the transition.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` if the session is not in progress
    pub fn answer(&mut self, score: Answer) -> Result<SessionPhase, DomainError> {
        self.ensure_in_progress()?;

        self.answers.push(score);
        if self.answers.len() < self.bank.question_count() {
            return Ok(SessionPhase::InProgress);
        }

        let scores = aggregate_scores(&self.bank, &self.answers)?;
        match best_match(&scores, &self.profiles) {
            Ok(result) => {
                self.phase().transition_to(SessionPhase::Completed)?;
                self.state = SessionState::Completed(MatchOutcome {
                    scores,
                    profile: result.profile,
                    similarity: result.similarity,
                });
                Ok(SessionPhase::Completed)
            }
            Err(err) => {
                self.phase().transition_to(SessionPhase::Errored)?;
                self.state = SessionState::Errored(err.message);
                Ok(SessionPhase::Errored)
            }
        }
    }

    /// Returns the session to question 0 with all answers cleared.
    ///
    /// Valid from any phase; this is the only exit from Completed and
    /// Errored.
    pub fn reset(&mut self) {
        self.answers.clear();
        self.state = SessionState::InProgress;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn ensure_in_progress(&self) -> Result<(), DomainError> {
        if self.phase().is_terminal() {
            Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                "Cannot answer: session is not in progress (reset to start over)",
            ))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::quiz::Category;

    fn test_bank() -> Arc<QuestionBank> {
        let questions = vec![
            Question::new(Category::new("Governance").unwrap(), "G1").unwrap(),
            Question::new(Category::new("Governance").unwrap(), "G2").unwrap(),
            Question::new(Category::new("Finance").unwrap(), "F1").unwrap(),
            Question::new(Category::new("Finance").unwrap(), "F2").unwrap(),
        ];
        Arc::new(QuestionBank::new(questions).unwrap())
    }

    fn test_profiles() -> Arc<ProfileSet> {
        let profiles = vec![
            ReferenceProfile::new("A", AlignmentVector::new(vec![5, 1])).unwrap(),
            ReferenceProfile::new("B", AlignmentVector::new(vec![1, 5])).unwrap(),
        ];
        Arc::new(ProfileSet::new(profiles, 2).unwrap())
    }

    fn empty_profiles() -> Arc<ProfileSet> {
        Arc::new(ProfileSet::new(vec![], 2).unwrap())
    }

    fn answer(value: u8) -> Answer {
        Answer::try_from_u8(value).unwrap()
    }

    #[test]
    fn new_session_starts_at_question_zero() {
        let session = QuizSession::new(test_bank(), test_profiles());
        assert_eq!(session.phase(), SessionPhase::InProgress);
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.current_question().unwrap().prompt(), "G1");
    }

    #[test]
    fn answering_advances_index() {
        let mut session = QuizSession::new(test_bank(), test_profiles());
        let phase = session.answer(answer(5)).unwrap();
        assert_eq!(phase, SessionPhase::InProgress);
        assert_eq!(session.current_index(), 1);
        assert_eq!(session.current_question().unwrap().prompt(), "G2");
    }

    #[test]
    fn last_answer_completes_with_match() {
        let mut session = QuizSession::new(test_bank(), test_profiles());
        for value in [5, 5, 1, 1] {
            session.answer(answer(value)).unwrap();
        }

        assert_eq!(session.phase(), SessionPhase::Completed);
        let outcome = session.outcome().unwrap();
        assert_eq!(outcome.scores().as_slice(), &[5, 1]);
        assert_eq!(outcome.profile().name(), "A");
        assert_eq!(outcome.similarity(), 10);
        assert!(session.current_question().is_none());
    }

    #[test]
    fn last_answer_errors_without_profiles() {
        let mut session = QuizSession::new(test_bank(), empty_profiles());
        for value in [3, 3, 3, 3] {
            session.answer(answer(value)).unwrap();
        }

        assert_eq!(session.phase(), SessionPhase::Errored);
        assert!(session.error_reason().unwrap().contains("No reference profiles"));
        assert!(session.outcome().is_none());
    }

    #[test]
    fn answering_after_completion_fails() {
        let mut session = QuizSession::new(test_bank(), test_profiles());
        for value in [5, 5, 1, 1] {
            session.answer(answer(value)).unwrap();
        }

        let err = session.answer(answer(3)).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidStateTransition);
        // The recorded outcome is untouched
        assert_eq!(session.outcome().unwrap().profile().name(), "A");
    }

    #[test]
    fn answering_after_error_fails() {
        let mut session = QuizSession::new(test_bank(), empty_profiles());
        for value in [3, 3, 3, 3] {
            session.answer(answer(value)).unwrap();
        }

        let err = session.answer(answer(3)).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidStateTransition);
    }

    #[test]
    fn reset_from_in_progress_clears_answers() {
        let mut session = QuizSession::new(test_bank(), test_profiles());
        session.answer(answer(4)).unwrap();
        session.answer(answer(4)).unwrap();

        session.reset();
        assert_eq!(session.phase(), SessionPhase::InProgress);
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.answered_count(), 0);
    }

    #[test]
    fn reset_from_completed_clears_outcome() {
        let mut session = QuizSession::new(test_bank(), test_profiles());
        for value in [5, 5, 1, 1] {
            session.answer(answer(value)).unwrap();
        }

        session.reset();
        assert_eq!(session.phase(), SessionPhase::InProgress);
        assert!(session.outcome().is_none());
        assert_eq!(session.current_question().unwrap().prompt(), "G1");
    }

    #[test]
    fn reset_from_errored_allows_retry() {
        let mut session = QuizSession::new(test_bank(), empty_profiles());
        for value in [3, 3, 3, 3] {
            session.answer(answer(value)).unwrap();
        }

        session.reset();
        assert_eq!(session.phase(), SessionPhase::InProgress);
        assert!(session.error_reason().is_none());
        assert!(session.answer(answer(2)).is_ok());
    }

    #[test]
    fn session_can_be_retaken_after_reset() {
        let mut session = QuizSession::new(test_bank(), test_profiles());
        for value in [5, 5, 1, 1] {
            session.answer(answer(value)).unwrap();
        }
        session.reset();
        for value in [1, 1, 5, 5] {
            session.answer(answer(value)).unwrap();
        }

        assert_eq!(session.outcome().unwrap().profile().name(), "B");
    }
}
