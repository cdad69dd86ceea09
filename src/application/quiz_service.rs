//! QuizService - drives quiz sessions and persists completed runs.
//!
//! Each user action (answer, reset) is processed synchronously to
//! completion: the session transition, the history append, and the storage
//! flush all happen before the call returns a new presentation payload.

use std::sync::Arc;

use tracing::{debug, info};

use crate::application::{ChartPoint, PresentationPayload};
use crate::domain::foundation::{Answer, DomainError};
use crate::domain::quiz::{
    HistoryEntry, MatchOutcome, ProfileSet, QuestionBank, QuizSession, SessionPhase,
};
use crate::ports::HistoryStore;

/// Application service owning the single quiz session and the history log.
pub struct QuizService {
    session: QuizSession,
    history: Vec<HistoryEntry>,
    store: Arc<dyn HistoryStore>,
}

impl QuizService {
    /// Starts the service: reads the persisted history once and opens a
    /// fresh session at question 0.
    ///
    /// # Errors
    ///
    /// - `StorageError` if the history store cannot be read at all
    ///   (absent or corrupt data is an empty log, not an error)
    pub async fn start(
        bank: Arc<QuestionBank>,
        profiles: Arc<ProfileSet>,
        store: Arc<dyn HistoryStore>,
    ) -> Result<Self, DomainError> {
        let history = store.load().await?;
        info!(
            entries = history.len(),
            questions = bank.question_count(),
            profiles = profiles.len(),
            "quiz service started"
        );

        Ok(Self {
            session: QuizSession::new(bank, profiles),
            history,
            store,
        })
    }

    /// Answers the current question and returns the next payload.
    ///
    /// On the final answer the session completes (or errors), and a
    /// completed run is appended to the history log and flushed before this
    /// method returns.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` if the session is not in progress
    /// - `StorageError` if flushing the history log fails
    pub async fn answer(&mut self, score: Answer) -> Result<PresentationPayload, DomainError> {
        let phase = self.session.answer(score)?;
        debug!(answered = self.session.answered_count(), ?phase, "answer recorded");

        if phase == SessionPhase::Completed {
            if let Some(outcome) = self.session.outcome() {
                let entry = HistoryEntry::new(outcome.scores().clone(), outcome.profile().name());
                self.history.push(entry);
                self.store.save(&self.history).await?;
                info!(
                    match_name = outcome.profile().name(),
                    similarity = outcome.similarity(),
                    history_entries = self.history.len(),
                    "quiz completed"
                );
            }
        }

        Ok(self.presentation())
    }

    /// Resets the session to question 0, discarding in-progress answers and
    /// any recorded outcome or error. History is untouched.
    pub fn reset(&mut self) -> PresentationPayload {
        self.session.reset();
        debug!("session reset");
        self.presentation()
    }

    /// Returns the payload for the session's current phase.
    pub fn presentation(&self) -> PresentationPayload {
        match self.session.phase() {
            SessionPhase::InProgress => match self.session.current_question() {
                Some(question) => PresentationPayload::Question {
                    category: question.category().as_str().to_string(),
                    prompt: question.prompt().to_string(),
                    number: self.session.current_index() + 1,
                    total: self.session.bank().question_count(),
                },
                // Unreachable: an in-progress session always has a question
                None => PresentationPayload::Error {
                    message: "No current question".to_string(),
                },
            },
            SessionPhase::Completed => match self.session.outcome() {
                Some(outcome) => PresentationPayload::Results {
                    match_name: outcome.profile().name().to_string(),
                    similarity: outcome.similarity(),
                    chart: self.chart_points(outcome),
                },
                None => PresentationPayload::Error {
                    message: "Completed session has no outcome".to_string(),
                },
            },
            SessionPhase::Errored => PresentationPayload::Error {
                message: self
                    .session
                    .error_reason()
                    .unwrap_or("Unknown error")
                    .to_string(),
            },
        }
    }

    /// Returns the history log in completion order.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Returns the underlying session (read-only).
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    fn chart_points(&self, outcome: &MatchOutcome) -> Vec<ChartPoint> {
        self.session
            .bank()
            .categories()
            .iter()
            .enumerate()
            .map(|(i, category)| ChartPoint {
                subject: category.as_str().to_string(),
                user: outcome.scores().get(i).unwrap_or(0),
                delegate: outcome.profile().scores().get(i).unwrap_or(0),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryHistoryStore;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::quiz::{AlignmentVector, Category, Question, ReferenceProfile};

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

    async fn service_with_store(store: Arc<dyn HistoryStore>) -> QuizService {
        QuizService::start(test_bank(), test_profiles(), store)
            .await
            .unwrap()
    }

    async fn test_service() -> QuizService {
        service_with_store(Arc::new(InMemoryHistoryStore::new())).await
    }

    fn answer(value: u8) -> Answer {
        Answer::try_from_u8(value).unwrap()
    }

    async fn complete_quiz(service: &mut QuizService, values: [u8; 4]) -> PresentationPayload {
        let mut last = service.presentation();
        for value in values {
            last = service.answer(answer(value)).await.unwrap();
        }
        last
    }

    #[tokio::test]
    async fn start_presents_first_question() {
        let service = test_service().await;

        match service.presentation() {
            PresentationPayload::Question {
                category,
                prompt,
                number,
                total,
            } => {
                assert_eq!(category, "Governance");
                assert_eq!(prompt, "G1");
                assert_eq!(number, 1);
                assert_eq!(total, 4);
            }
            other => panic!("expected question payload, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn completing_quiz_presents_chart_results() {
        let mut service = test_service().await;
        let payload = complete_quiz(&mut service, [5, 5, 1, 1]).await;

        match payload {
            PresentationPayload::Results {
                match_name,
                similarity,
                chart,
            } => {
                assert_eq!(match_name, "A");
                assert_eq!(similarity, 10);
                assert_eq!(chart.len(), 2);
                assert_eq!(chart[0].subject, "Governance");
                assert_eq!(chart[0].user, 5);
                assert_eq!(chart[0].delegate, 5);
                assert_eq!(chart[1].subject, "Finance");
                assert_eq!(chart[1].user, 1);
                assert_eq!(chart[1].delegate, 1);
            }
            other => panic!("expected results payload, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn completion_appends_and_flushes_history() {
        let store = Arc::new(InMemoryHistoryStore::new());
        let mut service = service_with_store(store.clone()).await;

        complete_quiz(&mut service, [5, 5, 1, 1]).await;

        assert_eq!(service.history().len(), 1);
        assert_eq!(service.history()[0].match_name, "A");
        assert_eq!(service.history()[0].scores.as_slice(), &[5, 1]);
        // Flushed through the port, not just cached
        assert_eq!(store.entry_count().await, 1);
    }

    #[tokio::test]
    async fn repeated_runs_accumulate_history_in_order() {
        let mut service = test_service().await;

        complete_quiz(&mut service, [5, 5, 1, 1]).await;
        service.reset();
        complete_quiz(&mut service, [1, 1, 5, 5]).await;

        let names: Vec<&str> = service.history().iter().map(|e| e.match_name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[tokio::test]
    async fn start_loads_existing_history() {
        let store = Arc::new(InMemoryHistoryStore::with_entries(vec![HistoryEntry::new(
            AlignmentVector::new(vec![3, 3]),
            "Earlier",
        )]));

        let service = service_with_store(store).await;
        assert_eq!(service.history().len(), 1);
        assert_eq!(service.history()[0].match_name, "Earlier");
    }

    #[tokio::test]
    async fn no_profiles_presents_error_and_history_is_untouched() {
        let store = Arc::new(InMemoryHistoryStore::new());
        let empty = Arc::new(ProfileSet::new(vec![], 2).unwrap());
        let mut service = QuizService::start(test_bank(), empty, store.clone())
            .await
            .unwrap();

        let payload = complete_quiz(&mut service, [3, 3, 3, 3]).await;
        match payload {
            PresentationPayload::Error { message } => {
                assert!(message.contains("No reference profiles"));
            }
            other => panic!("expected error payload, got {:?}", other),
        }
        assert!(service.history().is_empty());
        assert_eq!(store.entry_count().await, 0);
    }

    #[tokio::test]
    async fn reset_after_error_presents_first_question_again() {
        let empty = Arc::new(ProfileSet::new(vec![], 2).unwrap());
        let mut service =
            QuizService::start(test_bank(), empty, Arc::new(InMemoryHistoryStore::new()))
                .await
                .unwrap();

        complete_quiz(&mut service, [3, 3, 3, 3]).await;
        let payload = service.reset();

        assert!(matches!(
            payload,
            PresentationPayload::Question { number: 1, .. }
        ));
    }

    #[tokio::test]
    async fn answering_after_completion_is_rejected() {
        let mut service = test_service().await;
        complete_quiz(&mut service, [5, 5, 1, 1]).await;

        let err = service.answer(answer(3)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidStateTransition);
        assert_eq!(service.history().len(), 1);
    }
}
