//! Score aggregation: raw answers reduced to one mean score per category.

use super::{AlignmentVector, QuestionBank};
use crate::domain::foundation::{Answer, DomainError};

/// Aggregates a complete answer vector into one rounded mean per category.
///
/// Entry *i* is the mean of all answers whose question belongs to category
/// *i* (in the bank's category order), rounded half-away-from-zero. On this
/// all-positive domain that matches the original half-up behavior, and the
/// integer form `(2 * sum + n) / (2 * n)` avoids floating-point ties.
///
/// Pure function: same bank and answers always yield the same vector.
///
/// # Errors
///
/// - `ValidationFailed` if `answers.len()` differs from the bank's question
///   count
pub fn aggregate_scores(
    bank: &QuestionBank,
    answers: &[Answer],
) -> Result<AlignmentVector, DomainError> {
    if answers.len() != bank.question_count() {
        return Err(DomainError::validation(
            "answers",
            format!(
                "Expected {} answers, got {}",
                bank.question_count(),
                answers.len()
            ),
        ));
    }

    let mut scores = Vec::with_capacity(bank.category_count());
    for category in bank.categories() {
        let mut sum: u32 = 0;
        let mut count: u32 = 0;
        for (question, answer) in bank.questions().iter().zip(answers) {
            if question.category() == category {
                sum += answer.value() as u32;
                count += 1;
            }
        }
        // count >= 1 by the bank's construction invariant
        let mean = (2 * sum + count) / (2 * count);
        scores.push(mean as u8);
    }

    Ok(AlignmentVector::new(scores))
}
