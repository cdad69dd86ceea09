//! Question and question bank entities.
//!
//! The bank is fixed at load time. Question order defines the answer-vector
//! index mapping, and category order is first-occurrence order over the
//! questions.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{DomainError, ValidationError};

/// Thematic grouping of questions, one axis of the alignment comparison.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    /// Creates a category name, rejecting empty or whitespace-only input.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("category"));
        }
        Ok(Self(name))
    }

    /// Returns the category name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single quiz question, immutable once the bank is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    category: Category,
    prompt: String,
}

impl Question {
    /// Creates a question, rejecting an empty prompt.
    pub fn new(category: Category, prompt: impl Into<String>) -> Result<Self, ValidationError> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(ValidationError::empty_field("prompt"));
        }
        Ok(Self { category, prompt })
    }

    /// Returns the question's category.
    pub fn category(&self) -> &Category {
        &self.category
    }

    /// Returns the question text.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }
}

/// Immutable ordered list of questions with its derived category set.
///
/// # Invariants
///
/// - At least one question.
/// - `categories` holds the distinct category names in first-occurrence
///   order, so every category has at least one contributing question and
///   aggregation can never divide by zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
    categories: Vec<Category>,
}

impl QuestionBank {
    /// Builds a bank from an ordered question list.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the question list is empty
    pub fn new(questions: Vec<Question>) -> Result<Self, DomainError> {
        if questions.is_empty() {
            return Err(DomainError::validation(
                "questions",
                "Question bank cannot be empty",
            ));
        }

        let mut categories: Vec<Category> = Vec::new();
        for question in &questions {
            if !categories.contains(question.category()) {
                categories.push(question.category().clone());
            }
        }

        Ok(Self {
            questions,
            categories,
        })
    }

    /// Returns the number of questions.
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// Returns the number of distinct categories.
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Returns the questions in answer-vector order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Returns the categories in first-occurrence order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Returns the question at the given index, if any.
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }
}
