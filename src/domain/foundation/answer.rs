//! Answer value object for the quiz Likert scale (1 to 5).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Likert-scale answer: 1 (strongly disagree) to 5 (strongly agree).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Answer {
    StronglyDisagree = 1,
    Disagree = 2,
    Neutral = 3,
    Agree = 4,
    StronglyAgree = 5,
}

impl Answer {
    /// The lowest valid answer value.
    pub const MIN: u8 = 1;

    /// The highest valid answer value.
    pub const MAX: u8 = 5;

    /// Creates an Answer from an integer, returning error if out of range.
    pub fn try_from_u8(value: u8) -> Result<Self, ValidationError> {
        match value {
            1 => Ok(Answer::StronglyDisagree),
            2 => Ok(Answer::Disagree),
            3 => Ok(Answer::Neutral),
            4 => Ok(Answer::Agree),
            5 => Ok(Answer::StronglyAgree),
            _ => Err(ValidationError::out_of_range(
                "answer",
                Self::MIN as i32,
                Self::MAX as i32,
                value as i32,
            )),
        }
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Answer::StronglyDisagree => "Strongly Disagree",
            Answer::Disagree => "Disagree",
            Answer::Neutral => "Neutral",
            Answer::Agree => "Agree",
            Answer::StronglyAgree => "Strongly Agree",
        }
    }

    /// Returns all answers in ascending order.
    pub fn all() -> [Answer; 5] {
        [
            Answer::StronglyDisagree,
            Answer::Disagree,
            Answer::Neutral,
            Answer::Agree,
            Answer::StronglyAgree,
        ]
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
