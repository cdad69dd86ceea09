//! Application layer - orchestration between the quiz domain and the ports.

mod presentation;
mod quiz_service;

pub use presentation::{ChartPoint, PresentationPayload};
pub use quiz_service::QuizService;
