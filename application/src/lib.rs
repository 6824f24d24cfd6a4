//! Application layer for song-match
//!
//! This crate contains the quiz use case, port definitions, and application
//! configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::QuizConfig;
pub use ports::quiz_logger::{NoQuizLogger, QuizEvent, QuizLogger};
pub use use_cases::answer_input::resolve_choice;
pub use use_cases::run_quiz::{
    AnswerOutcome, QuizResult, RankedMatch, RunQuizError, RunQuizInput, RunQuizUseCase,
};
