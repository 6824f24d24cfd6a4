//! Domain error types

use crate::profile::Dimension;
use thiserror::Error;

/// Domain-level errors
///
/// Every variant is recoverable by the caller.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Unknown answer choice '{choice}' (expected one of: {})", .valid.join(", "))]
    UnknownAnswerChoice { choice: String, valid: Vec<String> },

    #[error("Cannot normalize a zero-magnitude vector")]
    ZeroVectorNormalization,

    #[error("Catalog is empty")]
    EmptyCatalog,

    #[error("Dimension mismatch (missing: {missing:?}, unexpected: {unexpected:?})")]
    DimensionMismatch {
        missing: Vec<Dimension>,
        unexpected: Vec<String>,
    },

    #[error("Non-finite value {value} for dimension {dimension}")]
    NonFiniteComponent { dimension: Dimension, value: f64 },

    #[error("No catalog item reached a non-negative similarity")]
    NoMatch,

    #[error("Quiz is already completed")]
    QuizAlreadyCompleted,

    #[error("Invalid quiz: {0}")]
    InvalidQuiz(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_choice_display_lists_valid_choices() {
        let error = DomainError::UnknownAnswerChoice {
            choice: "maybe".to_string(),
            valid: vec!["yes".to_string(), "no".to_string()],
        };
        assert_eq!(
            error.to_string(),
            "Unknown answer choice 'maybe' (expected one of: yes, no)"
        );
    }

    #[test]
    fn test_dimension_mismatch_display() {
        let error = DomainError::DimensionMismatch {
            missing: vec![Dimension::Energy],
            unexpected: vec!["Loudness".to_string()],
        };
        assert!(error.to_string().contains("Energy"));
        assert!(error.to_string().contains("Loudness"));
    }
}
