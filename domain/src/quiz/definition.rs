//! Quiz definition: the immutable question table and catalog

use super::catalog::CatalogItem;
use super::question::Question;
use crate::core::error::DomainError;
use std::collections::HashSet;

/// Everything a quiz needs besides per-session state (Value Object)
///
/// Built once at startup and shared read-only between sessions, typically
/// behind an `Arc`.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizDefinition {
    pub(super) questions: Vec<Question>,
    pub(super) catalog: Vec<CatalogItem>,
}

impl QuizDefinition {
    /// Create a validated quiz definition
    pub fn new(questions: Vec<Question>, catalog: Vec<CatalogItem>) -> Result<Self, DomainError> {
        let quiz = Self { questions, catalog };
        quiz.validate()?;
        Ok(quiz)
    }

    /// Check the structural rules a quiz must satisfy.
    ///
    /// - at least one question, each with a non-empty prompt
    /// - every question has at least one choice and no duplicate labels
    /// - the catalog is non-empty and no item has a zero vector
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.questions.is_empty() {
            return Err(DomainError::InvalidQuiz("quiz has no questions".to_string()));
        }

        for (i, question) in self.questions.iter().enumerate() {
            if question.prompt().trim().is_empty() {
                return Err(DomainError::InvalidQuiz(format!(
                    "question {} has an empty prompt",
                    i + 1
                )));
            }
            if question.answer_weights().is_empty() {
                return Err(DomainError::InvalidQuiz(format!(
                    "question {} has no answer choices",
                    i + 1
                )));
            }
            let mut seen = HashSet::new();
            for label in question.answer_weights().labels() {
                if !seen.insert(label) {
                    return Err(DomainError::InvalidQuiz(format!(
                        "question {} lists '{}' more than once",
                        i + 1,
                        label
                    )));
                }
            }
        }

        if self.catalog.is_empty() {
            return Err(DomainError::EmptyCatalog);
        }

        if let Some(item) = self.catalog.iter().find(|item| item.vector().is_zero()) {
            return Err(DomainError::InvalidQuiz(format!(
                "catalog item '{}' has a zero vector",
                item.label()
            )));
        }

        Ok(())
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn catalog(&self) -> &[CatalogItem] {
        &self.catalog
    }
}
