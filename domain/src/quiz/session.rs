//! Quiz session entity
//!
//! A session is owned by exactly one conversation. It walks the question
//! list in order and settles on a catalog label after the last answer:
//!
//! ```text
//! AwaitingAnswer(0) ──answer──▶ AwaitingAnswer(1) ──▶ … ──▶ AwaitingAnswer(N-1)
//!                                                              │ answer
//!                                                              ▼
//!                                                     Completed(label)
//! ```

use super::definition::QuizDefinition;
use crate::core::error::DomainError;
use crate::profile::ProfileVector;
use crate::scoring::{apply_answer, find_best_match, normalize};
use serde::Serialize;

/// Where a session stands
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum QuizState {
    /// Waiting for the answer to the question at this index
    AwaitingAnswer(usize),
    /// All questions answered; holds the best match's label
    Completed(String),
}

/// Per-conversation quiz state (Entity)
///
/// # Example
///
/// ```
/// use song_match_domain::{QuizDefinition, QuizSession, QuizState};
///
/// let quiz = QuizDefinition::song_match();
/// let mut session = QuizSession::new();
/// for answer in ["neutral", "yes", "no", "hip hop"] {
///     session.submit_answer(&quiz, answer).unwrap();
/// }
/// assert!(matches!(session.state(), QuizState::Completed(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizSession {
    state: QuizState,
    accumulator: ProfileVector,
    answers: Vec<String>,
}

impl QuizSession {
    /// Fresh session at the first question with a zero accumulator
    pub fn new() -> Self {
        Self {
            state: QuizState::AwaitingAnswer(0),
            accumulator: ProfileVector::zero(),
            answers: Vec::new(),
        }
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }

    /// Index of the question awaiting an answer, if the quiz is in progress
    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            QuizState::AwaitingAnswer(index) => Some(index),
            QuizState::Completed(_) => None,
        }
    }

    pub fn accumulator(&self) -> &ProfileVector {
        &self.accumulator
    }

    /// Choice labels accepted so far, in order
    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    pub fn is_complete(&self) -> bool {
        matches!(self.state, QuizState::Completed(_))
    }

    /// Label of the best match once the quiz is complete
    pub fn result_label(&self) -> Option<&str> {
        match &self.state {
            QuizState::Completed(label) => Some(label),
            QuizState::AwaitingAnswer(_) => None,
        }
    }

    /// Record the answer to the current question.
    ///
    /// On the last question this also ranks the catalog and moves the
    /// session to `Completed`. Nothing is modified unless every step
    /// succeeds: an unknown choice (or a failed final match) leaves the
    /// state, the accumulator and the answer list exactly as they were.
    pub fn submit_answer(
        &mut self,
        quiz: &QuizDefinition,
        choice: &str,
    ) -> Result<&QuizState, DomainError> {
        let index = self
            .current_index()
            .ok_or(DomainError::QuizAlreadyCompleted)?;

        let question = quiz.question(index).ok_or_else(|| {
            DomainError::InvalidQuiz(format!(
                "session is at question {} but the quiz has {}",
                index + 1,
                quiz.question_count()
            ))
        })?;

        let accumulator = apply_answer(&self.accumulator, question, choice)?;

        let next = if index + 1 < quiz.question_count() {
            QuizState::AwaitingAnswer(index + 1)
        } else {
            let best = find_best_match(&normalize(&accumulator)?, quiz.catalog())?;
            QuizState::Completed(best.label().to_string())
        };

        self.accumulator = accumulator;
        self.answers.push(choice.to_string());
        self.state = next;
        Ok(&self.state)
    }

    /// Discard all progress and start again at the first question
    pub fn restart(&mut self) {
        *self = Self::new();
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::{AnswerWeightTable, CatalogItem, Question};

    fn answer_all(session: &mut QuizSession, quiz: &QuizDefinition, answers: &[&str]) {
        for answer in answers {
            session.submit_answer(quiz, answer).unwrap();
        }
    }

    #[test]
    fn test_new_session_starts_at_zero() {
        let session = QuizSession::new();
        assert_eq!(session.state(), &QuizState::AwaitingAnswer(0));
        assert!(session.accumulator().is_zero());
        assert!(session.answers().is_empty());
        assert!(!session.is_complete());
        assert!(session.result_label().is_none());
    }

    #[test]
    fn test_four_answers_walk_indices_then_complete() {
        let quiz = QuizDefinition::song_match();
        let mut session = QuizSession::new();
        let mut observed = Vec::new();

        for answer in ["super jittery", "yes", "no", "hard rap"] {
            observed.push(session.current_index().unwrap());
            session.submit_answer(&quiz, answer).unwrap();
        }

        assert_eq!(observed, vec![0, 1, 2, 3]);
        assert!(session.is_complete());
        assert!(session.current_index().is_none());
        let label = session.result_label().unwrap();
        assert!(quiz.catalog().iter().any(|item| item.label() == label));
    }

    #[test]
    fn test_accumulator_sums_chosen_weights() {
        let quiz = QuizDefinition::song_match();
        let mut session = QuizSession::new();
        answer_all(&mut session, &quiz, &["neutral", "yes"]);

        let expected = ProfileVector::new(0.5, 0.5, 0.5, 0.5, 0.5)
            + ProfileVector::new(0.8, 0.6, 0.9, 0.5, 0.6);
        assert_eq!(session.accumulator(), &expected);
        assert_eq!(session.answers(), ["neutral", "yes"]);
    }

    #[test]
    fn test_unknown_answer_leaves_session_unchanged() {
        let quiz = QuizDefinition::song_match();
        let mut session = QuizSession::new();
        answer_all(&mut session, &quiz, &["neutral"]);
        let before = session.clone();

        let err = session.submit_answer(&quiz, "maybe").unwrap_err();

        assert!(matches!(err, DomainError::UnknownAnswerChoice { .. }));
        assert_eq!(session, before);
    }

    #[test]
    fn test_answer_after_completion_is_rejected() {
        let quiz = QuizDefinition::song_match();
        let mut session = QuizSession::new();
        answer_all(&mut session, &quiz, &["neutral", "no", "no", "hip hop"]);
        let before = session.clone();

        let err = session.submit_answer(&quiz, "yes").unwrap_err();

        assert_eq!(err, DomainError::QuizAlreadyCompleted);
        assert_eq!(session, before);
    }

    #[test]
    fn test_restart_resets_everything() {
        let quiz = QuizDefinition::song_match();
        let mut session = QuizSession::new();
        answer_all(&mut session, &quiz, &["neutral", "no", "no", "hip hop"]);

        session.restart();

        assert_eq!(session, QuizSession::new());
    }

    #[test]
    fn test_zero_accumulator_at_end_keeps_last_question_open() {
        let quiz = QuizDefinition::new(
            vec![Question::new(
                "Anything?",
                AnswerWeightTable::new()
                    .with_choice("nothing", ProfileVector::zero())
                    .with_choice("something", ProfileVector::new(1.0, 0.0, 0.0, 0.0, 0.0)),
            )],
            vec![CatalogItem::new("A", ProfileVector::new(1.0, 0.0, 0.0, 0.0, 0.0))],
        )
        .unwrap();
        let mut session = QuizSession::new();

        let err = session.submit_answer(&quiz, "nothing").unwrap_err();
        assert_eq!(err, DomainError::ZeroVectorNormalization);
        assert_eq!(session.current_index(), Some(0));

        session.submit_answer(&quiz, "something").unwrap();
        assert_eq!(session.result_label(), Some("A"));
    }

    #[test]
    fn test_known_song_match_results() {
        let quiz = QuizDefinition::song_match();
        let cases = [
            (["super jittery", "yes", "yes", "hard rap"], "God's Plan by Drake"),
            (["neutral", "yes", "no", "hip hop"], "Dancing Queen by ABBA"),
            (
                ["about to pass out", "no", "no", "lofi beats to study to"],
                "Sundress by A$AP Rocky",
            ),
        ];

        for (answers, expected) in cases {
            let mut session = QuizSession::new();
            answer_all(&mut session, &quiz, &answers);
            assert_eq!(session.result_label(), Some(expected), "{:?}", answers);
        }
    }
}
