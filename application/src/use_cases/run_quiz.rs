//! Run Quiz use case
//!
//! Drives a [`QuizSession`] from raw user input to a ranked Song Match,
//! logging each step to the transcript port.

use super::answer_input::resolve_choice;
use crate::config::QuizConfig;
use crate::ports::quiz_logger::{NoQuizLogger, QuizEvent, QuizLogger};
use serde::Serialize;
use serde_json::json;
use song_match_domain::{
    DomainError, ProfileVector, Question, QuizDefinition, QuizSession, QuizState, normalize,
    rank_catalog,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while running a quiz
#[derive(Error, Debug, PartialEq)]
pub enum RunQuizError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Quiz is not complete ({answered} of {total} questions answered)")]
    Incomplete { answered: usize, total: usize },

    #[error("Expected {expected} answers, got {actual}")]
    AnswerCountMismatch { expected: usize, actual: usize },

    #[error("Session result '{label}' is not in the quiz catalog")]
    UnknownResult { label: String },
}

impl RunQuizError {
    /// Whether the user should simply be asked the same question again
    pub fn is_reprompt(&self) -> bool {
        matches!(
            self,
            RunQuizError::Domain(DomainError::UnknownAnswerChoice { .. })
        )
    }
}

/// Input for a non-interactive quiz run
#[derive(Debug, Clone, Default)]
pub struct RunQuizInput {
    /// Artist the user claims to be, used only for the transcript
    pub artist: Option<String>,
    /// One raw answer per question, in asking order
    pub answers: Vec<String>,
}

impl RunQuizInput {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            artist: None,
            answers: answers.into_iter().map(Into::into).collect(),
        }
    }

    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = Some(artist.into());
        self
    }
}

/// One row of a result ranking
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedMatch {
    pub label: String,
    pub similarity: f64,
}

/// Final outcome of a completed quiz
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizResult {
    /// Label of the best match
    pub label: String,
    /// Cosine similarity between the user profile and the best match
    pub similarity: f64,
    /// Normalized user profile
    pub profile: ProfileVector,
    /// Accepted choice labels, in order
    pub answers: Vec<String>,
    /// Closest catalog items, best first
    pub ranking: Vec<RankedMatch>,
}

/// What happened after an answer was accepted
#[derive(Debug, Clone, PartialEq)]
pub enum AnswerOutcome {
    /// The quiz moved on to the question at `index`
    Next { index: usize },
    /// That was the last question
    Completed(QuizResult),
}

/// Use case for running the Song Match quiz
pub struct RunQuizUseCase {
    quiz: Arc<QuizDefinition>,
    config: QuizConfig,
    logger: Arc<dyn QuizLogger>,
}

impl RunQuizUseCase {
    pub fn new(quiz: Arc<QuizDefinition>) -> Self {
        Self {
            quiz,
            config: QuizConfig::default(),
            logger: Arc::new(NoQuizLogger),
        }
    }

    pub fn with_config(mut self, config: QuizConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_logger(mut self, logger: Arc<dyn QuizLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn quiz(&self) -> &QuizDefinition {
        &self.quiz
    }

    /// Open a new session
    pub fn start(&self, artist: Option<&str>) -> QuizSession {
        info!(
            "Starting quiz with {} questions",
            self.quiz.question_count()
        );
        self.logger.log(QuizEvent::new(
            "quiz_started",
            json!({
                "artist": artist,
                "questions": self.quiz.question_count(),
            }),
        ));
        QuizSession::new()
    }

    /// Put a session back at the first question
    pub fn restart(&self, session: &mut QuizSession) {
        debug!("Restarting quiz after {} answers", session.answers().len());
        self.logger.log(QuizEvent::new(
            "quiz_restarted",
            json!({ "answered": session.answers().len() }),
        ));
        session.restart();
    }

    /// The question the session is waiting on
    pub fn current_question(&self, session: &QuizSession) -> Option<&Question> {
        session
            .current_index()
            .and_then(|index| self.quiz.question(index))
    }

    /// Apply what the user typed to the current question.
    ///
    /// Input is matched leniently (see [`resolve_choice`]). Anything that
    /// does not resolve is passed through so the domain reports it as an
    /// unknown choice; the session is left untouched in that case.
    pub fn submit_answer(
        &self,
        session: &mut QuizSession,
        raw: &str,
    ) -> Result<AnswerOutcome, RunQuizError> {
        let index = session
            .current_index()
            .ok_or(DomainError::QuizAlreadyCompleted)?;

        let choice = self
            .quiz
            .question(index)
            .and_then(|question| resolve_choice(question, raw))
            .map(str::to_string)
            .unwrap_or_else(|| raw.trim().to_string());

        let state = match session.submit_answer(&self.quiz, &choice) {
            Ok(state) => state.clone(),
            Err(e) => {
                warn!("Rejected answer for question {}: {}", index + 1, e);
                self.logger.log(QuizEvent::new(
                    "answer_rejected",
                    json!({
                        "question": index,
                        "input": raw,
                        "error": e.to_string(),
                    }),
                ));
                return Err(e.into());
            }
        };

        debug!("Accepted '{}' for question {}", choice, index + 1);
        self.logger.log(QuizEvent::new(
            "answer_accepted",
            json!({
                "question": index,
                "input": raw,
                "choice": choice,
                "accumulator": session.accumulator(),
            }),
        ));

        match state {
            QuizState::AwaitingAnswer(next) => Ok(AnswerOutcome::Next { index: next }),
            QuizState::Completed(_) => {
                let result = self.result(session)?;
                info!("Quiz complete: {}", result.label);
                self.logger.log(QuizEvent::new(
                    "quiz_completed",
                    json!({
                        "label": result.label,
                        "similarity": result.similarity,
                        "answers": result.answers,
                    }),
                ));
                Ok(AnswerOutcome::Completed(result))
            }
        }
    }

    /// Build the result for a completed session
    pub fn result(&self, session: &QuizSession) -> Result<QuizResult, RunQuizError> {
        let label = session
            .result_label()
            .ok_or(RunQuizError::Incomplete {
                answered: session.answers().len(),
                total: self.quiz.question_count(),
            })?;

        let profile = normalize(session.accumulator())?;
        let ranking = rank_catalog(&profile, self.quiz.catalog())?;
        let similarity = ranking
            .iter()
            .find(|scored| scored.item.label() == label)
            .map(|scored| scored.similarity)
            .ok_or_else(|| RunQuizError::UnknownResult {
                label: label.to_string(),
            })?;

        Ok(QuizResult {
            label: label.to_string(),
            similarity,
            profile,
            answers: session.answers().to_vec(),
            ranking: ranking
                .into_iter()
                .take(self.config.ranking_size.max(1))
                .map(|scored| RankedMatch {
                    label: scored.item.label().to_string(),
                    similarity: scored.similarity,
                })
                .collect(),
        })
    }

    /// Run the whole quiz from a list of answers
    pub fn execute(&self, input: RunQuizInput) -> Result<QuizResult, RunQuizError> {
        let expected = self.quiz.question_count();
        if input.answers.len() != expected {
            return Err(RunQuizError::AnswerCountMismatch {
                expected,
                actual: input.answers.len(),
            });
        }

        let mut session = self.start(input.artist.as_deref());
        let mut outcome = None;
        for answer in &input.answers {
            outcome = Some(self.submit_answer(&mut session, answer)?);
        }

        match outcome {
            Some(AnswerOutcome::Completed(result)) => Ok(result),
            _ => Err(RunQuizError::Incomplete {
                answered: session.answers().len(),
                total: expected,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use song_match_domain::{AnswerWeightTable, CatalogItem};
    use std::sync::Mutex;

    /// Collects event types for assertions
    #[derive(Default)]
    struct RecordingLogger {
        events: Mutex<Vec<(&'static str, serde_json::Value)>>,
    }

    impl RecordingLogger {
        fn types(&self) -> Vec<&'static str> {
            self.events.lock().unwrap().iter().map(|(t, _)| *t).collect()
        }
    }

    impl QuizLogger for RecordingLogger {
        fn log(&self, event: QuizEvent) {
            self.events
                .lock()
                .unwrap()
                .push((event.event_type, event.payload));
        }
    }

    fn use_case() -> RunQuizUseCase {
        RunQuizUseCase::new(Arc::new(QuizDefinition::song_match()))
    }

    #[test]
    fn test_execute_known_answers() {
        let result = use_case()
            .execute(RunQuizInput::new(["neutral", "yes", "no", "hip hop"]))
            .unwrap();
        assert_eq!(result.label, "Dancing Queen by ABBA");
        assert_eq!(result.answers, ["neutral", "yes", "no", "hip hop"]);
        assert!(result.similarity > 0.0 && result.similarity <= 1.0 + 1e-9);
        assert!((result.profile.magnitude() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_execute_accepts_loose_input() {
        let result = use_case()
            .execute(RunQuizInput::new([
                "  Super Jittery",
                "YES",
                "1",
                "hard   rap.",
            ]))
            .unwrap();
        assert_eq!(result.label, "God's Plan by Drake");
        assert_eq!(result.answers, ["super jittery", "yes", "yes", "hard rap"]);
    }

    #[test]
    fn test_execute_wrong_answer_count() {
        let err = use_case()
            .execute(RunQuizInput::new(["neutral", "yes"]))
            .unwrap_err();
        assert_eq!(
            err,
            RunQuizError::AnswerCountMismatch {
                expected: 4,
                actual: 2
            }
        );
    }

    #[test]
    fn test_execute_unknown_answer() {
        let err = use_case()
            .execute(RunQuizInput::new(["neutral", "maybe", "no", "hip hop"]))
            .unwrap_err();
        assert!(err.is_reprompt());
        assert!(matches!(
            err,
            RunQuizError::Domain(DomainError::UnknownAnswerChoice { ref choice, .. }) if choice == "maybe"
        ));
    }

    #[test]
    fn test_submit_walks_questions() {
        let use_case = use_case();
        let mut session = use_case.start(None);

        assert_eq!(
            use_case.current_question(&session).unwrap().prompt(),
            use_case.quiz().questions()[0].prompt()
        );
        assert_eq!(
            use_case.submit_answer(&mut session, "kinda tired").unwrap(),
            AnswerOutcome::Next { index: 1 }
        );
        assert_eq!(
            use_case.submit_answer(&mut session, "no").unwrap(),
            AnswerOutcome::Next { index: 2 }
        );
        assert_eq!(
            use_case.submit_answer(&mut session, "yes").unwrap(),
            AnswerOutcome::Next { index: 3 }
        );
        match use_case.submit_answer(&mut session, "lofi beats to study to").unwrap() {
            AnswerOutcome::Completed(result) => {
                assert_eq!(result.label, "Venetia by Lil Uzi Vert")
            }
            other => panic!("expected completion, got {:?}", other),
        }
        assert!(use_case.current_question(&session).is_none());
    }

    #[test]
    fn test_rejected_answer_keeps_question() {
        let use_case = use_case();
        let mut session = use_case.start(None);

        let err = use_case.submit_answer(&mut session, "sort of").unwrap_err();

        assert!(err.is_reprompt());
        assert_eq!(session.current_index(), Some(0));
        assert!(session.accumulator().is_zero());
    }

    #[test]
    fn test_submit_after_completion() {
        let use_case = use_case();
        let mut session = use_case.start(None);
        for answer in ["neutral", "no", "no", "hip hop"] {
            use_case.submit_answer(&mut session, answer).unwrap();
        }

        let err = use_case.submit_answer(&mut session, "yes").unwrap_err();
        assert_eq!(err, RunQuizError::Domain(DomainError::QuizAlreadyCompleted));
        assert!(!err.is_reprompt());
    }

    #[test]
    fn test_result_of_incomplete_session() {
        let use_case = use_case();
        let mut session = use_case.start(None);
        use_case.submit_answer(&mut session, "neutral").unwrap();

        assert_eq!(
            use_case.result(&session).unwrap_err(),
            RunQuizError::Incomplete {
                answered: 1,
                total: 4
            }
        );
    }

    #[test]
    fn test_result_label_missing_from_catalog() {
        // Session completed against a different quiz whose only item is unknown here
        let other = QuizDefinition::new(
            vec![Question::new(
                "Pick one",
                AnswerWeightTable::new()
                    .with_choice("only", ProfileVector::new(1.0, 0.0, 0.0, 0.0, 0.0)),
            )],
            vec![CatalogItem::new(
                "Elsewhere",
                ProfileVector::new(1.0, 0.0, 0.0, 0.0, 0.0),
            )],
        )
        .unwrap();
        let mut session = QuizSession::new();
        session.submit_answer(&other, "only").unwrap();
        assert_eq!(session.result_label(), Some("Elsewhere"));

        assert_eq!(
            use_case().result(&session).unwrap_err(),
            RunQuizError::UnknownResult {
                label: "Elsewhere".to_string()
            }
        );
    }

    #[test]
    fn test_ranking_respects_config() {
        let use_case = use_case().with_config(QuizConfig::with_ranking_size(5));
        let result = use_case
            .execute(RunQuizInput::new(["neutral", "yes", "no", "hip hop"]))
            .unwrap();

        assert_eq!(result.ranking.len(), 5);
        assert_eq!(result.ranking[0].label, result.label);
        assert_eq!(result.ranking[0].similarity, result.similarity);
        for pair in result.ranking.windows(2) {
            assert!(pair[0].similarity >= pair[1].similarity);
        }
    }

    #[test]
    fn test_zero_ranking_size_keeps_best() {
        let use_case = use_case().with_config(QuizConfig::with_ranking_size(0));
        let result = use_case
            .execute(RunQuizInput::new(["neutral", "yes", "no", "hip hop"]))
            .unwrap();
        assert_eq!(result.ranking.len(), 1);
    }

    #[test]
    fn test_restart_resets_session() {
        let use_case = use_case();
        let mut session = use_case.start(None);
        use_case.submit_answer(&mut session, "neutral").unwrap();

        use_case.restart(&mut session);

        assert_eq!(session, QuizSession::new());
    }

    #[test]
    fn test_transcript_events() {
        let logger = Arc::new(RecordingLogger::default());
        let use_case = use_case().with_logger(logger.clone());

        use_case
            .execute(
                RunQuizInput::new(["neutral", "yes", "no", "hip hop"]).with_artist("ABBA"),
            )
            .unwrap();

        assert_eq!(
            logger.types(),
            vec![
                "quiz_started",
                "answer_accepted",
                "answer_accepted",
                "answer_accepted",
                "answer_accepted",
                "quiz_completed",
            ]
        );
        let events = logger.events.lock().unwrap();
        assert_eq!(events[0].1["artist"], "ABBA");
        assert_eq!(events[5].1["label"], "Dancing Queen by ABBA");
    }

    #[test]
    fn test_transcript_records_rejection() {
        let logger = Arc::new(RecordingLogger::default());
        let use_case = use_case().with_logger(logger.clone());
        let mut session = use_case.start(Some("Drake"));

        let _ = use_case.submit_answer(&mut session, "purple");

        assert_eq!(logger.types(), vec!["quiz_started", "answer_rejected"]);
        let events = logger.events.lock().unwrap();
        assert_eq!(events[1].1["input"], "purple");
    }
}
