//! Transcript output for quiz sessions.
//!
//! The use case reports what happened in a session through [`QuizLogger`]:
//! when it began, every answer it took or turned away, and the song it
//! settled on. Diagnostics still go through `tracing`; the transcript is a
//! separate record meant to be replayed or inspected later.

use serde_json::Value;

/// One entry in a session transcript.
///
/// `event_type` names what happened, for example `"quiz_started"` or
/// `"answer_rejected"`. `payload` holds whatever fields go with it.
/// Timestamps are the adapter's job.
pub struct QuizEvent {
    pub event_type: &'static str,
    pub payload: Value,
}

impl QuizEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Sink for session transcripts.
///
/// Called inline from the use case, so implementations must not block for
/// long and cannot fail the quiz: a write that goes wrong is the adapter's
/// to report.
pub trait QuizLogger: Send + Sync {
    fn log(&self, event: QuizEvent);
}

/// Discards every event
pub struct NoQuizLogger;

impl QuizLogger for NoQuizLogger {
    fn log(&self, _event: QuizEvent) {}
}
