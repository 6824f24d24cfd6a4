//! Logging infrastructure: structured quiz transcripts.
//!
//! Provides [`JsonlQuizLogger`], a JSONL file writer that implements
//! the [`QuizLogger`](song_match_application::QuizLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlQuizLogger;
