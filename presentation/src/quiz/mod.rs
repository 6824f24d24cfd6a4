//! Interactive quiz module
//!
//! Provides the conversation state machine and a readline-based front end.

mod conversation;
pub mod messages;
mod repl;

pub use conversation::{ConversationState, QuizConversation, Reply};
pub use repl::QuizRepl;
