//! Presentation layer for song-match
//!
//! This crate contains CLI definitions, output formatters,
//! and the interactive quiz interface.

pub mod cli;
pub mod config;
pub mod output;
pub mod quiz;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use config::{OutputConfig, ReplConfig};
pub use output::console::ConsoleFormatter;
pub use quiz::{QuizConversation, QuizRepl};
