//! Infrastructure layer for song-match
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;

// Re-export commonly used types
pub use config::{
    ConfigIssue, ConfigIssueCode, ConfigLoadError, ConfigLoader, FileConfig, FileLoggingConfig,
    FileOutputConfig, FileOutputFormat, FileQuizConfig, FileReplConfig, Severity,
};
pub use logging::JsonlQuizLogger;
