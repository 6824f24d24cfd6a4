//! Presentation-level configuration
//!
//! Resolved settings for output formatting and REPL behavior.

use crate::cli::commands::OutputFormat;
use std::path::PathBuf;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
    /// Print the runners-up under the Song Match
    pub show_ranking: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
            show_ranking: false,
        }
    }
}

/// REPL configuration for the presentation layer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplConfig {
    /// Path to history file; `None` uses the platform data directory
    pub history_file: Option<PathBuf>,
    /// Skip the welcome banner
    pub quiet: bool,
}

impl ReplConfig {
    /// Where line history is kept, if anywhere
    pub fn history_path(&self) -> Option<PathBuf> {
        self.history_file
            .clone()
            .or_else(|| dirs::data_dir().map(|p| p.join("song-match").join("history.txt")))
    }
}
