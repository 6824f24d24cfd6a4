//! Configuration file loading for song-match
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `SONG_MATCH_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./song-match.toml` or `./.song-match.toml`
//! 4. Global: `$XDG_CONFIG_HOME/song-match/config.toml`
//! 5. Default values

mod file_config;
mod loader;
mod validation;

pub use file_config::{
    FileConfig, FileLoggingConfig, FileOutputConfig, FileOutputFormat, FileQuizConfig,
    FileReplConfig, MAX_RANKING_SIZE,
};
pub use loader::{ConfigLoadError, ConfigLoader};
pub use validation::{ConfigIssue, ConfigIssueCode, Severity};
