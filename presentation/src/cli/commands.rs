//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for quiz results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Formatted console text
    #[default]
    Text,
    /// JSON output
    Json,
}

/// CLI arguments for song-match
#[derive(Parser, Debug)]
#[command(name = "song-match")]
#[command(author, version, about = "Song Match - find the song that fits your mood")]
#[command(long_about = r#"
Song Match asks four quick questions and matches your answers to a song.

Each answer adds to a five-dimensional listening profile (danceability,
energy, valence, instrumentalness, speechiness). The song whose profile
points in the most similar direction is your Song Match.

Without --answer an interactive session starts. Give --answer once per
question to run the quiz in one shot.

Configuration files are loaded from (in priority order):
1. SONG_MATCH_* environment variables
2. --config <path>         Explicit config file
3. ./song-match.toml       Project-level config
4. ~/.config/song-match/config.toml   Global config

Example:
  song-match
  song-match ABBA --answer neutral --answer yes --answer no --answer "hip hop"
  song-match --list-questions
"#)]
pub struct Cli {
    /// Your favorite artist (skips the artist prompt)
    pub artist: Option<String>,

    /// Answer to the next question (repeat once per question)
    #[arg(short, long, value_name = "ANSWER")]
    pub answer: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Show the closest runners-up with the result
    #[arg(short, long)]
    pub ranking: bool,

    /// List the quiz questions and their answer choices, then exit
    #[arg(long)]
    pub list_questions: bool,

    /// Append a JSONL transcript of the session to this file
    #[arg(long, value_name = "PATH")]
    pub transcript: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the welcome banner and config warnings
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Whether the quiz should run without prompting
    pub fn is_scripted(&self) -> bool {
        !self.answer.is_empty()
    }
}
