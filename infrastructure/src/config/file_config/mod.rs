//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Every section is optional and falls back to its defaults.

mod logging;
mod output;
mod quiz;
mod repl;

pub use logging::FileLoggingConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use quiz::FileQuizConfig;
pub use repl::FileReplConfig;

use super::validation::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Largest ranking worth printing
pub const MAX_RANKING_SIZE: usize = 50;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Output settings
    pub output: FileOutputConfig,
    /// Quiz result settings
    pub quiz: FileQuizConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Transcript settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Warnings are printed and the run continues. Errors mean a setting
    /// cannot be honored at all and the caller should stop.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.quiz.ranking_size == 0 && self.quiz.show_ranking {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::OutOfRange {
                    field: "quiz.ranking_size".to_string(),
                    value: "0".to_string(),
                },
                "quiz.ranking_size is 0, the ranking will only list the best match",
            ));
        }

        if self.quiz.ranking_size > MAX_RANKING_SIZE {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::OutOfRange {
                    field: "quiz.ranking_size".to_string(),
                    value: self.quiz.ranking_size.to_string(),
                },
                format!(
                    "quiz.ranking_size {} is larger than any catalog, the whole catalog will be listed",
                    self.quiz.ranking_size
                ),
            ));
        }

        if !self.quiz.show_ranking && self.quiz.ranking_size != FileQuizConfig::default().ranking_size
        {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::Ineffective {
                    field: "quiz.ranking_size".to_string(),
                },
                "quiz.ranking_size is set but quiz.show_ranking is false",
            ));
        }

        for (field, value) in [
            ("repl.history_file", &self.repl.history_file),
            ("logging.transcript", &self.logging.transcript),
        ] {
            let Some(value) = value.as_deref() else {
                continue;
            };
            if value.trim().is_empty() {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::EmptyValue {
                        field: field.to_string(),
                    },
                    format!("{} is empty and will be ignored", field),
                ));
            } else if Path::new(value).is_dir() {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::NotAFile {
                        field: field.to_string(),
                        path: value.to_string(),
                    },
                    format!("{} '{}' is a directory, expected a file path", field, value),
                ));
            }
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[output]
format = "json"
color = false

[quiz]
show_ranking = true
ranking_size = 4

[repl]
history_file = "~/.local/share/song-match/history.txt"

[logging]
transcript = "quiz.jsonl"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.output.format, Some(FileOutputFormat::Json));
        assert!(!config.output.color);
        assert!(config.quiz.show_ranking);
        assert_eq!(config.quiz.ranking_size, 4);
        assert_eq!(
            config.repl.history_file.as_deref(),
            Some("~/.local/share/song-match/history.txt")
        );
        assert_eq!(config.logging.transcript.as_deref(), Some("quiz.jsonl"));
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[quiz]
show_ranking = true
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(config.quiz.show_ranking);
        // Defaults should apply
        assert_eq!(config.quiz.ranking_size, 3);
        assert!(config.output.color);
        assert!(config.output.format.is_none());
        assert!(config.logging.transcript.is_none());
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert!(config.output.color);
        assert!(!config.quiz.show_ranking);
        assert!(config.repl.history_file.is_none());
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_zero_ranking() {
        let mut config = FileConfig::default();
        config.quiz.show_ranking = true;
        config.quiz.ranking_size = 0;

        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(!issues[0].is_error());
        assert!(matches!(
            issues[0].code,
            ConfigIssueCode::OutOfRange { ref field, .. } if field == "quiz.ranking_size"
        ));
    }

    #[test]
    fn test_validate_ranking_size_without_ranking() {
        let mut config = FileConfig::default();
        config.quiz.ranking_size = 7;

        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(matches!(issues[0].code, ConfigIssueCode::Ineffective { .. }));
    }

    #[test]
    fn test_validate_empty_paths() {
        let mut config = FileConfig::default();
        config.repl.history_file = Some("  ".to_string());
        config.logging.transcript = Some(String::new());

        let fields: Vec<_> = config
            .validate()
            .into_iter()
            .filter_map(|issue| match issue.code {
                ConfigIssueCode::EmptyValue { field } => Some(field),
                _ => None,
            })
            .collect();
        assert_eq!(fields, vec!["repl.history_file", "logging.transcript"]);
    }

    #[test]
    fn test_validate_directory_paths_are_errors() {
        let dir = tempfile::tempdir().unwrap();
        let dir_path = dir.path().to_string_lossy().to_string();

        let mut config = FileConfig::default();
        config.logging.transcript = Some(dir_path.clone());
        let history = dir.path().join("history.txt");
        config.repl.history_file = Some(history.to_string_lossy().to_string());

        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
        assert_eq!(
            issues[0].code,
            ConfigIssueCode::NotAFile {
                field: "logging.transcript".to_string(),
                path: dir_path,
            }
        );
        assert!(issues[0].to_string().starts_with("error: logging.transcript"));
    }
}
