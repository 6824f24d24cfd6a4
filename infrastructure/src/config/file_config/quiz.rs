//! Quiz configuration from TOML (`[quiz]` section)

use serde::{Deserialize, Serialize};
use song_match_application::QuizConfig;
use song_match_application::config::DEFAULT_RANKING_SIZE;

/// Raw quiz configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileQuizConfig {
    /// Show the closest runners-up after the Song Match
    pub show_ranking: bool,
    /// How many songs the ranking lists
    pub ranking_size: usize,
}

impl Default for FileQuizConfig {
    fn default() -> Self {
        Self {
            show_ranking: false,
            ranking_size: DEFAULT_RANKING_SIZE,
        }
    }
}

impl FileQuizConfig {
    pub fn to_quiz_config(&self) -> QuizConfig {
        QuizConfig::with_ranking_size(self.ranking_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiz_section_deserialize() {
        let toml_str = r#"
[quiz]
show_ranking = true
ranking_size = 5
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert!(config.quiz.show_ranking);
        assert_eq!(config.quiz.to_quiz_config().ranking_size, 5);
    }

    #[test]
    fn test_quiz_defaults() {
        let quiz = FileQuizConfig::default();
        assert!(!quiz.show_ranking);
        assert_eq!(quiz.to_quiz_config(), QuizConfig::default());
    }
}
