//! Console output formatter for quiz results

use colored::Colorize;
use song_match_application::QuizResult;
use song_match_domain::QuizDefinition;

/// Formats quiz results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a finished quiz, optionally with the runners-up
    pub fn format(result: &QuizResult, artist: Option<&str>, show_ranking: bool) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Song Match"));
        output.push('\n');

        if let Some(artist) = artist {
            output.push_str(&format!("{} {}\n", "Artist:".cyan().bold(), artist));
        }
        output.push_str(&format!(
            "{} {}\n\n",
            "Answers:".cyan().bold(),
            result.answers.join(", ")
        ));

        output.push_str(&format!(
            "{} {} {}\n",
            "Your Song Match is".bold(),
            result.label.yellow().bold(),
            format!("({:.3})", result.similarity).dimmed()
        ));

        output.push_str(&Self::section_header("Your profile"));
        for (dimension, value) in result.profile.iter() {
            output.push_str(&format!("  {:<18}{:>7.3}\n", dimension.to_string(), value));
        }

        if show_ranking {
            output.push_str(&Self::format_ranking(result));
        }

        output.push_str(&Self::footer());
        output
    }

    /// The ranking section alone
    pub fn format_ranking(result: &QuizResult) -> String {
        let mut output = Self::section_header("Closest songs");
        for (position, entry) in result.ranking.iter().enumerate() {
            let line = format!("  {}. {:<40} {:.3}", position + 1, entry.label, entry.similarity);
            if entry.label == result.label {
                output.push_str(&format!("{}\n", line.green()));
            } else {
                output.push_str(&format!("{}\n", line));
            }
        }
        output
    }

    /// Format as JSON
    pub fn format_json(result: &QuizResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }

    /// Numbered questions with their answer choices
    pub fn format_questions(quiz: &QuizDefinition) -> String {
        let mut output = String::new();
        for (index, question) in quiz.questions().iter().enumerate() {
            output.push_str(&format!(
                "{} {}\n",
                format!("Q{}.", index + 1).cyan().bold(),
                question.prompt()
            ));
            for (position, label) in question.answer_weights().labels().enumerate() {
                output.push_str(&format!("    {}. {}\n", position + 1, label));
            }
        }
        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use song_match_application::{QuizConfig, RunQuizInput, RunQuizUseCase};
    use std::sync::Arc;

    fn result() -> QuizResult {
        colored::control::set_override(false);
        RunQuizUseCase::new(Arc::new(QuizDefinition::song_match()))
            .with_config(QuizConfig::with_ranking_size(3))
            .execute(RunQuizInput::new(["neutral", "yes", "no", "hip hop"]))
            .unwrap()
    }

    #[test]
    fn test_format_contains_match_and_profile() {
        let text = ConsoleFormatter::format(&result(), Some("ABBA"), false);
        assert!(text.contains("Dancing Queen by ABBA"));
        assert!(text.contains("Artist: ABBA"));
        assert!(text.contains("Danceability"));
        assert!(!text.contains("Closest songs"));
    }

    #[test]
    fn test_format_with_ranking() {
        let text = ConsoleFormatter::format(&result(), None, true);
        assert!(text.contains("Closest songs"));
        assert!(text.contains("1. Dancing Queen by ABBA"));
        assert!(text.contains("3. "));
        assert!(!text.contains("4. "));
    }

    #[test]
    fn test_format_json_roundtrips_fields() {
        let json: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::format_json(&result())).unwrap();
        assert_eq!(json["label"], "Dancing Queen by ABBA");
        assert_eq!(json["answers"][3], "hip hop");
        assert_eq!(json["ranking"].as_array().unwrap().len(), 3);
        assert!(json["profile"]["Danceability"].is_number());
    }

    #[test]
    fn test_format_questions_lists_choices() {
        colored::control::set_override(false);
        let text = ConsoleFormatter::format_questions(&QuizDefinition::song_match());
        assert!(text.contains("Q1. How jittery"));
        assert!(text.contains("    5. about to pass out"));
        assert!(text.contains("Q4. Hard rap"));
        assert!(text.contains("    3. lofi beats to study to"));
    }
}
