//! Application-level configuration.
//!
//! This module provides configuration types that control how the quiz use
//! case reports its results.

/// Default number of entries kept in a result ranking.
pub const DEFAULT_RANKING_SIZE: usize = 3;

/// Quiz behavior configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizConfig {
    /// How many catalog items to keep in [`QuizResult::ranking`](crate::QuizResult).
    /// Zero keeps only the best match.
    pub ranking_size: usize,
}

impl QuizConfig {
    pub fn with_ranking_size(ranking_size: usize) -> Self {
        Self { ranking_size }
    }
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            ranking_size: DEFAULT_RANKING_SIZE,
        }
    }
}
