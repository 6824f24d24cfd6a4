//! Built-in Song Match quiz
//!
//! Four questions and ten songs. The DEVIS values are hand-assigned
//! estimates on a 0 to 1 scale, not measured audio features.

use super::catalog::CatalogItem;
use super::definition::QuizDefinition;
use super::question::{AnswerWeightTable, Question};
use crate::profile::ProfileVector;

impl QuizDefinition {
    /// The stock Song Match quiz
    pub fn song_match() -> Self {
        Self {
            questions: song_match_questions(),
            catalog: song_match_catalog(),
        }
    }
}

/// Shorthand for a vector in DEVIS order
const fn devis(d: f64, e: f64, v: f64, i: f64, s: f64) -> ProfileVector {
    ProfileVector::new(d, e, v, i, s)
}

/// The four stock questions, in asking order
pub fn song_match_questions() -> Vec<Question> {
    vec![
        Question::new(
            "How jittery do you feel right now? Super jittery, kinda buzzed, neutral, kinda tired, or about to pass out?",
            AnswerWeightTable::new()
                .with_choice("super jittery", devis(0.9, 0.8, 0.5, 0.8, 0.75))
                .with_choice("kinda buzzed", devis(0.7, 0.65, 0.5, 0.65, 0.62))
                .with_choice("neutral", devis(0.5, 0.5, 0.5, 0.5, 0.5))
                .with_choice("kinda tired", devis(0.35, 0.25, 0.5, 0.25, 0.3))
                .with_choice("about to pass out", devis(0.0, 0.0, 0.5, 0.8, 0.1)),
        ),
        Question::new(
            "Is life always good, no matter what? Yes or no.",
            AnswerWeightTable::new()
                .with_choice("yes", devis(0.8, 0.6, 0.9, 0.5, 0.6))
                .with_choice("no", devis(0.15, 0.2, 0.05, 0.5, 0.4)),
        ),
        Question::new(
            "Important one, is cereal a soup? Yes or no.",
            AnswerWeightTable::new()
                .with_choice("yes", devis(0.45, 0.89, 0.12, 0.33, 0.77))
                .with_choice("no", devis(0.55, 0.11, 0.88, 0.67, 0.23)),
        ),
        Question::new(
            "Hard rap, hip hop, or lofi beats to study to?",
            AnswerWeightTable::new()
                .with_choice("hard rap", devis(0.85, 0.75, 0.55, 0.15, 0.8))
                .with_choice("hip hop", devis(0.55, 0.45, 0.5, 0.55, 0.5))
                .with_choice("lofi beats to study to", devis(0.25, 0.15, 0.45, 0.95, 0.2)),
        ),
    ]
}

/// The ten stock songs, in catalog order (order matters for tie-breaks)
pub fn song_match_catalog() -> Vec<CatalogItem> {
    vec![
        CatalogItem::new("Loving is Easy by Rex Orange County", devis(0.25, 0.30, 0.7, 0.15, 0.4)),
        CatalogItem::new("Dancing Queen by ABBA", devis(0.9, 0.8, 0.9, 0.5, 0.6)),
        CatalogItem::new("Dynamite by Taio Cruz", devis(0.75, 0.85, 0.85, 0.45, 0.35)),
        CatalogItem::new("Hey Jude by the Beatles", devis(0.21, 0.42, 0.65, 0.2, 0.3)),
        CatalogItem::new("La la land by Bryce Vine", devis(0.1, 0.2, 0.35, 0.2, 0.4)),
        CatalogItem::new("Slow dancing in the dark by Joji", devis(0.5, 0.1, 0.02, 0.1, 0.1)),
        CatalogItem::new("God's Plan by Drake", devis(0.75, 0.75, 0.63, 0.55, 0.61)),
        CatalogItem::new("Nonstop by Drake", devis(0.5, 0.8, 0.65, 0.1, 0.3)),
        CatalogItem::new("Venetia by Lil Uzi Vert", devis(0.75, 0.8, 0.55, 0.9, 0.9)),
        CatalogItem::new("Sundress by A$AP Rocky", devis(0.2, 0.45, 0.65, 0.44, 0.3)),
    ]
}
