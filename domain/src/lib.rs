//! Domain layer for song-match
//!
//! This crate contains the scoring core: DEVIS profile vectors, the quiz
//! tables, the per-conversation quiz session, and the pure functions that
//! accumulate, normalize and compare vectors.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## DEVIS profile
//!
//! Five axes (Danceability, Energy, Valence, Instrumentalness, Speechiness).
//! Every answer adds a weight vector to the user's accumulator; every
//! catalog item has a fixed vector.
//!
//! ## Matching
//!
//! After the last answer the accumulator and each item vector are
//! normalized and compared by dot product (cosine similarity). The highest
//! score wins; ties go to the later catalog item.

pub mod core;
pub mod profile;
pub mod quiz;
pub mod scoring;

// Re-export commonly used types
pub use crate::core::error::DomainError;
pub use profile::{Dimension, ProfileVector};
pub use quiz::{
    AnswerChoice, AnswerWeightTable, CatalogItem, Question, QuizDefinition, QuizSession,
    QuizState,
};
pub use scoring::{
    ScoredItem, apply_answer, find_best_match, normalize, rank_catalog, similarity,
};
