//! Scoring engine
//!
//! Pure functions over [`ProfileVector`](crate::profile::ProfileVector)s.
//! Nothing here holds state; quiz tables and sessions are passed in.
//!
//! - [`apply_answer`] adds an answer's weights to an accumulator
//! - [`normalize`] scales a vector to unit length
//! - [`similarity`] is the dot product (cosine similarity for unit vectors)
//! - [`find_best_match`] and [`rank_catalog`] compare a profile against a catalog

pub mod engine;
pub mod matching;

pub use engine::{apply_answer, normalize, similarity};
pub use matching::{ScoredItem, find_best_match, rank_catalog};
