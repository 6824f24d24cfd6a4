//! Listening profiles in DEVIS space
//!
//! A profile is a 5-dimensional vector (Danceability, Energy, Valence,
//! Instrumentalness, Speechiness). Users build one answer by answer;
//! catalog items carry a fixed one.

pub mod dimension;
pub mod vector;

pub use dimension::Dimension;
pub use vector::ProfileVector;
