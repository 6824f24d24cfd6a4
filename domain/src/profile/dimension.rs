//! DEVIS dimension value object

use crate::core::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One of the five DEVIS axes of a listening profile (Value Object)
///
/// The declaration order is the canonical vector order used everywhere:
/// user accumulators and catalog vectors share it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dimension {
    Danceability,
    Energy,
    Valence,
    Instrumentalness,
    Speechiness,
}

impl Dimension {
    /// Number of dimensions in a profile vector
    pub const COUNT: usize = 5;

    /// All dimensions in canonical order
    pub const ALL: [Dimension; Dimension::COUNT] = [
        Dimension::Danceability,
        Dimension::Energy,
        Dimension::Valence,
        Dimension::Instrumentalness,
        Dimension::Speechiness,
    ];

    /// Position of this dimension in a profile vector
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Get the display name for this dimension
    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Danceability => "Danceability",
            Dimension::Energy => "Energy",
            Dimension::Valence => "Valence",
            Dimension::Instrumentalness => "Instrumentalness",
            Dimension::Speechiness => "Speechiness",
        }
    }

    /// Single-letter abbreviation (the letters of "DEVIS")
    pub fn initial(&self) -> char {
        match self {
            Dimension::Danceability => 'D',
            Dimension::Energy => 'E',
            Dimension::Valence => 'V',
            Dimension::Instrumentalness => 'I',
            Dimension::Speechiness => 'S',
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Dimension {
    type Err = DomainError;

    /// Accepts the full name or the DEVIS initial, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Dimension::ALL
            .into_iter()
            .find(|d| {
                d.as_str().eq_ignore_ascii_case(&key)
                    || key == d.initial().to_ascii_lowercase().to_string()
            })
            .ok_or_else(|| DomainError::DimensionMismatch {
                missing: vec![],
                unexpected: vec![s.to_string()],
            })
    }
}

impl Serialize for Dimension {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Dimension {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
