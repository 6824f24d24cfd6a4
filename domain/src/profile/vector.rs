//! Profile vector over the DEVIS dimensions

use super::dimension::Dimension;
use crate::core::error::DomainError;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::ops::{Add, AddAssign, Index};

/// A point in DEVIS space (Value Object)
///
/// Always carries exactly one finite value per [`Dimension`]. Raw maps are
/// checked on the way in (see [`ProfileVector::from_pairs`]), so vector
/// operations never have to deal with missing or extra keys.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(try_from = "BTreeMap<String, f64>")]
pub struct ProfileVector {
    values: [f64; Dimension::COUNT],
}

impl ProfileVector {
    /// The all-zero vector (a fresh accumulator)
    pub const fn zero() -> Self {
        Self {
            values: [0.0; Dimension::COUNT],
        }
    }

    /// Create a vector from its components in DEVIS order
    pub const fn new(
        danceability: f64,
        energy: f64,
        valence: f64,
        instrumentalness: f64,
        speechiness: f64,
    ) -> Self {
        Self {
            values: [danceability, energy, valence, instrumentalness, speechiness],
        }
    }

    /// Build a vector from `(dimension name, value)` pairs.
    ///
    /// Every dimension must appear exactly once and every value must be finite.
    pub fn from_pairs<K, I>(pairs: I) -> Result<Self, DomainError>
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, f64)>,
    {
        let mut values: [Option<f64>; Dimension::COUNT] = [None; Dimension::COUNT];
        let mut unexpected = Vec::new();

        for (key, value) in pairs {
            let key = key.as_ref();
            match key.parse::<Dimension>() {
                Ok(dimension) if values[dimension.index()].is_none() => {
                    if !value.is_finite() {
                        return Err(DomainError::NonFiniteComponent { dimension, value });
                    }
                    values[dimension.index()] = Some(value);
                }
                // Unknown names and duplicates are both extra keys
                _ => unexpected.push(key.to_string()),
            }
        }

        let missing: Vec<Dimension> = Dimension::ALL
            .into_iter()
            .filter(|d| values[d.index()].is_none())
            .collect();

        if !missing.is_empty() || !unexpected.is_empty() {
            return Err(DomainError::DimensionMismatch {
                missing,
                unexpected,
            });
        }

        Ok(Self {
            values: values.map(|v| v.unwrap_or_default()),
        })
    }

    /// Value along one dimension
    pub fn get(&self, dimension: Dimension) -> f64 {
        self.values[dimension.index()]
    }

    /// Iterate `(dimension, value)` in DEVIS order
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, f64)> + '_ {
        Dimension::ALL.into_iter().map(|d| (d, self.get(d)))
    }

    /// Largest absolute component
    pub fn max_abs(&self) -> f64 {
        self.values.iter().fold(0.0, |max: f64, v| max.max(v.abs()))
    }

    /// First component that is NaN or infinite, if any
    pub fn non_finite_component(&self) -> Option<(Dimension, f64)> {
        self.iter().find(|(_, value)| !value.is_finite())
    }

    /// Euclidean norm.
    ///
    /// Components are scaled by the largest one before squaring so the sum
    /// neither overflows for huge values nor underflows for tiny ones. The
    /// result is still infinite when the true norm exceeds `f64::MAX`.
    pub fn magnitude(&self) -> f64 {
        let scale = self.max_abs();
        if scale == 0.0 || !scale.is_finite() {
            return scale;
        }
        scale * self.unit_sum_of_squares(scale).sqrt()
    }

    /// Divide every component by `divisor`
    pub fn divided(&self, divisor: f64) -> Self {
        Self {
            values: self.values.map(|v| v / divisor),
        }
    }

    fn unit_sum_of_squares(&self, scale: f64) -> f64 {
        self.values
            .iter()
            .map(|v| {
                let unit = v / scale;
                unit * unit
            })
            .sum()
    }

    pub fn is_zero(&self) -> bool {
        self.values.iter().all(|v| *v == 0.0)
    }

    /// Dot product over the shared dimension set
    pub fn dot(&self, other: &ProfileVector) -> f64 {
        self.values
            .iter()
            .zip(other.values.iter())
            .map(|(a, b)| a * b)
            .sum()
    }

    /// Multiply every component by `factor`
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            values: self.values.map(|v| v * factor),
        }
    }

    /// Component-wise comparison with an absolute tolerance
    pub fn approx_eq(&self, other: &ProfileVector, tolerance: f64) -> bool {
        self.values
            .iter()
            .zip(other.values.iter())
            .all(|(a, b)| (a - b).abs() <= tolerance)
    }
}

impl Index<Dimension> for ProfileVector {
    type Output = f64;

    fn index(&self, dimension: Dimension) -> &f64 {
        &self.values[dimension.index()]
    }
}

impl Add for ProfileVector {
    type Output = ProfileVector;

    fn add(mut self, rhs: ProfileVector) -> ProfileVector {
        self += rhs;
        self
    }
}

impl AddAssign for ProfileVector {
    fn add_assign(&mut self, rhs: ProfileVector) {
        for (lhs, rhs) in self.values.iter_mut().zip(rhs.values) {
            *lhs += rhs;
        }
    }
}

impl TryFrom<BTreeMap<String, f64>> for ProfileVector {
    type Error = DomainError;

    fn try_from(map: BTreeMap<String, f64>) -> Result<Self, Self::Error> {
        ProfileVector::from_pairs(map)
    }
}

impl Serialize for ProfileVector {
    /// Serialized as a map keyed by dimension name, in DEVIS order.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(Dimension::COUNT))?;
        for (dimension, value) in self.iter() {
            map.serialize_entry(dimension.as_str(), &value)?;
        }
        map.end()
    }
}

impl std::fmt::Display for ProfileVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(d, v)| format!("{}:{:.3}", d.initial(), v))
            .collect();
        write!(f, "{{{}}}", parts.join(", "))
    }
}
