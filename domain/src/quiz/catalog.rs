//! Catalog item entity

use crate::profile::ProfileVector;
use serde::{Deserialize, Serialize};

/// A candidate result with a fixed DEVIS vector
///
/// Fields are private: once built, an item's vector never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    label: String,
    vector: ProfileVector,
}

impl CatalogItem {
    pub fn new(label: impl Into<String>, vector: ProfileVector) -> Self {
        Self {
            label: label.into(),
            vector,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn vector(&self) -> &ProfileVector {
        &self.vector
    }
}

impl std::fmt::Display for CatalogItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}
