//! Catalog matching by cosine similarity

use super::engine::{normalize, similarity};
use crate::core::error::DomainError;
use crate::profile::ProfileVector;
use crate::quiz::CatalogItem;
use serde::Serialize;
use std::cmp::Ordering;

/// A catalog item together with its similarity to a user profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredItem<'a> {
    pub item: &'a CatalogItem,
    pub similarity: f64,
}

/// Score every item against `user_vector`, in catalog order.
///
/// The user vector is normalized once. Item vectors are normalized on every
/// call; nothing is cached between calls.
fn score_catalog<'a>(
    user_vector: &ProfileVector,
    catalog: &'a [CatalogItem],
) -> Result<Vec<ScoredItem<'a>>, DomainError> {
    if catalog.is_empty() {
        return Err(DomainError::EmptyCatalog);
    }

    let user = normalize(user_vector)?;

    catalog
        .iter()
        .map(|item| {
            let item_unit = normalize(item.vector())?;
            Ok(ScoredItem {
                item,
                similarity: similarity(&user, &item_unit),
            })
        })
        .collect()
}

/// Find the catalog item most similar to `user_vector`.
///
/// The running best starts at 0 and an item takes over when its similarity
/// is greater than *or equal to* the best so far, so ties go to the item
/// that appears later in the catalog.
///
/// # Errors
/// - `EmptyCatalog` if `catalog` is empty
/// - `ZeroVectorNormalization` if the user vector or an item vector is zero
/// - `NoMatch` if every similarity is negative
pub fn find_best_match<'a>(
    user_vector: &ProfileVector,
    catalog: &'a [CatalogItem],
) -> Result<&'a CatalogItem, DomainError> {
    let mut best_score = 0.0;
    let mut best = None;

    for scored in score_catalog(user_vector, catalog)? {
        if scored.similarity >= best_score {
            best_score = scored.similarity;
            best = Some(scored.item);
        }
    }

    best.ok_or(DomainError::NoMatch)
}

/// Score and order the whole catalog, most similar first.
///
/// Equal scores list the later catalog item first, so the head of the
/// ranking is the item [`find_best_match`] picks whenever that succeeds.
pub fn rank_catalog<'a>(
    user_vector: &ProfileVector,
    catalog: &'a [CatalogItem],
) -> Result<Vec<ScoredItem<'a>>, DomainError> {
    let mut scored = score_catalog(user_vector, catalog)?;
    // Stable sort over the reversed list keeps later items ahead on ties
    scored.reverse();
    scored.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(Ordering::Equal)
    });
    Ok(scored)
}
