//! Similarity primitives
//!
//! Pure numeric and token-set similarity functions used by both the
//! collaborative and the content-based scoring paths. All functions
//! are side-effect free; degenerate inputs score 0.0 by policy
//! rather than faulting (zero-magnitude vectors, empty token unions).

use crate::record::Item;
use crate::{Error, Result};
use ahash::AHashSet;

/// Compute cosine similarity between two equal-length vectors
///
/// Returns [`Error::LengthMismatch`] when the lengths differ, and
/// 0.0 when either vector has zero magnitude.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32> {
    if a.len() != b.len() {
        return Err(Error::LengthMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }

    Ok(dot_product / (norm_a * norm_b))
}

/// Compute Jaccard similarity between whitespace token sets
///
/// Both inputs are lowercased before tokenizing. An empty union
/// scores 0.0.
pub fn jaccard_similarity(a: &str, b: &str) -> f32 {
    let tokens_a: AHashSet<String> = a
        .split_whitespace()
        .map(|s| s.to_lowercase())
        .collect();
    let tokens_b: AHashSet<String> = b
        .split_whitespace()
        .map(|s| s.to_lowercase())
        .collect();

    let union = tokens_a.union(&tokens_b).count();
    if union == 0 {
        return 0.0;
    }

    let intersection = tokens_a.intersection(&tokens_b).count();
    intersection as f32 / union as f32
}

/// Extracted, lowercased feature view of a query item
///
/// Built once per query so batch scoring does not re-lowercase the
/// query for every catalog item.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemFeatures {
    pub title: String,
    pub author: String,
}

impl ItemFeatures {
    #[inline]
    #[must_use]
    pub fn new(title: &str, author: &str) -> Self {
        Self {
            title: title.to_lowercase(),
            author: author.to_lowercase(),
        }
    }
}

impl From<&Item> for ItemFeatures {
    fn from(item: &Item) -> Self {
        Self::new(&item.title, &item.author)
    }
}

/// Score an item against query features
///
/// Average of title Jaccard and author Jaccard, in [0, 1].
pub fn item_similarity(features: &ItemFeatures, item: &Item) -> f32 {
    let title_similarity = jaccard_similarity(&features.title, &item.title);
    let author_similarity = jaccard_similarity(&features.author, &item.author);
    (title_similarity + author_similarity) / 2.0
}
