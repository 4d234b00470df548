//! Batch scoring: item-to-catalog mode
//!
//! Scores query items against the full catalog without any user
//! signal. Both entry points are pure functions of (catalog, query);
//! the per-item outer loop is independent and read-only, so it runs
//! on the rayon pool.

use rayon::prelude::*;
use readnext_core::similarity::{item_similarity, ItemFeatures};
use readnext_core::{Catalog, ScoredItem};

/// Default result count for single-item suggestions
pub const DEFAULT_SUGGESTIONS: usize = 10;

/// Default result count for list suggestions
pub const DEFAULT_LIST_SUGGESTIONS: usize = 20;

fn rank(mut scored: Vec<ScoredItem>, top_n: usize) -> Vec<ScoredItem> {
    // Stable sort keeps catalog order for equal scores
    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    scored.truncate(top_n);
    scored
}

/// Score every catalog item against a single query item
///
/// Results are sorted descending by the title/author Jaccard average;
/// [`ScoredItem::percent`] exposes the score as a percentage. The
/// query item itself is not excluded and scores 1.0 when present in
/// the catalog.
pub fn suggest(catalog: &Catalog, query: &ItemFeatures, top_n: usize) -> Vec<ScoredItem> {
    let scored: Vec<ScoredItem> = catalog
        .items()
        .par_iter()
        .map(|item| ScoredItem::new(item.clone(), item_similarity(query, item)))
        .collect();

    rank(scored, top_n)
}

/// Score every catalog item against a list of query items
///
/// Each catalog item is scored against every query item and the
/// scores are averaged. An empty query list yields an empty result.
pub fn suggest_from_list(
    catalog: &Catalog,
    queries: &[ItemFeatures],
    top_n: usize,
) -> Vec<ScoredItem> {
    if queries.is_empty() {
        return Vec::new();
    }

    let scored: Vec<ScoredItem> = catalog
        .items()
        .par_iter()
        .map(|item| {
            let total: f32 = queries.iter().map(|query| item_similarity(query, item)).sum();
            ScoredItem::new(item.clone(), total / queries.len() as f32)
        })
        .collect();

    rank(scored, top_n)
}
