//! Content-based candidate generation
//!
//! Deliberately diversifies away from authors the user already knows
//! instead of maximizing similarity: this stage widens recall, it
//! does not rank. Ranking by similarity happens in the batch scorer.

use ahash::AHashSet;
use readnext_core::{Catalog, Item};

/// Default candidate count for content-based filtering
pub const DEFAULT_CANDIDATES: usize = 10;

/// Produce candidate items for a set of liked item ids
///
/// Liked ids that do not resolve against the catalog are skipped
/// silently (rating logs and catalogs can legitimately diverge).
/// Candidates are catalog items whose author does not appear among
/// the liked items' authors and whose id is not itself liked, taken
/// in catalog order up to `top_n`.
pub fn similar_items(catalog: &Catalog, liked_item_ids: &[String], top_n: usize) -> Vec<Item> {
    let liked_ids: AHashSet<&str> = liked_item_ids.iter().map(String::as_str).collect();

    let mut liked_authors: AHashSet<&str> = AHashSet::new();
    for item_id in &liked_ids {
        if let Some(item) = catalog.item(item_id) {
            liked_authors.insert(item.author.as_str());
        }
    }

    catalog
        .items()
        .iter()
        .filter(|item| {
            !liked_authors.contains(item.author.as_str()) && !liked_ids.contains(item.id.as_str())
        })
        .take(top_n)
        .cloned()
        .collect()
}
