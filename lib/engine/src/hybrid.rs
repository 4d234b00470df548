//! Hybrid ranking
//!
//! Merges the collaborative neighbor signal with content-based
//! candidates: items liked by similar users seed the candidate
//! generator, whose output becomes the recommendation list.

use crate::candidates::similar_items;
use crate::neighbors::{similar_users, DEFAULT_NEIGHBORS};
use ahash::AHashSet;
use readnext_core::{Catalog, Item, Result};

/// Rating threshold at or above which an event counts as a "like"
pub const LIKE_THRESHOLD: f32 = 4.0;

/// Default recommendation count
pub const DEFAULT_RECOMMENDATIONS: usize = 10;

/// Recommend items for a user
///
/// Neighbor users are found via collaborative filtering, every item
/// a neighbor rated at or above [`LIKE_THRESHOLD`] seeds the
/// candidate generator, and the candidates are deduplicated and
/// truncated to `top_n`. Items the target user has already rated are
/// never returned. A user with no ratings degenerates to the first
/// `top_n` catalog items in catalog order rather than failing.
pub fn recommend(catalog: &Catalog, user_id: &str, top_n: usize) -> Result<Vec<Item>> {
    let neighbors = similar_users(catalog, user_id, DEFAULT_NEIGHBORS)?;
    let neighbor_ids: AHashSet<&str> = neighbors.iter().map(|n| n.user_id.as_str()).collect();

    let liked_item_ids: Vec<String> = catalog
        .ratings()
        .iter()
        .filter(|rating| {
            neighbor_ids.contains(rating.user_id.as_str()) && rating.rating >= LIKE_THRESHOLD
        })
        .map(|rating| rating.item_id.clone())
        .collect();

    let already_rated: AHashSet<&str> = catalog
        .user_ratings(user_id)
        .iter()
        .map(|rating| rating.item_id.as_str())
        .collect();

    // Headroom covers candidates lost to the already-rated filter
    let candidates = similar_items(catalog, &liked_item_ids, top_n + already_rated.len());

    let mut seen: AHashSet<String> = AHashSet::new();
    let mut recommendations: Vec<Item> = Vec::with_capacity(top_n);
    for item in candidates {
        if already_rated.contains(item.id.as_str()) {
            continue;
        }
        if seen.insert(item.id.clone()) {
            recommendations.push(item);
        }
        if recommendations.len() == top_n {
            break;
        }
    }

    Ok(recommendations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use readnext_core::{RatingEvent, User};

    fn catalog() -> Catalog {
        Catalog::new(
            vec![
                Item::new("b1", "One", "Jane Doe"),
                Item::new("b2", "Two", "John Roe"),
                Item::new("b3", "Three", "Mary Major"),
                Item::new("b4", "Four", "Jane Doe"),
                Item::new("b5", "Five", "Paul Gasol"),
            ],
            vec![User::new("u1"), User::new("u2"), User::new("u3")],
            vec![
                RatingEvent::new("u1", "b1", 5.0),
                RatingEvent::new("u1", "b2", 4.0),
                RatingEvent::new("u2", "b1", 5.0),
                RatingEvent::new("u2", "b2", 4.0),
                RatingEvent::new("u2", "b3", 5.0),
                RatingEvent::new("u3", "b5", 2.0),
            ],
        )
    }

    #[test]
    fn test_recommend_excludes_already_rated() {
        let catalog = catalog();
        let recommendations = recommend(&catalog, "u1", 10).unwrap();
        assert!(recommendations.iter().all(|item| item.id != "b1" && item.id != "b2"));
        assert!(!recommendations.is_empty());
    }

    #[test]
    fn test_recommend_excludes_neighbor_liked_authors() {
        let catalog = catalog();
        // u2 is u1's closest neighbor and likes b1 (Jane Doe), b2
        // (John Roe) and b3 (Mary Major); their authors are excluded.
        let recommendations = recommend(&catalog, "u1", 10).unwrap();
        let ids: Vec<&str> = recommendations.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["b5"]);
    }

    #[test]
    fn test_unknown_user_gets_catalog_defaults() {
        let catalog = catalog();
        let recommendations = recommend(&catalog, "nobody", 3).unwrap();
        let ids: Vec<&str> = recommendations.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["b1", "b2", "b3"]);
    }

    #[test]
    fn test_truncation() {
        let catalog = catalog();
        let recommendations = recommend(&catalog, "nobody", 2).unwrap();
        assert_eq!(recommendations.len(), 2);
    }

    #[test]
    fn test_idempotent() {
        let catalog = catalog();
        let first = recommend(&catalog, "u1", 10).unwrap();
        let second = recommend(&catalog, "u1", 10).unwrap();
        assert_eq!(first, second);
    }
}
