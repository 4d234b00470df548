//! Collaborative filtering: user-to-user similarity
//!
//! Ranks other users by how similarly they rate items compared to a
//! target user. Each pair of users is compared through cosine
//! similarity of their aggregated rating vectors: ratings are
//! averaged per item id and aligned over the sorted union of the two
//! users' item ids, with 0.0 standing in for unrated items. The
//! alignment guarantees the cosine equal-length precondition by
//! construction, so one similarity sample is produced per other user.

use ahash::{AHashMap, AHashSet};
use readnext_core::similarity::cosine_similarity;
use readnext_core::{Catalog, Neighbor, Result};

/// Default neighbor count for collaborative filtering
pub const DEFAULT_NEIGHBORS: usize = 2;

/// Average rating per item id for one user, from its rating events
fn rating_profile<'a>(
    catalog: &'a Catalog,
    user_id: &str,
) -> AHashMap<&'a str, f32> {
    let mut sums: AHashMap<&str, (f32, u32)> = AHashMap::new();
    for rating in catalog.user_ratings(user_id) {
        let entry = sums.entry(rating.item_id.as_str()).or_insert((0.0, 0));
        entry.0 += rating.rating;
        entry.1 += 1;
    }
    sums.into_iter()
        .map(|(item_id, (sum, count))| (item_id, sum / count as f32))
        .collect()
}

/// Align two rating profiles over the sorted union of their item ids
fn aligned_vectors(
    a: &AHashMap<&str, f32>,
    b: &AHashMap<&str, f32>,
) -> (Vec<f32>, Vec<f32>) {
    let mut axis: Vec<&str> = a.keys().chain(b.keys()).copied().collect();
    axis.sort_unstable();
    axis.dedup();

    let vec_a = axis.iter().map(|&id| a.get(id).copied().unwrap_or(0.0)).collect();
    let vec_b = axis.iter().map(|&id| b.get(id).copied().unwrap_or(0.0)).collect();
    (vec_a, vec_b)
}

/// Rank the users most similar to `target_user_id`
///
/// Returns up to `top_n` neighbors sorted by descending similarity.
/// The target user never appears in the output; a target with no
/// ratings yields an empty list. Candidate users are visited in
/// first-appearance dataset order and the sort is stable, so equal
/// scores never reorder between calls.
pub fn similar_users(
    catalog: &Catalog,
    target_user_id: &str,
    top_n: usize,
) -> Result<Vec<Neighbor>> {
    let target_profile = rating_profile(catalog, target_user_id);
    if target_profile.is_empty() {
        return Ok(Vec::new());
    }

    let mut seen: AHashSet<&str> = AHashSet::new();
    let mut candidates: Vec<&str> = Vec::new();
    for rating in catalog.ratings() {
        let user_id = rating.user_id.as_str();
        if user_id != target_user_id && seen.insert(user_id) {
            candidates.push(user_id);
        }
    }

    let mut neighbors: Vec<Neighbor> = Vec::with_capacity(candidates.len());
    for user_id in candidates {
        let profile = rating_profile(catalog, user_id);
        let (target_vec, other_vec) = aligned_vectors(&target_profile, &profile);
        let similarity = cosine_similarity(&target_vec, &other_vec)?;
        neighbors.push(Neighbor {
            user_id: user_id.to_string(),
            similarity,
        });
    }

    neighbors.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    neighbors.truncate(top_n);
    Ok(neighbors)
}
