//! # readnext Engine
//!
//! Scoring engine for the readnext recommendation system.
//!
//! Combines two strategies over an immutable [`Catalog`]:
//!
//! - [`neighbors`] - Collaborative filtering (user-to-user similarity)
//! - [`candidates`] - Content-based candidate generation
//! - [`hybrid`] - Merged, ranked recommendations per user
//! - [`batch`] - Item-to-catalog scoring with no user signal
//!
//! Every operation is a synchronous, side-effect-free transformation;
//! all intermediate structures are request-scoped, so concurrent
//! calls over the shared catalog need no locking.
//!
//! ## Example
//!
//! ```rust
//! use readnext_core::{Catalog, Item, RatingEvent, User};
//! use readnext_engine::Recommender;
//!
//! let catalog = Catalog::new(
//!     vec![
//!         Item::new("b1", "The Cat", "Jane Doe"),
//!         Item::new("b2", "The Dog", "John Roe"),
//!     ],
//!     vec![User::new("u1"), User::new("u2")],
//!     vec![
//!         RatingEvent::new("u1", "b1", 5.0),
//!         RatingEvent::new("u2", "b1", 5.0),
//!     ],
//! );
//!
//! let recommender = Recommender::new(catalog);
//! let items = recommender.recommend("u1", 10).unwrap();
//! assert!(items.iter().all(|item| item.id != "b1"));
//! ```

pub mod batch;
pub mod candidates;
pub mod hybrid;
pub mod neighbors;

pub use batch::{DEFAULT_LIST_SUGGESTIONS, DEFAULT_SUGGESTIONS};
pub use candidates::DEFAULT_CANDIDATES;
pub use hybrid::{DEFAULT_RECOMMENDATIONS, LIKE_THRESHOLD};
pub use neighbors::DEFAULT_NEIGHBORS;

use readnext_core::similarity::ItemFeatures;
use readnext_core::{Catalog, Item, Neighbor, Result, ScoredItem};
use std::sync::Arc;

/// Shared handle over the loaded catalog exposing the core operations
///
/// Owns the catalog behind an [`Arc`] so the request layer can clone
/// the handle freely across workers.
#[derive(Debug, Clone)]
pub struct Recommender {
    catalog: Arc<Catalog>,
}

impl Recommender {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    #[inline]
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Hybrid recommendations for a user, see [`hybrid::recommend`]
    pub fn recommend(&self, user_id: &str, top_n: usize) -> Result<Vec<Item>> {
        hybrid::recommend(&self.catalog, user_id, top_n)
    }

    /// Collaborative neighbors for a user, see [`neighbors::similar_users`]
    pub fn similar_users(&self, user_id: &str, top_n: usize) -> Result<Vec<Neighbor>> {
        neighbors::similar_users(&self.catalog, user_id, top_n)
    }

    /// Content-based candidates for a liked-item set,
    /// see [`candidates::similar_items`]
    #[must_use]
    pub fn similar_items(&self, liked_item_ids: &[String], top_n: usize) -> Vec<Item> {
        candidates::similar_items(&self.catalog, liked_item_ids, top_n)
    }

    /// Catalog-wide scores for one query item, see [`batch::suggest`]
    #[must_use]
    pub fn suggest(&self, query: &ItemFeatures, top_n: usize) -> Vec<ScoredItem> {
        batch::suggest(&self.catalog, query, top_n)
    }

    /// Catalog-wide averaged scores for a query list,
    /// see [`batch::suggest_from_list`]
    #[must_use]
    pub fn suggest_from_list(&self, queries: &[ItemFeatures], top_n: usize) -> Vec<ScoredItem> {
        batch::suggest_from_list(&self.catalog, queries, top_n)
    }
}
