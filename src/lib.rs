//! # readnext
//!
//! A hybrid book recommendation engine combining collaborative
//! filtering (user-to-user rating similarity) with content-based
//! filtering (title/author feature similarity) over an immutable
//! in-memory catalog.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! cargo install readnext
//! readnext --data-dir ./data --http-port 3000
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use readnext::prelude::*;
//!
//! let catalog = load_catalog(std::path::Path::new("./data")).unwrap();
//! let recommender = Recommender::new(catalog);
//!
//! // Hybrid recommendations for a user
//! let items = recommender.recommend("276725", 10).unwrap();
//!
//! // Catalog-wide scoring of an external item
//! let query = ItemFeatures::new("Classical Mythology", "Mark P. O. Morford");
//! let scored = recommender.suggest(&query, 10);
//! ```
//!
//! ## Crate Structure
//!
//! readnext is composed of several crates:
//!
//! - [`readnext-core`](https://docs.rs/readnext-core) - Records, catalog, similarity primitives
//! - [`readnext-engine`](https://docs.rs/readnext-engine) - Neighbor selection, candidates, ranking, batch scoring
//! - [`readnext-ingest`](https://docs.rs/readnext-ingest) - CSV table loading
//! - [`readnext-api`](https://docs.rs/readnext-api) - REST API

// Re-export core types
pub use readnext_core::{
    cosine_similarity, item_similarity, jaccard_similarity, Catalog, Error, Item, ItemFeatures,
    Neighbor, RatingEvent, Result, ScoredItem, User,
};

// Re-export the engine
pub use readnext_engine::{
    Recommender, DEFAULT_CANDIDATES, DEFAULT_LIST_SUGGESTIONS, DEFAULT_NEIGHBORS,
    DEFAULT_RECOMMENDATIONS, DEFAULT_SUGGESTIONS, LIKE_THRESHOLD,
};

// Re-export ingestion
pub use readnext_ingest::{load_catalog, IngestError};

// Re-export API
pub use readnext_api::RestApi;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        load_catalog, Catalog, Error, IngestError, Item, ItemFeatures, Neighbor, RatingEvent,
        Recommender, RestApi, Result, ScoredItem, User,
    };
}
