//! # readnext Core
//!
//! Core library for the readnext recommendation engine.
//!
//! This crate provides the fundamental data structures and primitives:
//!
//! - [`Item`], [`User`], [`RatingEvent`] - Typed source records
//! - [`Catalog`] - Immutable owner of the three loaded tables
//! - [`similarity`] - Cosine and Jaccard similarity primitives
//! - [`ScoredItem`], [`Neighbor`] - Transient scoring outputs
//!
//! ## Example
//!
//! ```rust
//! use readnext_core::{Catalog, Item, RatingEvent, User};
//! use readnext_core::similarity::{item_similarity, ItemFeatures};
//!
//! let catalog = Catalog::new(
//!     vec![Item::new("0195153448", "Classical Mythology", "Mark P. O. Morford")],
//!     vec![User::new("276725")],
//!     vec![RatingEvent::new("276725", "0195153448", 5.0)],
//! );
//!
//! let features = ItemFeatures::new("Classical Mythology", "Mark P. O. Morford");
//! let score = item_similarity(&features, &catalog.items()[0]);
//! assert!((score - 1.0).abs() < 1e-6);
//! ```

pub mod catalog;
pub mod error;
pub mod record;
pub mod similarity;

pub use catalog::Catalog;
pub use error::{Error, Result};
pub use record::{Item, Neighbor, RatingEvent, ScoredItem, User};
pub use similarity::{cosine_similarity, item_similarity, jaccard_similarity, ItemFeatures};
