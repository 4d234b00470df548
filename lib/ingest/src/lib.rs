//! # readnext Ingest
//!
//! Ingestion collaborator for the readnext recommendation engine.
//!
//! Loads the three semicolon-delimited source tables into the
//! immutable [`Catalog`](readnext_core::Catalog) the scoring engine
//! consumes. Loading completes once at startup; the core never reads
//! files itself. Malformed rows are quarantined here, at the
//! boundary.

pub mod error;
pub mod loader;

pub use error::{IngestError, Result};
pub use loader::{load_catalog, load_items, load_ratings, load_users};
