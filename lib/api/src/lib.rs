//! # readnext API
//!
//! REST request layer for the readnext recommendation engine.
//!
//! Exposes the four core operations over HTTP:
//!
//! - `GET /recommend/{user_id}` - hybrid recommendations
//! - `GET /users/{user_id}/neighbors` - collaborative neighbors
//! - `POST /items/suggest` - score one query item against the catalog
//! - `POST /items/suggest-batch` - averaged scores for a query list
//! - `GET /catalog` - loaded table counts
//!
//! Timeout and cancellation policy belongs here, not in the engine;
//! every engine call is bounded, synchronous computation over the
//! shared immutable catalog.

pub mod rest;

pub use rest::RestApi;
