use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Faults that propagate out of the core
///
/// Unresolved references and empty inputs are policy-handled at the
/// call sites (skip or defined defaults) and never surface here.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Vector length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}
