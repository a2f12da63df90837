//! Error types for the solver.

use thiserror::Error;

/// Result type alias for solver operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported before an annealing run starts.
///
/// The search itself never fails: an exhausted budget still yields the
/// best board seen, as a regular [`AnnealingResult`](crate::AnnealingResult).
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration rejected by validation.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}
