//! Error types for the batch loader.

use thiserror::Error;

/// Errors that prevent a load from starting.
///
/// Individual write failures are never errors at this level; they are
/// counted in the batch results.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PopulateError {
    /// Batch size must be at least one.
    #[error("Invalid batch size: {0} (must be at least 1)")]
    InvalidBatchSize(usize),
}
