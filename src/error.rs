//! Store error types.

use thiserror::Error;

/// Errors that can occur in store operations.
///
/// Every variant is recoverable: a refused cart insertion or a bad index is
/// reported to the caller, who may correct the input and continue. Nothing
/// here is fatal to the process.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Item cannot be added to a cart because it has no stock left.
    #[error("cannot add {name}: out of stock")]
    OutOfStock { name: String },

    /// Index outside `[0, len)` passed to an indexed read.
    #[error("index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },
}
