use thiserror::Error;

/// Reasons a store command can be rejected.
///
/// Every variant is recoverable: a failed command leaves the store exactly
/// as it was.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A required field was empty.
    #[error("{field} must not be empty")]
    Validation { field: &'static str },

    /// Selection outside `0..len`.
    #[error("document index {index} is out of range (have {len})")]
    Index { index: usize, len: usize },

    /// The command would break a store invariant.
    #[error("{0}")]
    Precondition(&'static str),

    /// Uploaded bytes were not valid UTF-8.
    #[error("uploaded file is not valid UTF-8 text: {0}")]
    Decode(#[from] std::string::FromUtf8Error),
}

/// Result type for store commands
pub type Result<T> = std::result::Result<T, StoreError>;
