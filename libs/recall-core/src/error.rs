//! Error types for recall-core.

use thiserror::Error;

/// Result type alias using StoreError.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors at the persistence boundary.
///
/// The scheduler itself is total and never returns these; only the store
/// traits do.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("card {id} not found")]
    CardNotFound { id: i64 },

    #[error("deck {id} not found")]
    DeckNotFound { id: i64 },

    #[error("refusing to save a blank placeholder card")]
    PlaceholderCard,
}
