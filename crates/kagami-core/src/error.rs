use thiserror::Error;

use crate::types::Category;

/// Errors that can occur during Kagami core operations.
///
/// Normalization, tokenization and labeling are total and never produce
/// these; they come from labeler configuration and the dataset codec.
#[derive(Debug, Error)]
pub enum KagamiError {
    /// A dictionary term was empty or whitespace-only.
    #[error("dictionary term is empty or whitespace-only")]
    EmptyTerm,

    /// A dictionary term is already mapped to another category.
    #[error("dictionary term {term:?} is already mapped to {existing}, cannot remap to {requested}")]
    ConflictingTerm {
        /// The (uppercased) term.
        term: String,
        /// Category the lexicon already holds for the term.
        existing: Category,
        /// Category the caller tried to assign.
        requested: Category,
    },

    /// A category name did not match any of the fixed categories.
    #[error("unknown category name: {0:?}")]
    UnknownCategory(String),

    /// Reading or writing a dataset stream failed.
    #[error("dataset I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A record could not be encoded or decoded as JSON.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A JSON Lines record was malformed.
    #[error("invalid record on line {line}: {reason}")]
    InvalidRecord {
        /// 1-based line number in the input stream.
        line: usize,
        /// Decoder message.
        reason: String,
    },
}

/// Result type alias for Kagami operations.
pub type Result<T> = std::result::Result<T, KagamiError>;
