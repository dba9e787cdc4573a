//! Lookup error types.
//!
//! Only string-keyed callers can hit these: the enum-keyed API is total.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("Unknown industry: {0}")]
    UnknownIndustry(String),

    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),
}

/// Result type alias for table lookups.
pub type TableResult<T> = Result<T, TableError>;
