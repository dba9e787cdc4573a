//! Engine error types.

use mailbench_data::{MetricKind, TableError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid {metric}: {value} ({reason})")]
    InvalidInput {
        metric: MetricKind,
        value: f64,
        reason: &'static str,
    },

    #[error(transparent)]
    Table(#[from] TableError),

    #[error("CSV parse error at line {line}: {source}")]
    Csv {
        line: usize,
        #[source]
        source: csv::Error,
    },

    #[error("Failed to open '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
