//! Error types for split analysis
//!
//! Every variant names the offending sample id, table or column so a failed
//! run can be traced back to its input without a debugger.

use std::path::PathBuf;

/// Result type alias for catsplit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading inputs or running an analysis.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A sample id is present in a table but absent from the metadata store.
    #[error("Sample '{id}' not found in metadata store\n  → Regenerate the metadata file or drop the sample from the table")]
    MissingMetadata { id: String },

    /// A validation id has no prediction in the prediction store.
    #[error("Sample '{id}' has no prediction in {}", path.display())]
    MissingPrediction { id: String, path: PathBuf },

    /// A required column is absent from an input table.
    #[error("Table '{table}' is missing required column '{column}'")]
    MissingColumn { table: String, column: String },

    /// The same id appears on two rows of one table.
    #[error("Table '{table}' contains duplicate id '{id}'")]
    DuplicateId { table: String, id: String },

    /// A cell could not be parsed.
    #[error("Table '{table}' line {line}: invalid value '{value}' in column '{column}'")]
    InvalidValue {
        table: String,
        line: u64,
        column: String,
        value: String,
    },

    /// A metric was requested over an empty sequence.
    #[error("Cannot compute metrics on empty input: {0}")]
    EmptyInput(String),

    /// Truth and prediction sequences differ in length.
    #[error("Length mismatch: expected {expected} values, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Head name not recognised.
    #[error("Unknown model_head: {0}")]
    UnknownHead(String),

    /// Checkpoint file could not be read or parsed.
    #[error("Checkpoint error: {0}")]
    Checkpoint(String),

    /// Plot rendering failed.
    #[error("Plot error: {0}")]
    Plot(String),

    /// Configuration could not be loaded or is invalid.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// (De)serialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Self {
        Error::Serialization(format!("CSV error: {e}"))
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(format!("JSON error: {e}"))
    }
}
