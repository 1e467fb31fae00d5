//! Error types for emitting and reading back dataset files.

use goldvec_core::{DatasetError, FormatError};
use thiserror::Error;

/// Errors that can occur while rendering, writing or parsing output files.
#[derive(Debug, Error)]
pub enum EmitError {
    /// LV framing error.
    #[error("LV format error: {0}")]
    Format(#[from] FormatError),

    /// Dataset shape or text-encoding error.
    #[error("dataset error: {0}")]
    Dataset(#[from] DatasetError),

    /// CSV reader/writer error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// CSV header row differs from the schema.
    #[error("CSV header mismatch: expected {expected:?}, found {actual:?}")]
    Header {
        expected: Vec<String>,
        actual: Vec<String>,
    },

    /// A field could not be decoded back into bytes.
    #[error("row {row}, column {column}: {message}")]
    Field {
        row: usize,
        column: String,
        message: String,
    },

    /// Split LV files disagree on the number of cases.
    #[error("split files disagree: {data} data groups vs {output} output groups")]
    SplitMismatch { data: usize, output: usize },

    /// Artifact name is not a plain file name.
    #[error("invalid artifact name: {0:?}")]
    InvalidName(String),

    /// Artifact not present in the sink.
    #[error("artifact not found: {0}")]
    NotFound(String),

    /// Filesystem error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for emit operations.
pub type Result<T> = std::result::Result<T, EmitError>;
