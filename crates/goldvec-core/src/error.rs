//! Error types for goldvec core.

use thiserror::Error;

/// Errors raised while reading or writing LV-framed streams.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("negative length header: {0}")]
    NegativeLength(i32),

    #[error("truncated record: expected {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },

    #[error("value of {0} does not fit in a 4-byte length header")]
    CountOverflow(usize),

    #[error("count header declares {declared} groups but {written} were written")]
    CountMismatch { declared: usize, written: usize },

    #[error("group has {actual} records, expected {expected}")]
    GroupWidth { expected: usize, actual: usize },

    #[error("{0} trailing bytes after the last declared group")]
    TrailingBytes(usize),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while assembling a dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("case has {actual} values but schema has {expected} columns")]
    Arity { expected: usize, actual: usize },

    #[error("unknown column: {0}")]
    UnknownColumn(String),

    #[error("column {column}: {message}")]
    Encoding { column: String, message: String },
}

/// The randomness source could not produce bytes.
#[derive(Debug, Error)]
#[error("randomness source failed: {0}")]
pub struct RandomError(#[from] pub rand::Error);
