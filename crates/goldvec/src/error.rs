//! Error types for dataset generation.

use goldvec_core::{DatasetError, FormatError, RandomError};
use goldvec_emit::EmitError;
use goldvec_primitives::PrimitiveError;
use thiserror::Error;

/// Errors that can occur while generating or verifying datasets.
#[derive(Debug, Error)]
pub enum GenError {
    /// LV framing error.
    #[error("format error: {0}")]
    Format(#[from] FormatError),

    /// Case does not fit its dataset.
    #[error("dataset shape error: {0}")]
    Shape(#[from] DatasetError),

    /// Randomness source failure.
    #[error(transparent)]
    Random(#[from] RandomError),

    /// Primitive invocation failure.
    #[error("primitive error: {0}")]
    Primitive(#[from] PrimitiveError),

    /// Rendering or writing output failed.
    #[error("emit error: {0}")]
    Emit(#[from] EmitError),

    /// Filesystem error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Manifest or config (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Failure while producing or checking one named dataset.
    #[error("dataset {name}: {source}")]
    Dataset {
        name: String,
        #[source]
        source: Box<GenError>,
    },
}

impl GenError {
    /// Attach the name of the dataset being processed.
    pub fn in_dataset(self, name: impl Into<String>) -> Self {
        match self {
            Self::Dataset { .. } => self,
            other => Self::Dataset {
                name: name.into(),
                source: Box::new(other),
            },
        }
    }
}

/// Result type for generator operations.
pub type Result<T> = std::result::Result<T, GenError>;
