//! # goldvec emit
//!
//! Output formats and sinks for goldvec datasets.
//!
//! ## Overview
//!
//! A complete [`Dataset`](goldvec_core::Dataset) is rendered into one of
//! three layouts and handed to a [`Sink`]:
//!
//! - **LV split**: `<name>_data.dat` holds the input columns and
//!   `<name>_enc.dat` the output columns, each with its own count header
//! - **LV combined**: `<name>.dat` holds every column of each case
//! - **CSV**: `<name>.csv` with a header row and text-encoded fields
//!
//! Every written file is described by an [`Artifact`] carrying its length
//! and SHA-256, which the generator collects into the run manifest.
//!
//! ## Usage
//!
//! ```rust
//! use goldvec_core::{Dataset, Schema, TextEncoding};
//! use goldvec_emit::{emit_dataset, MemorySink, OutputFormat, Sink};
//!
//! let schema = Schema::new().input("Hex", TextEncoding::Hex);
//! let dataset = Dataset::new("empty", schema);
//!
//! let sink = MemorySink::new();
//! emit_dataset(&dataset, OutputFormat::Csv, &sink).unwrap();
//! assert_eq!(sink.get("empty.csv").unwrap(), b"Hex\n");
//! ```

pub mod csv;
pub mod emitter;
pub mod error;
pub mod format;
pub mod lv;
pub mod sink;

pub use emitter::{emit_dataset, read_dataset};
pub use error::{EmitError, Result};
pub use format::OutputFormat;
pub use sink::{Artifact, FileSink, MemorySink, Sink};
