//! # goldvec Core
//!
//! Pure building blocks for golden test-vector files: Length-Value framing,
//! the dataset model, and randomness sources.
//!
//! This crate does no filesystem I/O and calls no cryptographic primitive.
//!
//! ## Key Types
//!
//! - [`Dataset`] - A named, ordered set of [`Case`]s sharing one [`Schema`]
//! - [`LvWriter`] / [`LvReader`] - Count-checked LV record streams
//! - [`RandomSource`] - The capability drivers draw every random byte from
//! - [`EntropySource`] - OS or seeded generator selected per run
//!
//! ## Wire Format
//!
//! All length and count headers are signed 32-bit little-endian integers.
//! See the [`lv`] module.

pub mod dataset;
pub mod error;
pub mod lv;
pub mod random;

pub use dataset::{Case, Column, Dataset, Part, Schema, TextEncoding};
pub use error::{DatasetError, FormatError, RandomError};
pub use lv::{read_value, write_count, write_value, LvReader, LvWriter};
pub use random::{EntropySource, RandomSource};
