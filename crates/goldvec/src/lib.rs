//! # goldvec
//!
//! Golden test-vector generator for cryptographic toolkits.
//!
//! ## Overview
//!
//! goldvec produces reference datasets that a client toolkit's unit tests
//! replay against its own implementation:
//!
//! - **Ciphers**: AES-256-CBC, Blowfish-CBC, 3DES-CBC, DES-CBC, ChaCha20
//! - **Hashes**: SHA-1, SHA-256, SHA-512, MD5, SHA3-512
//! - **Padding**: PKCS#7, ISO 10126, ISO/IEC 7816-4, ANSI X9.23
//! - **Key derivation**: PBKDF2-HMAC-SHA1
//! - **RSA**: OAEP-SHA1 ciphertexts under two provisioned keypairs
//! - **Encodings**: hex to base64
//!
//! Each dataset is written as CSV, as split length-value (LV) files, or as a
//! single combined LV file. A `manifest.json` records every artifact with its
//! size and SHA-256 so an output directory can be re-checked later.
//!
//! ## Key Types
//!
//! - [`GeneratorConfig`]: what to generate, where, and how many cases
//! - [`Generator`]: drives every selected category into a [`Sink`](goldvec_emit::Sink)
//! - [`Manifest`]: the record of a run
//! - [`Report`]: the outcome of [`verify_dir`]
//!
//! ## Usage
//!
//! ```rust,no_run
//! use goldvec::{generate, verify_dir, Category, GeneratorConfig};
//!
//! let config = GeneratorConfig::new("./data").with_categories([Category::Aes, Category::Sha1]);
//! let manifest = generate(&config).unwrap();
//! println!("{} datasets", manifest.datasets.len());
//!
//! let report = verify_dir(&config.output_dir, &config.rsa.passphrase).unwrap();
//! assert!(report.is_ok());
//! ```
//!
//! ## Re-exports
//!
//! - `goldvec::core` - LV framing, datasets, entropy
//! - `goldvec::primitives` - cipher, hash, padding, KDF and RSA wrappers
//! - `goldvec::emit` - CSV/LV renderers and output sinks

pub mod category;
pub mod config;
pub mod drivers;
pub mod error;
pub mod generator;
pub mod keys;
pub mod manifest;
pub mod verify;

// Re-export component crates
pub use goldvec_core as core;
pub use goldvec_emit as emit;
pub use goldvec_primitives as primitives;

// Re-export main types for convenience
pub use category::{Category, Family};
pub use config::{CaseCounts, GeneratorConfig, RsaConfig};
pub use error::{GenError, Result};
pub use generator::{generate, Generator};
pub use manifest::{DatasetEntry, KeyEntry, Manifest, MANIFEST_FILE};
pub use verify::{verify_dir, verify_sink, Finding, Report};

pub use goldvec_core::{Dataset, EntropySource};
pub use goldvec_emit::OutputFormat;
