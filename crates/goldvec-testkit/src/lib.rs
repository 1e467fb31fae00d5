//! # goldvec Testkit
//!
//! Testing utilities for goldvec.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Known-answer vectors**: published outputs for the primitives behind
//!   every dataset
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: temporary output directories with a fast, seeded
//!   configuration
//!
//! ## Known-Answer Vectors
//!
//! ```rust
//! use goldvec_testkit::vectors::verify_all_vectors;
//!
//! for (name, matches, actual) in verify_all_vectors() {
//!     assert!(matches, "{name}: {actual}");
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use goldvec_testkit::generators::CipherCaseParams;
//!
//! proptest! {
//!     #[test]
//!     fn decrypt_inverts_encrypt(params: CipherCaseParams) {
//!         let cipher = params.algorithm.cipher();
//!         let ct = cipher.encrypt(&params.key, &params.iv, &params.data).unwrap();
//!         prop_assert_eq!(cipher.decrypt(&params.key, &params.iv, &ct).unwrap(), params.data);
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust,no_run
//! use goldvec::Category;
//! use goldvec_testkit::fixtures::TestFixture;
//!
//! let fixture = TestFixture::new().with_categories([Category::Aes]);
//! let manifest = fixture.run().unwrap();
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{fast_config, memory_generator, seeded_fixtures, small_case_counts, TestFixture};
pub use generators::CipherCaseParams;
pub use vectors::{verify_all_vectors, CipherVector, HashVector, PaddingVector, Pbkdf2Vector};
