//! # goldvec primitives
//!
//! Thin call-through wrappers over the RustCrypto implementations used to
//! produce golden values.
//!
//! ## Overview
//!
//! Nothing in this crate implements cryptography. Each wrapper validates
//! its parameters, calls the underlying crate and reports failures through
//! [`PrimitiveError`]. Drivers in the `goldvec` crate compose these calls
//! into datasets.
//!
//! ## Key Types
//!
//! - [`Cipher`] / [`CipherAlgorithm`]: AES-256, Blowfish, 3DES and DES in
//!   CBC mode, plus original ChaCha20 (64-bit nonce)
//! - [`HashAlgorithm`]: SHA-1, SHA-256, SHA-512, MD5, SHA3-512
//! - [`PaddingScheme`]: PKCS#7, ISO 10126, ISO/IEC 7816-4, ANSI X9.23
//! - [`RsaKeyPair`]: RSA generation, OAEP-SHA1, PEM import/export
//!
//! ## Usage
//!
//! ```rust
//! use goldvec_primitives::{CipherAlgorithm, HashAlgorithm};
//!
//! let cipher = CipherAlgorithm::Aes256Cbc.cipher();
//! let ciphertext = cipher.encrypt(&[0u8; 32], &[0u8; 16], &[0u8; 32]).unwrap();
//! assert_eq!(ciphertext.len(), 32);
//!
//! assert_eq!(HashAlgorithm::Sha1.digest(b"").len(), 20);
//! ```

pub mod asymmetric;
pub mod cipher;
pub mod error;
pub mod hash;
pub mod kdf;
pub mod padding;

pub use asymmetric::{max_oaep_message_len, oaep_encrypt, public_key_from_pem, RsaKeyPair};
pub use cipher::{Cipher, CipherAlgorithm};
pub use error::{PrimitiveError, Result};
pub use hash::HashAlgorithm;
pub use kdf::pbkdf2_hmac_sha1;
pub use padding::{PaddingScheme, BLOCK_SIZE};
pub use rsa::RsaPublicKey;
