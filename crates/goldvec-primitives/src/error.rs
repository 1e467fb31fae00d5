//! Error types for primitive invocation.

use thiserror::Error;

/// Errors that can occur while invoking a primitive.
#[derive(Debug, Error)]
pub enum PrimitiveError {
    /// Key, IV or nonce size not accepted by the primitive.
    #[error("{algorithm}: unsupported {parameter} length {actual} (expected {expected})")]
    UnsupportedParameter {
        algorithm: &'static str,
        parameter: &'static str,
        expected: String,
        actual: usize,
    },

    /// Input is not a whole number of blocks for an unpadded mode.
    #[error("{algorithm}: input length {len} is not a multiple of the {block_size}-byte block")]
    Misaligned {
        algorithm: &'static str,
        len: usize,
        block_size: usize,
    },

    /// Padding could not be removed.
    #[error("invalid {scheme} padding: {reason}")]
    Padding {
        scheme: &'static str,
        reason: String,
    },

    /// Randomness source failure.
    #[error("randomness source failed: {0}")]
    Random(#[from] rand::Error),

    /// RSA key generation, encryption or decryption failure.
    #[error("RSA error: {0}")]
    Rsa(#[from] rsa::Error),

    /// PEM / PKCS#8 / SPKI encoding failure.
    #[error("key encoding error: {0}")]
    KeyEncoding(String),
}

/// Result type for primitive operations.
pub type Result<T> = std::result::Result<T, PrimitiveError>;
