//! Password-based key derivation.

use hmac::Hmac;
use sha1::Sha1;

use crate::error::{PrimitiveError, Result};

/// PBKDF2 with HMAC-SHA1 as the PRF.
///
/// Rejects a zero iteration count or an empty output.
pub fn pbkdf2_hmac_sha1(
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    key_len: usize,
) -> Result<Vec<u8>> {
    if iterations == 0 {
        return Err(PrimitiveError::UnsupportedParameter {
            algorithm: "PBKDF2-HMAC-SHA1",
            parameter: "iteration count",
            expected: ">= 1".to_string(),
            actual: 0,
        });
    }
    if key_len == 0 {
        return Err(PrimitiveError::UnsupportedParameter {
            algorithm: "PBKDF2-HMAC-SHA1",
            parameter: "key",
            expected: ">= 1".to_string(),
            actual: 0,
        });
    }
    let mut key = vec![0u8; key_len];
    pbkdf2::pbkdf2::<Hmac<Sha1>>(password, salt, iterations, &mut key).map_err(|_| {
        PrimitiveError::UnsupportedParameter {
            algorithm: "PBKDF2-HMAC-SHA1",
            parameter: "key",
            expected: "a length accepted by HMAC".to_string(),
            actual: key_len,
        }
    })?;
    Ok(key)
}
