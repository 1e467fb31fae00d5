//! RSA-OAEP datasets.

use bytes::Bytes;
use goldvec_core::{Case, Dataset, RandomSource, Schema, TextEncoding};
use goldvec_primitives::{oaep_encrypt, RsaPublicKey};

use crate::error::Result;

/// Plaintext lengths are multiples of this.
pub const UNIT: usize = 16;

/// `Data,Enc`, both base64.
pub fn schema() -> Schema {
    Schema::new()
        .input("Data", TextEncoding::Base64)
        .output("Enc", TextEncoding::Base64)
}

/// Case `i` (1-based) encrypts `i * 16` random bytes under `key`.
pub fn generate<R: RandomSource>(
    name: &str,
    key: &RsaPublicKey,
    cases: usize,
    rng: &mut R,
) -> Result<Dataset> {
    let mut dataset = Dataset::new(name, schema());
    for i in 1..=cases {
        let data = rng.random(i * UNIT)?;
        let encrypted = oaep_encrypt(key, rng, &data)?;
        dataset.push(Case::new(vec![data, Bytes::from(encrypted)]))?;
    }
    Ok(dataset)
}
