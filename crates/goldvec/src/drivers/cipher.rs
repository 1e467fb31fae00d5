//! Symmetric encryption datasets.

use bytes::Bytes;
use goldvec_core::{Case, Dataset, RandomSource, Schema, TextEncoding};
use goldvec_primitives::CipherAlgorithm;

use crate::error::Result;

/// Plaintext lengths are multiples of this.
pub const UNIT: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CipherParams {
    pub algorithm: CipherAlgorithm,
    /// Case `i` (1-based) encrypts `i * 16` bytes.
    pub cases: usize,
}

/// `Key,IV,Data,Encrypted`, all base64.
pub fn schema() -> Schema {
    Schema::new()
        .input("Key", TextEncoding::Base64)
        .input("IV", TextEncoding::Base64)
        .input("Data", TextEncoding::Base64)
        .output("Encrypted", TextEncoding::Base64)
}

/// Fresh key, IV and plaintext for every case.
pub fn generate<R: RandomSource>(
    name: &str,
    params: &CipherParams,
    rng: &mut R,
) -> Result<Dataset> {
    let cipher = params.algorithm.cipher();
    let mut dataset = Dataset::new(name, schema());

    for i in 1..=params.cases {
        let key = rng.random(cipher.key_len())?;
        let iv = rng.random(cipher.iv_len())?;
        let data = rng.random(i * UNIT)?;
        let encrypted = cipher.encrypt(&key, &iv, &data)?;
        dataset.push(Case::new(vec![key, iv, data, Bytes::from(encrypted)]))?;
    }
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use goldvec_core::EntropySource;

    #[test]
    fn test_aes_dataset_shape() {
        let mut rng = EntropySource::seeded(1);
        let params = CipherParams {
            algorithm: CipherAlgorithm::Aes256Cbc,
            cases: 100,
        };
        let dataset = generate("aes", &params, &mut rng).unwrap();
        assert_eq!(dataset.len(), 100);

        for (i, case) in dataset.cases().iter().enumerate() {
            assert_eq!(case.value(0).len(), 32);
            assert_eq!(case.value(1).len(), 16);
            assert_eq!(case.value(2).len(), (i + 1) * 16);
            assert_eq!(case.value(3).len(), (i + 1) * 16);
        }
    }

    #[test]
    fn test_ciphertexts_decrypt() {
        let mut rng = EntropySource::seeded(2);
        for algorithm in CipherAlgorithm::ALL {
            let params = CipherParams { algorithm, cases: 5 };
            let dataset = generate("x", &params, &mut rng).unwrap();
            let cipher = algorithm.cipher();
            for case in dataset.cases() {
                let decrypted = cipher
                    .decrypt(case.value(0), case.value(1), case.value(3))
                    .unwrap();
                assert_eq!(&decrypted[..], &case.value(2)[..], "{algorithm}");
            }
        }
    }

    #[test]
    fn test_keys_are_fresh() {
        let mut rng = EntropySource::os();
        let params = CipherParams {
            algorithm: CipherAlgorithm::DesCbc,
            cases: 2,
        };
        let dataset = generate("des", &params, &mut rng).unwrap();
        assert_ne!(dataset.cases()[0].value(0), dataset.cases()[1].value(0));
    }
}
