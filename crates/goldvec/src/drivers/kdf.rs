//! PBKDF2 datasets.

use bytes::Bytes;
use goldvec_core::{Case, Dataset, RandomSource, Schema, TextEncoding};
use goldvec_primitives::pbkdf2_hmac_sha1;

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pbkdf2Params {
    pub cases: usize,
    pub iterations: u32,
    /// Random bytes behind each password; the password is their hex text.
    pub password_bytes: usize,
    pub salt_len: usize,
    pub key_len: usize,
}

impl Pbkdf2Params {
    pub fn new(cases: usize, iterations: u32) -> Self {
        Self {
            cases,
            iterations,
            password_bytes: 8,
            salt_len: 16,
            key_len: 32,
        }
    }
}

/// `Password,Salt,Key`: password as text, salt and key lowercase hex.
pub fn schema() -> Schema {
    Schema::new()
        .input("Password", TextEncoding::Utf8)
        .input("Salt", TextEncoding::Hex)
        .output("Key", TextEncoding::Hex)
}

pub fn generate<R: RandomSource>(
    name: &str,
    params: &Pbkdf2Params,
    rng: &mut R,
) -> Result<Dataset> {
    let mut dataset = Dataset::new(name, schema());
    for _ in 0..params.cases {
        let password = hex::encode(rng.random(params.password_bytes)?);
        let salt = rng.random(params.salt_len)?;
        let key = pbkdf2_hmac_sha1(password.as_bytes(), &salt, params.iterations, params.key_len)?;
        dataset.push(Case::new(vec![
            Bytes::from(password),
            salt,
            Bytes::from(key),
        ]))?;
    }
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use goldvec_core::EntropySource;

    #[test]
    fn test_rederivation() {
        let mut rng = EntropySource::seeded(6);
        let params = Pbkdf2Params::new(4, 100);
        let dataset = generate("pbkdf2", &params, &mut rng).unwrap();
        assert_eq!(dataset.len(), 4);

        for case in dataset.cases() {
            assert_eq!(case.value(0).len(), 16);
            assert!(case.value(0).iter().all(u8::is_ascii_hexdigit));
            assert_eq!(case.value(1).len(), 16);
            assert_eq!(case.value(2).len(), 32);

            let key = pbkdf2_hmac_sha1(case.value(0), case.value(1), 100, 32).unwrap();
            assert_eq!(&key[..], &case.value(2)[..]);
        }
    }
}
