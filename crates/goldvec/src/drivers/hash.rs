//! Digest datasets.

use bytes::Bytes;
use goldvec_core::{Case, Dataset, RandomSource, Schema, TextEncoding};
use goldvec_primitives::HashAlgorithm;

use super::SizeRange;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashParams {
    pub algorithm: HashAlgorithm,
    /// Case `i` digests `i` random bytes.
    pub sizes: SizeRange,
}

/// `Base64,<ALG> hash`: input base64, digest lowercase hex.
pub fn schema(algorithm: HashAlgorithm) -> Schema {
    Schema::new()
        .input("Base64", TextEncoding::Base64)
        .output(format!("{} hash", algorithm.label()), TextEncoding::Hex)
}

pub fn generate<R: RandomSource>(
    name: &str,
    params: &HashParams,
    rng: &mut R,
) -> Result<Dataset> {
    let mut dataset = Dataset::new(name, schema(params.algorithm));
    for i in params.sizes.iter() {
        let data = rng.random(i)?;
        let digest = params.algorithm.digest(&data);
        dataset.push(Case::new(vec![data, Bytes::from(digest)]))?;
    }
    Ok(dataset)
}

/// Digest sidecar: every digest as lowercase hex, one per line.
pub fn digest_lines(dataset: &Dataset) -> Vec<u8> {
    let mut out = String::new();
    for case in dataset.cases() {
        if let Some(digest) = case.values().last() {
            out.push_str(&hex::encode(digest));
            out.push('\n');
        }
    }
    out.into_bytes()
}
