//! Padding datasets.

use bytes::Bytes;
use goldvec_core::{Case, Dataset, RandomSource, Schema, TextEncoding};
use goldvec_primitives::PaddingScheme;

use super::SizeRange;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaddingParams {
    pub scheme: PaddingScheme,
    /// Case `i` pads `i` random bytes.
    pub sizes: SizeRange,
}

/// `Base64,<Scheme> padding`: input and full padded buffer, both base64.
pub fn schema(scheme: PaddingScheme) -> Schema {
    Schema::new()
        .input("Base64", TextEncoding::Base64)
        .output(format!("{} padding", scheme.label()), TextEncoding::Base64)
}

pub fn generate<R: RandomSource>(
    name: &str,
    params: &PaddingParams,
    rng: &mut R,
) -> Result<Dataset> {
    let mut dataset = Dataset::new(name, schema(params.scheme));
    for i in params.sizes.iter() {
        let data = rng.random(i)?;
        let padded = params.scheme.pad(&data, rng)?;
        dataset.push(Case::new(vec![data, Bytes::from(padded)]))?;
    }
    Ok(dataset)
}
