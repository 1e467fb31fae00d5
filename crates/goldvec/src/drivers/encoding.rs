//! Hex and base64 encoding datasets.

use bytes::Bytes;
use goldvec_core::{Case, Dataset, DatasetError, RandomSource, Schema, TextEncoding};

use super::SizeRange;
use crate::error::Result;

/// `Hex,Base64`. The output value is the base64 text itself, so LV files
/// carry raw bytes next to their ASCII encoding.
pub fn schema() -> Schema {
    Schema::new()
        .input("Hex", TextEncoding::Hex)
        .output("Base64", TextEncoding::Utf8)
}

pub fn generate<R: RandomSource>(name: &str, sizes: SizeRange, rng: &mut R) -> Result<Dataset> {
    let mut dataset = Dataset::new(name, schema());
    for i in sizes.iter() {
        let data = rng.random(i)?;
        let text = TextEncoding::Base64
            .encode(&data)
            .map_err(|message| DatasetError::Encoding {
                column: "Base64".to_string(),
                message,
            })?;
        dataset.push(Case::new(vec![data, Bytes::from(text)]))?;
    }
    Ok(dataset)
}
