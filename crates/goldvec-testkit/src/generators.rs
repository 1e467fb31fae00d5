//! Proptest generators for property-based testing.

use bytes::Bytes;
use proptest::prelude::*;

use goldvec::{CaseCounts, Category};
use goldvec_core::{Case, Dataset, Schema, TextEncoding};
use goldvec_emit::OutputFormat;
use goldvec_primitives::{CipherAlgorithm, HashAlgorithm, PaddingScheme};

/// Generate byte strings of up to `max_len` bytes, empty included.
pub fn bytes(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=max_len)
}

/// Generate a whole number of 16-byte blocks, at least one.
pub fn blocks(max_blocks: usize) -> impl Strategy<Value = Vec<u8>> {
    (1..=max_blocks.max(1)).prop_flat_map(|n| prop::collection::vec(any::<u8>(), n * 16))
}

pub fn category() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::ALL.to_vec())
}

pub fn cipher_algorithm() -> impl Strategy<Value = CipherAlgorithm> {
    prop::sample::select(CipherAlgorithm::ALL.to_vec())
}

pub fn hash_algorithm() -> impl Strategy<Value = HashAlgorithm> {
    prop::sample::select(HashAlgorithm::ALL.to_vec())
}

pub fn padding_scheme() -> impl Strategy<Value = PaddingScheme> {
    prop::sample::select(PaddingScheme::ALL.to_vec())
}

pub fn output_format() -> impl Strategy<Value = OutputFormat> {
    prop::sample::select(OutputFormat::ALL.to_vec())
}

pub fn text_encoding() -> impl Strategy<Value = TextEncoding> {
    prop_oneof![
        Just(TextEncoding::Base64),
        Just(TextEncoding::Hex),
        Just(TextEncoding::Utf8),
    ]
}

/// Generate case counts small enough for a whole run to stay fast.
pub fn small_case_counts() -> impl Strategy<Value = CaseCounts> {
    (1usize..6, 1usize..8, 1usize..8, 1usize..20, 1usize..3, 1usize..4, 1usize..10).prop_map(
        |(cipher, hash_csv, hash_lv, padding, kdf, rsa, encoding)| CaseCounts {
            cipher,
            hash_csv,
            hash_lv,
            padding,
            kdf,
            rsa,
            encoding,
        },
    )
}

/// A single cipher invocation with key and IV of the right widths.
#[derive(Debug, Clone)]
pub struct CipherCaseParams {
    pub algorithm: CipherAlgorithm,
    pub key: Vec<u8>,
    pub iv: Vec<u8>,
    /// Whole blocks, so every algorithm accepts it.
    pub data: Vec<u8>,
}

impl Arbitrary for CipherCaseParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        cipher_algorithm()
            .prop_flat_map(|algorithm| {
                let cipher = algorithm.cipher();
                (
                    Just(algorithm),
                    prop::collection::vec(any::<u8>(), cipher.key_len()),
                    prop::collection::vec(any::<u8>(), cipher.iv_len()),
                    blocks(8),
                )
            })
            .prop_map(|(algorithm, key, iv, data)| CipherCaseParams {
                algorithm,
                key,
                iv,
                data,
            })
            .boxed()
    }
}

/// Generate a dataset with one column per encoding and up to `max_cases`
/// cases. Text columns hold printable ASCII so every encoding accepts them.
pub fn dataset(max_cases: usize) -> impl Strategy<Value = Dataset> {
    let case = (bytes(48), bytes(48), "[ -~]{0,24}");
    prop::collection::vec(case, 0..=max_cases).prop_map(|rows| {
        let schema = Schema::new()
            .input("Data", TextEncoding::Base64)
            .input("Text", TextEncoding::Utf8)
            .output("Digest", TextEncoding::Hex);
        let mut dataset = Dataset::new("prop", schema);
        for (data, digest, text) in rows {
            let case = Case::new(vec![
                Bytes::from(data),
                Bytes::from(text),
                Bytes::from(digest),
            ]);
            dataset.push(case).expect("arity matches schema");
        }
        dataset
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use goldvec_emit::{emit_dataset, read_dataset, MemorySink};

    proptest! {
        #[test]
        fn test_cipher_roundtrip(params: CipherCaseParams) {
            let cipher = params.algorithm.cipher();
            let encrypted = cipher.encrypt(&params.key, &params.iv, &params.data).unwrap();
            prop_assert_eq!(encrypted.len(), params.data.len());

            let decrypted = cipher.decrypt(&params.key, &params.iv, &encrypted).unwrap();
            prop_assert_eq!(decrypted, params.data);
        }

        #[test]
        fn test_padding_roundtrip(scheme in padding_scheme(), data in bytes(100)) {
            let padded = scheme.pad(&data, &mut rand::thread_rng()).unwrap();
            prop_assert_eq!(padded.len(), (data.len() / 16 + 1) * 16);
            prop_assert_eq!(scheme.unpad(&padded).unwrap(), data);
        }

        #[test]
        fn test_digest_length_is_fixed(algorithm in hash_algorithm(), data in bytes(200)) {
            prop_assert_eq!(algorithm.digest(&data).len(), algorithm.output_len());
        }

        #[test]
        fn test_dataset_survives_every_format(dataset in dataset(12), format in output_format()) {
            let sink = MemorySink::new();
            emit_dataset(&dataset, format, &sink).unwrap();
            let back = read_dataset("prop", dataset.schema(), format, &sink).unwrap();
            prop_assert_eq!(back, dataset);
        }

        #[test]
        fn test_category_names_parse(category in category()) {
            prop_assert_eq!(category.name().parse::<Category>().unwrap(), category);
        }
    }
}
