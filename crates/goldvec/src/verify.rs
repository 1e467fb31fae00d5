//! Re-checking a generated output directory.
//!
//! Verification reloads everything listed in `manifest.json` and checks:
//!
//! - each file's size and SHA-256 against the manifest
//! - each dataset parses, with a count header (or row count) equal to the
//!   recorded number of cases
//! - each case is consistent with its primitive: ciphertexts decrypt to the
//!   plaintext, digests and padding recompute, PBKDF2 keys re-derive, RSA
//!   ciphertexts decrypt under the stored private key
//! - hash sidecars agree with the dataset and its data file
//!
//! Problems are collected into a [`Report`] instead of stopping at the first.

use goldvec_core::{Dataset, TextEncoding};
use goldvec_emit::{read_dataset, Artifact, FileSink, Sink};
use goldvec_primitives::{public_key_from_pem, pbkdf2_hmac_sha1, RsaKeyPair};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use tracing::debug;

use crate::category::Family;
use crate::drivers::{self, hash::digest_lines};
use crate::error::{GenError, Result};
use crate::keys;
use crate::manifest::{DatasetEntry, KeyEntry, Manifest, MANIFEST_FILE};

/// One problem found during verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// File, key or dataset the problem concerns.
    pub subject: String,
    pub message: String,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.subject, self.message)
    }
}

/// Outcome of a verification pass.
#[derive(Debug, Clone, Default)]
pub struct Report {
    pub files: usize,
    pub keys: usize,
    pub datasets: usize,
    pub findings: Vec<Finding>,
}

impl Report {
    pub fn is_ok(&self) -> bool {
        self.findings.is_empty()
    }

    fn fail(&mut self, subject: impl Into<String>, message: impl Into<String>) {
        self.findings.push(Finding {
            subject: subject.into(),
            message: message.into(),
        });
    }
}

/// Verify the output directory `dir`.
///
/// `passphrase` unlocks encrypted private keys.
pub fn verify_dir(dir: &Path, passphrase: &str) -> Result<Report> {
    if !dir.is_dir() {
        return Err(GenError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("{} is not a directory", dir.display()),
        )));
    }
    let sink = FileSink::create(dir)?;
    verify_sink(&sink, passphrase)
}

/// Verify everything `manifest.json` in `sink` describes.
pub fn verify_sink<S: Sink + ?Sized>(sink: &S, passphrase: &str) -> Result<Report> {
    let manifest = Manifest::from_json(&sink.get(MANIFEST_FILE)?)?;
    let mut report = Report::default();

    for artifact in manifest.artifacts() {
        report.files += 1;
        if let Err(message) = check_artifact(sink, artifact) {
            report.fail(&artifact.name, message);
        }
    }

    let mut keypairs = BTreeMap::new();
    for key in &manifest.keys {
        report.keys += 1;
        match load_keypair(sink, key, passphrase) {
            Ok(pair) => {
                keypairs.insert(key.index, pair);
            }
            Err(message) => report.fail(keys::private_key_file(key.index), message),
        }
    }

    for entry in &manifest.datasets {
        report.datasets += 1;
        if let Err(message) = check_entry(sink, entry, &keypairs) {
            report.fail(format!("{} ({})", entry.name, entry.format), message);
        }
    }

    debug!(
        files = report.files,
        datasets = report.datasets,
        findings = report.findings.len(),
        "verification finished"
    );
    Ok(report)
}

type Check<T = ()> = std::result::Result<T, String>;

fn check_artifact<S: Sink + ?Sized>(sink: &S, artifact: &Artifact) -> Check {
    let bytes = sink.get(&artifact.name).map_err(|e| e.to_string())?;
    let actual = Artifact::describe(&artifact.name, &bytes);
    if actual.len != artifact.len {
        return Err(format!("size {} differs from manifest {}", actual.len, artifact.len));
    }
    if actual.sha256 != artifact.sha256 {
        return Err("SHA-256 differs from manifest".to_string());
    }
    Ok(())
}

fn load_keypair<S: Sink + ?Sized>(
    sink: &S,
    key: &KeyEntry,
    passphrase: &str,
) -> Check<RsaKeyPair> {
    let text = |name: &str| -> Check<String> {
        let bytes = sink.get(name).map_err(|e| e.to_string())?;
        String::from_utf8(bytes).map_err(|e| e.to_string())
    };

    let public = public_key_from_pem(&text(&key.public.name)?).map_err(|e| e.to_string())?;
    let unlock = key.encrypted.then_some(passphrase.as_bytes());
    let pair = RsaKeyPair::from_private_key_pem(&text(&key.private.name)?, unlock)
        .map_err(|e| e.to_string())?;

    if pair.public_key() != &public {
        return Err(format!(
            "private key does not match {}",
            keys::public_key_file(key.index)
        ));
    }
    if pair.bits() != key.bits {
        return Err(format!("{}-bit key, manifest says {}", pair.bits(), key.bits));
    }
    Ok(pair)
}

fn check_entry<S: Sink + ?Sized>(
    sink: &S,
    entry: &DatasetEntry,
    keypairs: &BTreeMap<usize, RsaKeyPair>,
) -> Check {
    let schema = drivers::schema_for(entry.category);
    let dataset =
        read_dataset(&entry.name, &schema, entry.format, sink).map_err(|e| e.to_string())?;
    if dataset.len() != entry.cases {
        return Err(format!(
            "{} cases on disk, manifest says {}",
            dataset.len(),
            entry.cases
        ));
    }
    check_cases(entry, &dataset, keypairs)?;
    if !entry.sidecars.is_empty() {
        check_sidecars(sink, entry, &dataset)?;
    }
    Ok(())
}

fn mismatch(case: usize, what: &str) -> String {
    format!("case {}: {what}", case + 1)
}

fn check_cases(
    entry: &DatasetEntry,
    dataset: &Dataset,
    keypairs: &BTreeMap<usize, RsaKeyPair>,
) -> Check {
    let cases = dataset.cases().iter().map(|c| c.values()).enumerate();

    match entry.category.family() {
        Family::Cipher(algorithm) => {
            let cipher = algorithm.cipher();
            for (i, v) in cases {
                let plain = cipher
                    .decrypt(&v[0], &v[1], &v[3])
                    .map_err(|e| mismatch(i, &e.to_string()))?;
                if plain != v[2] {
                    return Err(mismatch(i, "ciphertext does not decrypt to the data"));
                }
            }
        }
        Family::Hash(algorithm) => {
            for (i, v) in cases {
                if algorithm.digest(&v[0]) != v[1] {
                    return Err(mismatch(i, "digest does not match the data"));
                }
            }
        }
        Family::Padding(scheme) => {
            for (i, v) in cases {
                let unpadded = scheme.unpad(&v[1]).map_err(|e| mismatch(i, &e.to_string()))?;
                if unpadded != v[0] {
                    return Err(mismatch(i, "padding does not strip back to the data"));
                }
            }
        }
        Family::Kdf => {
            let iterations = entry
                .iterations
                .ok_or_else(|| "manifest lacks the PBKDF2 iteration count".to_string())?;
            for (i, v) in cases {
                let key = pbkdf2_hmac_sha1(&v[0], &v[1], iterations, v[2].len())
                    .map_err(|e| mismatch(i, &e.to_string()))?;
                if key != v[2] {
                    return Err(mismatch(i, "key does not re-derive"));
                }
            }
        }
        Family::Rsa => {
            let index = entry
                .name
                .strip_prefix("rsa")
                .and_then(|n| n.parse::<usize>().ok())
                .ok_or_else(|| format!("no keypair for dataset {}", entry.name))?;
            let pair = keypairs
                .get(&index)
                .ok_or_else(|| format!("keypair {index} could not be loaded"))?;
            for (i, v) in cases {
                let plain = pair
                    .oaep_decrypt(&v[1])
                    .map_err(|e| mismatch(i, &e.to_string()))?;
                if plain != v[0] {
                    return Err(mismatch(i, "ciphertext does not decrypt to the data"));
                }
            }
        }
        Family::Encoding => {
            for (i, v) in cases {
                let decoded = std::str::from_utf8(&v[1])
                    .map_err(|e| e.to_string())
                    .and_then(|text| TextEncoding::Base64.decode(text))
                    .map_err(|e| mismatch(i, &e))?;
                if decoded != v[0] {
                    return Err(mismatch(i, "base64 text does not decode to the data"));
                }
            }
        }
    }
    Ok(())
}

fn check_sidecars<S: Sink + ?Sized>(sink: &S, entry: &DatasetEntry, dataset: &Dataset) -> Check {
    let Family::Hash(algorithm) = entry.category.family() else {
        return Err("sidecars recorded for a non-hash dataset".to_string());
    };
    let get = |name: &str| sink.get(name).map_err(|e| e.to_string());

    let lines_file = format!("{}.txt", entry.name);
    if get(&lines_file)? != digest_lines(dataset) {
        return Err(format!("{lines_file} does not list the dataset digests"));
    }

    let data_file = entry.format.data_file(&entry.name);
    let expected = hex::encode(algorithm.digest(&get(&data_file)?)).into_bytes();
    if get(&format!("{data_file}.txt"))? != expected {
        return Err(format!("{data_file}.txt does not hold the digest of {data_file}"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;
    use crate::config::{CaseCounts, GeneratorConfig};
    use crate::generator::{generate, Generator};
    use goldvec_core::EntropySource;
    use goldvec_emit::{MemorySink, OutputFormat};

    fn small_cases() -> CaseCounts {
        CaseCounts {
            cipher: 3,
            hash_csv: 4,
            hash_lv: 4,
            padding: 5,
            kdf: 2,
            rsa: 2,
            encoding: 5,
        }
    }

    fn generated(categories: &[Category]) -> MemorySink {
        let config = GeneratorConfig::default()
            .with_categories(categories.to_vec())
            .with_formats(OutputFormat::ALL)
            .with_cases(small_cases())
            .with_pbkdf2_iterations(10)
            .with_rsa_bits(1024);
        let mut generator =
            Generator::new(config, MemorySink::new(), EntropySource::seeded(21)).unwrap();
        generator.run().unwrap();
        generator.into_sink()
    }

    #[test]
    fn test_fresh_output_verifies() {
        let sink = generated(&Category::ALL);
        let report = verify_sink(&sink, "test1234").unwrap();
        assert!(report.is_ok(), "{:?}", report.findings);
        assert_eq!(report.keys, 2);
        assert!(report.datasets > Category::ALL.len());
    }

    #[test]
    fn test_tampered_file_detected() {
        let sink = generated(&[Category::Aes]);
        let mut bytes = sink.get("aes_enc.dat").unwrap();
        let last = bytes.len() - 1;
        bytes[last] ^= 1;
        sink.put("aes_enc.dat", &bytes).unwrap();

        let report = verify_sink(&sink, "test1234").unwrap();
        let subjects: Vec<_> = report.findings.iter().map(|f| f.subject.as_str()).collect();
        assert!(subjects.contains(&"aes_enc.dat"));
        assert!(subjects.contains(&"aes (lv-split)"));
    }

    #[test]
    fn test_wrong_passphrase_reported() {
        let sink = generated(&[Category::Rsa]);
        let report = verify_sink(&sink, "not-it").unwrap();
        assert!(!report.is_ok());
        assert!(report
            .findings
            .iter()
            .any(|f| f.subject == "pk_key1.pem"));
        // Key 2 is unencrypted and its datasets still verify.
        assert!(!report.findings.iter().any(|f| f.subject.starts_with("rsa2")));
    }

    #[test]
    fn test_verify_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = GeneratorConfig::new(dir.path())
            .with_categories([Category::Sha256, Category::Pbkdf2])
            .with_cases(small_cases())
            .with_pbkdf2_iterations(10);
        generate(&config).unwrap();

        let report = verify_dir(dir.path(), "test1234").unwrap();
        assert!(report.is_ok(), "{:?}", report.findings);
        assert!(verify_dir(&dir.path().join("missing"), "x").is_err());
    }
}
