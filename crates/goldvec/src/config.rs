//! Generator configuration.

use goldvec_emit::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::category::Category;
use crate::error::{GenError, Result};

/// Generator configuration.
///
/// Every field has a default, so a JSON config file only needs the keys it
/// changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Directory every artifact is written to.
    pub output_dir: PathBuf,
    /// Formats each dataset is written in.
    pub formats: Vec<OutputFormat>,
    /// Categories to generate, in run order.
    pub categories: Vec<Category>,
    /// Case counts per driver family.
    pub cases: CaseCounts,
    /// PBKDF2 iteration count for the `pbkdf2` dataset.
    pub pbkdf2_iterations: u32,
    /// RSA key provisioning.
    pub rsa: RsaConfig,
    /// Seed for a repeatable run. OS entropy when unset.
    pub seed: Option<u64>,
}

/// Number of cases (size indices) each driver family generates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaseCounts {
    /// Cipher cases; plaintext lengths are `i*16` for i in 1..=cipher.
    pub cipher: usize,
    /// CSV hash cases; input lengths 1..=hash_csv.
    pub hash_csv: usize,
    /// LV hash cases; input lengths 0..hash_lv.
    pub hash_lv: usize,
    /// Padding cases; input lengths 1..=padding.
    pub padding: usize,
    /// PBKDF2 cases.
    pub kdf: usize,
    /// OAEP cases per keypair; plaintext lengths `i*16` for i in 1..=rsa.
    pub rsa: usize,
    /// Hex/base64 cases; input lengths 1..=encoding.
    pub encoding: usize,
}

impl Default for CaseCounts {
    fn default() -> Self {
        Self {
            cipher: 100,
            hash_csv: 500,
            hash_lv: 100,
            padding: 500,
            kdf: 100,
            rsa: 10,
            encoding: 1000,
        }
    }
}

/// RSA key provisioning configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RsaConfig {
    /// Modulus size in bits.
    pub bits: usize,
    /// Passphrase protecting `pk_key1.pem`.
    pub passphrase: String,
    /// PBKDF2 iteration count of the PBES2 key encryption.
    pub key_iterations: u32,
}

impl Default for RsaConfig {
    fn default() -> Self {
        Self {
            bits: 2048,
            passphrase: "test1234".to_string(),
            key_iterations: 2048,
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("./data"),
            formats: vec![OutputFormat::Csv, OutputFormat::LvSplit],
            categories: Category::ALL.to_vec(),
            cases: CaseCounts::default(),
            pbkdf2_iterations: 50_000,
            rsa: RsaConfig::default(),
            seed: None,
        }
    }
}

/// OAEP-SHA1 overhead in bytes: two hash lengths plus two.
const OAEP_OVERHEAD: usize = 42;

impl GeneratorConfig {
    /// Creates a configuration writing to `output_dir` with every other
    /// setting at its default.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }

    /// Loads a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Sets the output directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Sets the output formats.
    pub fn with_formats(mut self, formats: impl Into<Vec<OutputFormat>>) -> Self {
        self.formats = formats.into();
        self
    }

    /// Restricts the run to `categories`.
    pub fn with_categories(mut self, categories: impl Into<Vec<Category>>) -> Self {
        self.categories = categories.into();
        self
    }

    /// Sets the case counts.
    pub fn with_cases(mut self, cases: CaseCounts) -> Self {
        self.cases = cases;
        self
    }

    /// Sets the PBKDF2 iteration count.
    pub fn with_pbkdf2_iterations(mut self, iterations: u32) -> Self {
        self.pbkdf2_iterations = iterations;
        self
    }

    /// Sets the RSA modulus size.
    pub fn with_rsa_bits(mut self, bits: usize) -> Self {
        self.rsa.bits = bits;
        self
    }

    /// Sets the private key passphrase.
    pub fn with_passphrase(mut self, passphrase: impl Into<String>) -> Self {
        self.rsa.passphrase = passphrase.into();
        self
    }

    /// Makes the run repeatable.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks the configuration can produce every selected dataset.
    pub fn validate(&self) -> Result<()> {
        if self.formats.is_empty() {
            return Err(GenError::Config("no output format selected".to_string()));
        }
        if self.categories.is_empty() {
            return Err(GenError::Config("no category selected".to_string()));
        }
        if self.pbkdf2_iterations == 0 {
            return Err(GenError::Config(
                "pbkdf2_iterations must be at least 1".to_string(),
            ));
        }
        if self.categories.contains(&Category::Rsa) {
            if self.rsa.bits < 1024 || self.rsa.bits % 8 != 0 {
                return Err(GenError::Config(format!(
                    "rsa.bits must be a multiple of 8 and at least 1024, got {}",
                    self.rsa.bits
                )));
            }
            let room = self.rsa.bits / 8 - OAEP_OVERHEAD;
            let largest = self.cases.rsa * 16;
            if largest > room {
                return Err(GenError::Config(format!(
                    "{}-bit keys fit OAEP messages up to {room} bytes, but rsa cases need {largest}",
                    self.rsa.bits
                )));
            }
            if self.rsa.passphrase.is_empty() {
                return Err(GenError::Config("rsa.passphrase is empty".to_string()));
            }
            if self.rsa.key_iterations == 0 {
                return Err(GenError::Config(
                    "rsa.key_iterations must be at least 1".to_string(),
                ));
            }
        }
        Ok(())
    }
}
