//! The run manifest, `manifest.json`.

use goldvec_emit::{Artifact, OutputFormat};
use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::error::Result;

/// File name of the manifest inside the output directory.
pub const MANIFEST_FILE: &str = "manifest.json";

/// Everything a run wrote.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// `goldvec <version>` of the writer.
    pub generator: String,
    /// Seed of a repeatable run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(default)]
    pub datasets: Vec<DatasetEntry>,
    #[serde(default)]
    pub keys: Vec<KeyEntry>,
}

/// One dataset written in one format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetEntry {
    pub name: String,
    pub category: Category,
    pub format: OutputFormat,
    pub cases: usize,
    /// PBKDF2 iteration count, for `pbkdf2` only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iterations: Option<u32>,
    /// Dataset files, in [`OutputFormat::file_names`] order.
    pub files: Vec<Artifact>,
    /// Digest sidecars, for LV hash datasets only.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sidecars: Vec<Artifact>,
}

/// One provisioned RSA keypair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEntry {
    pub index: usize,
    pub bits: usize,
    pub encrypted: bool,
    pub public: Artifact,
    pub private: Artifact,
}

impl Manifest {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            generator: format!("goldvec {}", env!("CARGO_PKG_VERSION")),
            seed,
            datasets: Vec::new(),
            keys: Vec::new(),
        }
    }

    /// Pretty-printed JSON with a trailing newline.
    pub fn to_json(&self) -> Result<Vec<u8>> {
        let mut bytes = serde_json::to_vec_pretty(self)?;
        bytes.push(b'\n');
        Ok(bytes)
    }

    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Every artifact the manifest references.
    pub fn artifacts(&self) -> impl Iterator<Item = &Artifact> {
        let datasets = self
            .datasets
            .iter()
            .flat_map(|d| d.files.iter().chain(d.sidecars.iter()));
        let keys = self.keys.iter().flat_map(|k| [&k.public, &k.private]);
        datasets.chain(keys)
    }

    pub fn dataset(&self, name: &str, format: OutputFormat) -> Option<&DatasetEntry> {
        self.datasets
            .iter()
            .find(|d| d.name == name && d.format == format)
    }

    pub fn key(&self, index: usize) -> Option<&KeyEntry> {
        self.keys.iter().find(|k| k.index == index)
    }
}
