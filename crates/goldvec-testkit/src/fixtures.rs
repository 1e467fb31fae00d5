//! Test fixtures and helpers.
//!
//! Common setup code for integration tests: a temporary output directory, a
//! seeded configuration sized for fast runs, and readers for what a run
//! leaves on disk.

use std::path::{Path, PathBuf};

use goldvec::drivers::schema_for;
use goldvec::{generate, CaseCounts, Category, Generator, GeneratorConfig, Manifest, Result};
use goldvec_core::{Dataset, EntropySource};
use goldvec_emit::{read_dataset, FileSink, MemorySink, OutputFormat};
use tempfile::TempDir;

/// Seed used by [`TestFixture::new`].
pub const DEFAULT_SEED: u64 = 42;

/// Case counts small enough that a run over every category takes well
/// under a second.
pub fn small_case_counts() -> CaseCounts {
    CaseCounts {
        cipher: 4,
        hash_csv: 5,
        hash_lv: 5,
        padding: 18,
        kdf: 2,
        rsa: 2,
        encoding: 6,
    }
}

/// A seeded configuration for fast runs: small case counts, 1024-bit RSA
/// keys and a low PBKDF2 iteration count.
pub fn fast_config(output_dir: impl Into<PathBuf>, seed: u64) -> GeneratorConfig {
    let mut config = GeneratorConfig::new(output_dir)
        .with_cases(small_case_counts())
        .with_pbkdf2_iterations(16)
        .with_rsa_bits(1024)
        .with_seed(seed);
    config.rsa.key_iterations = 16;
    config
}

/// An in-memory generator over `config`, seeded from `config.seed`.
pub fn memory_generator(config: GeneratorConfig) -> Result<Generator<MemorySink, EntropySource>> {
    let rng = EntropySource::from_seed(config.seed);
    Generator::new(config, MemorySink::new(), rng)
}

/// A temporary output directory with a fast configuration pointing at it.
pub struct TestFixture {
    pub dir: TempDir,
    pub config: GeneratorConfig,
}

impl TestFixture {
    /// Create a fixture seeded with [`DEFAULT_SEED`].
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }

    pub fn with_seed(seed: u64) -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let config = fast_config(dir.path(), seed);
        Self { dir, config }
    }

    pub fn with_categories(mut self, categories: impl Into<Vec<Category>>) -> Self {
        self.config = self.config.with_categories(categories);
        self
    }

    pub fn with_formats(mut self, formats: impl Into<Vec<OutputFormat>>) -> Self {
        self.config = self.config.with_formats(formats);
        self
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Generate into the fixture directory.
    pub fn run(&self) -> Result<Manifest> {
        generate(&self.config)
    }

    /// Raw bytes of an output file.
    pub fn read(&self, name: &str) -> std::io::Result<Vec<u8>> {
        std::fs::read(self.dir.path().join(name))
    }

    /// Load a dataset back from the fixture directory.
    pub fn dataset(&self, name: &str, category: Category, format: OutputFormat) -> Result<Dataset> {
        let sink = FileSink::create(self.dir.path())?;
        Ok(read_dataset(name, &schema_for(category), format, &sink)?)
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Create fixtures with distinct seeds, one per directory.
pub fn seeded_fixtures(count: usize) -> Vec<TestFixture> {
    (0..count as u64)
        .map(|i| TestFixture::with_seed(DEFAULT_SEED + i))
        .collect()
}
