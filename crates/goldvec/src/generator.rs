//! Run orchestration.
//!
//! The [`Generator`] walks the configured categories in order, builds each
//! dataset in memory through its driver, and hands the finished dataset to
//! the emitter once per output format. Every written file is recorded in
//! the [`Manifest`], which is written last.

use goldvec_core::{Dataset, EntropySource, RandomSource};
use goldvec_emit::{emit_dataset, Artifact, FileSink, OutputFormat, Sink};
use goldvec_primitives::HashAlgorithm;
use tracing::{info, warn};

use crate::category::{Category, Family};
use crate::config::GeneratorConfig;
use crate::drivers::cipher::CipherParams;
use crate::drivers::hash::HashParams;
use crate::drivers::kdf::Pbkdf2Params;
use crate::drivers::padding::PaddingParams;
use crate::drivers::{self, SizeRange};
use crate::error::Result;
use crate::keys::{self, ProvisionedKey};
use crate::manifest::{DatasetEntry, KeyEntry, Manifest, MANIFEST_FILE};

/// Generates every configured dataset into a sink.
pub struct Generator<S: Sink, R: RandomSource> {
    config: GeneratorConfig,
    sink: S,
    rng: R,
    manifest: Manifest,
    done: Vec<Category>,
}

impl<S: Sink, R: RandomSource> Generator<S, R> {
    /// Validate `config` and prepare a run.
    pub fn new(config: GeneratorConfig, sink: S, rng: R) -> Result<Self> {
        config.validate()?;
        let manifest = Manifest::new(config.seed);
        Ok(Self {
            config,
            sink,
            rng,
            manifest,
            done: Vec::new(),
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Everything written so far.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Generate every configured category, then write `manifest.json`.
    pub fn run(&mut self) -> Result<Manifest> {
        let categories = self.config.categories.clone();
        for category in categories {
            self.run_category(category)?;
        }

        let json = self.manifest.to_json()?;
        self.sink.put(MANIFEST_FILE, &json)?;
        info!(
            datasets = self.manifest.datasets.len(),
            keys = self.manifest.keys.len(),
            "run complete"
        );
        Ok(self.manifest.clone())
    }

    /// Generate and emit the datasets of one category.
    ///
    /// A category already generated by this run is skipped.
    pub fn run_category(&mut self, category: Category) -> Result<()> {
        if self.done.contains(&category) {
            warn!(category = %category, "category selected twice, skipping");
            return Ok(());
        }
        self.generate_category(category)
            .map_err(|e| e.in_dataset(category.name()))?;
        self.done.push(category);
        Ok(())
    }

    fn generate_category(&mut self, category: Category) -> Result<()> {
        let name = category.name();
        let cases = self.config.cases;
        let formats = self.config.formats.clone();

        match category.family() {
            Family::Cipher(algorithm) => {
                let params = CipherParams {
                    algorithm,
                    cases: cases.cipher,
                };
                let dataset = drivers::cipher::generate(name, &params, &mut self.rng)?;
                self.emit_formats(category, &dataset, &formats, None)
            }
            Family::Hash(algorithm) => self.generate_hash(category, algorithm, &formats),
            Family::Padding(scheme) => {
                let params = PaddingParams {
                    scheme,
                    sizes: SizeRange::from_one(cases.padding),
                };
                let dataset = drivers::padding::generate(name, &params, &mut self.rng)?;
                self.emit_formats(category, &dataset, &formats, None)
            }
            Family::Kdf => {
                let iterations = self.config.pbkdf2_iterations;
                let params = Pbkdf2Params::new(cases.kdf, iterations);
                let dataset = drivers::kdf::generate(name, &params, &mut self.rng)?;
                self.emit_formats(category, &dataset, &formats, Some(iterations))
            }
            Family::Rsa => self.generate_rsa(&formats),
            Family::Encoding => {
                let sizes = SizeRange::from_one(cases.encoding);
                let dataset = drivers::encoding::generate(name, sizes, &mut self.rng)?;
                self.emit_formats(category, &dataset, &formats, None)
            }
        }
    }

    /// Hash datasets use different size ranges for CSV and LV output, so
    /// each gets its own dataset; LV outputs also get digest sidecars.
    fn generate_hash(
        &mut self,
        category: Category,
        algorithm: HashAlgorithm,
        formats: &[OutputFormat],
    ) -> Result<()> {
        let name = category.name();
        let (lv, csv): (Vec<OutputFormat>, Vec<OutputFormat>) =
            formats.iter().copied().partition(|f| f.is_lv());

        if !csv.is_empty() {
            let params = HashParams {
                algorithm,
                sizes: SizeRange::from_one(self.config.cases.hash_csv),
            };
            let dataset = drivers::hash::generate(name, &params, &mut self.rng)?;
            self.emit_formats(category, &dataset, &csv, None)?;
        }

        if !lv.is_empty() {
            let params = HashParams {
                algorithm,
                sizes: SizeRange::from_zero(self.config.cases.hash_lv),
            };
            let dataset = drivers::hash::generate(name, &params, &mut self.rng)?;
            let lines = drivers::hash::digest_lines(&dataset);
            for format in lv {
                let mut entry = self.emit(category, &dataset, format, None)?;
                entry.sidecars = self.write_sidecars(name, algorithm, format, &lines)?;
                self.manifest.datasets.push(entry);
            }
        }
        Ok(())
    }

    /// `<name>.txt` with one digest per line, and `<data file>.txt` with
    /// the digest of the data file itself.
    fn write_sidecars(
        &self,
        name: &str,
        algorithm: HashAlgorithm,
        format: OutputFormat,
        lines: &[u8],
    ) -> Result<Vec<Artifact>> {
        let data_file = format.data_file(name);
        let file_digest = hex::encode(algorithm.digest(&self.sink.get(&data_file)?));
        let lines_file = format!("{name}.txt");
        let digest_file = format!("{data_file}.txt");
        self.warn_if_present(&lines_file);
        self.warn_if_present(&digest_file);
        Ok(vec![
            self.sink.put(&lines_file, lines)?,
            self.sink.put(&digest_file, file_digest.as_bytes())?,
        ])
    }

    fn generate_rsa(&mut self, formats: &[OutputFormat]) -> Result<()> {
        let provisioned = keys::provision(&self.config.rsa, &mut self.rng)?;
        for key in &provisioned {
            self.write_key(key)?;

            let name = keys::dataset_name(key.index);
            let dataset = drivers::oaep::generate(
                &name,
                key.pair.public_key(),
                self.config.cases.rsa,
                &mut self.rng,
            )
            .map_err(|e| e.in_dataset(name.as_str()))?;
            self.emit_formats(Category::Rsa, &dataset, formats, None)
                .map_err(|e| e.in_dataset(name.as_str()))?;
        }
        Ok(())
    }

    fn write_key(&mut self, key: &ProvisionedKey) -> Result<()> {
        let public_file = keys::public_key_file(key.index);
        let private_file = keys::private_key_file(key.index);
        self.warn_if_present(&public_file);
        self.warn_if_present(&private_file);

        let public = self.sink.put(&public_file, key.public_pem.as_bytes())?;
        let private = self.sink.put(&private_file, key.private_pem.as_bytes())?;
        info!(
            index = key.index,
            encrypted = key.is_protected(),
            "wrote RSA keypair"
        );
        self.manifest.keys.push(KeyEntry {
            index: key.index,
            bits: key.pair.bits(),
            encrypted: key.is_protected(),
            public,
            private,
        });
        Ok(())
    }

    fn emit_formats(
        &mut self,
        category: Category,
        dataset: &Dataset,
        formats: &[OutputFormat],
        iterations: Option<u32>,
    ) -> Result<()> {
        for &format in formats {
            let entry = self.emit(category, dataset, format, iterations)?;
            self.manifest.datasets.push(entry);
        }
        Ok(())
    }

    fn emit(
        &self,
        category: Category,
        dataset: &Dataset,
        format: OutputFormat,
        iterations: Option<u32>,
    ) -> Result<DatasetEntry> {
        for file in format.file_names(dataset.name()) {
            self.warn_if_present(&file);
        }
        let files = emit_dataset(dataset, format, &self.sink)?;
        info!(
            dataset = dataset.name(),
            format = %format,
            cases = dataset.len(),
            files = ?files.iter().map(|a| a.name.as_str()).collect::<Vec<_>>(),
            "wrote dataset"
        );
        Ok(DatasetEntry {
            name: dataset.name().to_string(),
            category,
            format,
            cases: dataset.len(),
            iterations,
            files,
            sidecars: Vec::new(),
        })
    }

    fn warn_if_present(&self, file: &str) {
        if self.sink.contains(file) {
            warn!(file, "replacing existing artifact");
        }
    }
}

/// Run `config` against its output directory with the configured entropy.
pub fn generate(config: &GeneratorConfig) -> Result<Manifest> {
    let sink = FileSink::create(&config.output_dir)?;
    let rng = EntropySource::from_seed(config.seed);
    if rng.is_seeded() {
        warn!("seeded run: output is repeatable, do not reuse its keys");
    }
    info!(dir = %config.output_dir.display(), "generating datasets");
    Generator::new(config.clone(), sink, rng)?.run()
}
