//! `goldvec` command line.
//!
//! Generates golden test-vector datasets, lists the available categories, and
//! re-verifies a previously generated output directory.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use goldvec::{generate, verify_dir, Category, GeneratorConfig, OutputFormat};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Golden test-vector generator.
#[derive(Parser)]
#[command(name = "goldvec", version)]
#[command(about = "Golden test-vector generator for cryptographic toolkits", long_about = None)]
struct Cli {
    /// Log at debug level.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate datasets, keys and the manifest.
    Generate {
        /// Output directory.
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Output format (lv-split, lv-combined, csv). Repeatable.
        #[arg(short, long, value_delimiter = ',')]
        format: Vec<OutputFormat>,

        /// Categories to generate. Defaults to all of them.
        #[arg(long, value_delimiter = ',', num_args = 1..)]
        only: Vec<Category>,

        /// Seed for a repeatable run.
        #[arg(long)]
        seed: Option<u64>,

        /// JSON configuration file; flags override its values.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// PBKDF2 iteration count.
        #[arg(long)]
        iterations: Option<u32>,

        /// RSA modulus size in bits.
        #[arg(long)]
        rsa_bits: Option<usize>,

        /// Passphrase for pk_key1.pem.
        #[arg(long)]
        passphrase: Option<String>,
    },

    /// List the dataset categories.
    List,

    /// Re-check a generated output directory against its manifest.
    Verify {
        /// Output directory to check.
        #[arg(short, long, default_value = "./data")]
        dir: PathBuf,

        /// Passphrase for pk_key1.pem.
        #[arg(long, default_value = "test1234")]
        passphrase: String,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "goldvec=debug,goldvec_emit=debug"
    } else {
        "goldvec=info"
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Generate {
            out,
            format,
            only,
            seed,
            config,
            iterations,
            rsa_bits,
            passphrase,
        } => {
            let mut config = match config {
                Some(path) => GeneratorConfig::from_json_file(&path)
                    .with_context(|| format!("Failed to load config {}", path.display()))?,
                None => GeneratorConfig::default(),
            };
            if let Some(out) = out {
                config = config.with_output_dir(out);
            }
            if !format.is_empty() {
                config = config.with_formats(format);
            }
            if !only.is_empty() {
                config = config.with_categories(only);
            }
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }
            if let Some(iterations) = iterations {
                config = config.with_pbkdf2_iterations(iterations);
            }
            if let Some(bits) = rsa_bits {
                config = config.with_rsa_bits(bits);
            }
            if let Some(passphrase) = passphrase {
                config = config.with_passphrase(passphrase);
            }

            let manifest = generate(&config).with_context(|| {
                format!("Failed to generate into {}", config.output_dir.display())
            })?;
            println!(
                "Wrote {} datasets, {} keys and {} files to {}",
                manifest.datasets.len(),
                manifest.keys.len(),
                manifest.artifacts().count(),
                config.output_dir.display()
            );
        }

        Commands::List => {
            for category in Category::ALL {
                println!("{:<12} {}", category.name(), category.description());
            }
        }

        Commands::Verify { dir, passphrase } => {
            let report = verify_dir(&dir, &passphrase)
                .with_context(|| format!("Failed to verify {}", dir.display()))?;
            for finding in &report.findings {
                println!("FAIL {finding}");
            }
            if !report.is_ok() {
                bail!(
                    "{} problem(s) found in {}",
                    report.findings.len(),
                    dir.display()
                );
            }
            println!(
                "OK: {} files, {} keys, {} datasets",
                report.files, report.keys, report.datasets
            );
        }
    }

    Ok(())
}
