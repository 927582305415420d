//! Command-line interface for bcdc-apitests
//!
//! # Usage Examples
//!
//! ## Populate
//! ```bash
//! # Dataset payload with two resources, printed to stdout
//! bcdc-apitests populate --schema bcdc_dataset.json --resources 2
//!
//! # Same data every run, written to a file
//! bcdc-apitests populate --schema bcdc_dataset.json --seed 7 --output payload.json
//!
//! # Test object names for another user and prefix
//! BCDC_TEST_USER=kjnether BCDC_TEST_PREFIX=qa bcdc-apitests populate -s bcdc_dataset.json
//! ```
//!
//! ## Inspect
//! ```bash
//! bcdc-apitests presets --schema bcdc_dataset.json
//! bcdc-apitests fields --schema bcdc_dataset.json --section resource --required
//! bcdc-apitests check --schema bcdc_dataset.json
//! ```
//!
//! ## Configuration
//! Defaults can be kept in a TOML file passed with `--config` (or
//! `BCDC_CONFIG`); see `bcdc_apitests::config`.

use bcdc_apitests::scheming::check::{run_check, CheckArgs};
use bcdc_apitests::scheming::fields::{run_fields, FieldsArgs};
use bcdc_apitests::scheming::populate::{run_populate, PopulateArgs};
use bcdc_apitests::scheming::presets::{run_presets, PresetsArgs};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bcdc-apitests")]
#[command(about = "Generate BC Data Catalogue test datasets from scheming schemas")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a dataset payload (with resources) from the schema
    Populate {
        #[command(flatten)]
        args: PopulateArgs,
    },

    /// List the presets used by the schema
    Presets {
        #[command(flatten)]
        args: PresetsArgs,
    },

    /// List the fields of the schema
    Fields {
        #[command(flatten)]
        args: FieldsArgs,
    },

    /// Fail if the schema uses presets without a generation strategy
    Check {
        #[command(flatten)]
        args: CheckArgs,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Populate { args } => run_populate(args),
        Commands::Presets { args } => run_presets(args),
        Commands::Fields { args } => run_fields(args),
        Commands::Check { args } => run_check(args),
    }
}
