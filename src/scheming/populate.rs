//! Populate command handler.

use anyhow::Context;
use clap::Args;
use dataset_generator::{DataPopulation, GeneratedRecord};
use scheming_core::SchemingSchema;
use serde::Serialize;
use std::path::PathBuf;

use super::{build_populator, load_schema, unsupported_presets};
use crate::{CommonArgs, TestOpts, WordOpts};

/// Populate command arguments.
#[derive(Args, Clone, Debug)]
pub struct PopulateArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Random seed for deterministic generation (same seed = same data)
    #[arg(long, default_value = "42")]
    pub seed: u64,

    /// Number of resources to generate for the dataset
    #[arg(long, default_value = "1")]
    pub resources: usize,

    /// Write the payload to this file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Print the payload on a single line
    #[arg(long)]
    pub compact: bool,

    #[command(flatten)]
    pub test: TestOpts,

    #[command(flatten)]
    pub words: WordOpts,
}

/// One generated dataset with its resources.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PackagePayload {
    pub dataset: GeneratedRecord,
    pub resources: Vec<GeneratedRecord>,
}

/// Populate the dataset fields once and the resource fields `resources` times.
pub fn populate_package(
    populator: &mut DataPopulation,
    schema: &SchemingSchema,
    resources: usize,
) -> anyhow::Result<PackagePayload> {
    let dataset = populator
        .populate(&schema.dataset_fields)
        .context("Failed to populate dataset fields")?;

    let resources = (0..resources)
        .map(|idx| {
            populator
                .populate(&schema.resource_fields)
                .with_context(|| format!("Failed to populate resource {idx}"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(PackagePayload { dataset, resources })
}

/// Run the populate command.
pub fn run_populate(args: PopulateArgs) -> anyhow::Result<()> {
    let config = args.common.load_config()?;
    let schema = load_schema(&args.common.schema)?;
    let mut populator = build_populator(&args.test, &args.words, &config, args.seed)?;

    for preset in unsupported_presets(populator.strategies(), &schema) {
        tracing::warn!("Preset '{}' has no generation strategy", preset);
    }

    tracing::info!(
        "Populating 1 dataset and {} resources (seed={})",
        args.resources,
        args.seed
    );
    let payload = populate_package(&mut populator, &schema, args.resources)?;

    let rendered = if args.compact {
        serde_json::to_string(&payload)?
    } else {
        serde_json::to_string_pretty(&payload)?
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, format!("{rendered}\n"))
                .with_context(|| format!("Failed to write payload to {path:?}"))?;
            tracing::info!("Payload written to {:?}", path);
        }
        None => println!("{rendered}"),
    }

    tracing::info!(
        "Population complete ({} word cache refills, {} deferred passes)",
        populator.words().refill_count(),
        populator.deferred_passes()
    );
    Ok(())
}
