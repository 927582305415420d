//! Schema command handlers.
//!
//! This module contains handlers for the populate, presets, fields and check
//! commands.

pub mod check;
pub mod fields;
pub mod populate;
pub mod presets;

use anyhow::Context;
use dataset_generator::{DataPopulation, RandomWords, StrategyTable, SyllableWords, WordListFile};
use scheming_core::SchemingSchema;
use std::path::Path;

use crate::config::FileConfig;
use crate::{TestOpts, WordOpts};

/// Load a scheming schema file.
pub fn load_schema(path: &Path) -> anyhow::Result<SchemingSchema> {
    let schema = SchemingSchema::from_file(path)
        .with_context(|| format!("Failed to load schema from {path:?}"))?;
    tracing::info!(
        "Loaded schema {:?}: {} dataset fields, {} resource fields",
        schema.dataset_type.as_deref().unwrap_or("(untyped)"),
        schema.dataset_fields.len(),
        schema.resource_fields.len()
    );
    Ok(schema)
}

/// Build a populator from command-line options and the config file.
///
/// Filler words come from the configured word list, or from seeded
/// pseudo-words when there is none.
pub fn build_populator(
    test: &TestOpts,
    words: &WordOpts,
    config: &FileConfig,
    seed: u64,
) -> anyhow::Result<DataPopulation> {
    let values = test.resolve(config);
    let batch_size = words.batch_size(config);

    let cache = match words.word_list(config) {
        Some(path) => {
            let source = WordListFile::open(&path, seed)
                .with_context(|| format!("Failed to load word list from {path:?}"))?;
            tracing::info!("Using {} words from {:?}", source.len(), path);
            RandomWords::new(source, batch_size)
        }
        None => RandomWords::new(SyllableWords::new(seed), batch_size),
    };

    tracing::debug!("Test values: {:?}", values);
    Ok(DataPopulation::new(values, cache, seed))
}

/// Presets of both dataset and resource fields without a strategy, sorted.
pub fn unsupported_presets(strategies: &StrategyTable, schema: &SchemingSchema) -> Vec<String> {
    schema
        .presets()
        .into_iter()
        .filter(|preset| !strategies.contains(preset))
        .collect()
}
