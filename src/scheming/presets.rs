//! Presets command handler.

use clap::Args;
use scheming_core::SchemingSchema;

use super::load_schema;
use crate::CommonArgs;

/// Presets command arguments.
#[derive(Args, Clone, Debug)]
pub struct PresetsArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

/// Distinct presets of dataset and resource fields (subfields included), sorted.
pub fn list_presets(schema: &SchemingSchema) -> Vec<String> {
    schema.presets().into_iter().collect()
}

/// Run the presets command.
pub fn run_presets(args: PresetsArgs) -> anyhow::Result<()> {
    let schema = load_schema(&args.common.schema)?;
    for preset in list_presets(&schema) {
        println!("{preset}");
    }
    Ok(())
}
