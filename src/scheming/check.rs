//! Check command handler.

use clap::Args;
use dataset_generator::StrategyTable;

use super::{load_schema, unsupported_presets};
use crate::CommonArgs;

/// Check command arguments.
#[derive(Args, Clone, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

/// Run the check command.
///
/// Fails when the schema uses presets the generator has no strategy for.
/// Only the schema is read; test names and word sources play no part.
pub fn run_check(args: CheckArgs) -> anyhow::Result<()> {
    let schema = load_schema(&args.common.schema)?;

    let presets = schema.presets();
    let unsupported = unsupported_presets(&StrategyTable::builtin(), &schema);
    if !unsupported.is_empty() {
        for preset in &unsupported {
            tracing::warn!("Preset '{}' has no generation strategy", preset);
        }
        anyhow::bail!(
            "{} of {} presets have no generation strategy: {}",
            unsupported.len(),
            presets.len(),
            unsupported.join(", ")
        );
    }

    println!("All {} presets are supported", presets.len());
    Ok(())
}
