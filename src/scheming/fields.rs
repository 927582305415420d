//! Fields command handler.

use clap::{Args, ValueEnum};
use scheming_core::{FieldSpecCollection, SchemingSchema};

use super::load_schema;
use crate::CommonArgs;

/// Schema section to list.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Section {
    #[default]
    Dataset,
    Resource,
}

/// Fields command arguments.
#[derive(Args, Clone, Debug)]
pub struct FieldsArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Only list required fields
    #[arg(long)]
    pub required: bool,

    /// Which field list to show
    #[arg(long, value_enum, default_value_t = Section::Dataset)]
    pub section: Section,
}

fn section_fields(schema: &SchemingSchema, section: Section) -> &FieldSpecCollection {
    match section {
        Section::Dataset => &schema.dataset_fields,
        Section::Resource => &schema.resource_fields,
    }
}

/// One line per field, `name (preset: x)`, in schema order.
pub fn describe_fields(schema: &SchemingSchema, section: Section, required: bool) -> Vec<String> {
    let fields = section_fields(schema, section);
    if required {
        fields.required().map(ToString::to_string).collect()
    } else {
        fields.iter().map(ToString::to_string).collect()
    }
}

/// Run the fields command.
pub fn run_fields(args: FieldsArgs) -> anyhow::Result<()> {
    let schema = load_schema(&args.common.schema)?;
    for line in describe_fields(&schema, args.section, args.required) {
        println!("{line}");
    }
    Ok(())
}
