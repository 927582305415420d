//! Nested record strategies.
//!
//! Subfields are populated through [`DataPopulation::populate`], so they get
//! their own scope: conditional subfields only see their siblings, never the
//! fields of the enclosing record.

use super::FieldOutcome;
use crate::error::GeneratorError;
use crate::population::DataPopulation;
use crate::record::{FieldValue, GeneratedRecord};
use rand::Rng;
use scheming_core::{FieldSpec, FieldSpecCollection};
use tracing::debug;

pub const MIN_COMPOSITE_REPEATS: usize = 1;
pub const MAX_COMPOSITE_REPEATS: usize = 3;

/// A single nested record.
pub fn composite(
    populator: &mut DataPopulation,
    field: &FieldSpec,
    _record: &GeneratedRecord,
) -> Result<FieldOutcome, GeneratorError> {
    let subfields = require_subfields(field)?;
    let nested = populator.populate(subfields)?;
    Ok(FieldOutcome::Generated(FieldValue::Record(nested)))
}

/// Between [`MIN_COMPOSITE_REPEATS`] and [`MAX_COMPOSITE_REPEATS`] nested
/// records, each populated independently.
pub fn composite_repeating(
    populator: &mut DataPopulation,
    field: &FieldSpec,
    _record: &GeneratedRecord,
) -> Result<FieldOutcome, GeneratorError> {
    let subfields = require_subfields(field)?;
    let count = populator
        .rng()
        .gen_range(MIN_COMPOSITE_REPEATS..=MAX_COMPOSITE_REPEATS);
    debug!("{} repeats for {}", count, field.field_name());

    let mut records = Vec::with_capacity(count);
    for _ in 0..count {
        records.push(populator.populate(subfields)?);
    }
    Ok(FieldOutcome::Generated(FieldValue::Records(records)))
}

fn require_subfields(field: &FieldSpec) -> Result<&FieldSpecCollection, GeneratorError> {
    field.subfields().ok_or_else(|| GeneratorError::MalformedField {
        field: field.field_name().to_string(),
        reason: "composite field has no subfields".to_string(),
    })
}
