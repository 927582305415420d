//! Strategies returning fixed test values.

use super::FieldOutcome;
use crate::error::GeneratorError;
use crate::population::DataPopulation;
use crate::record::{FieldValue, GeneratedRecord};
use scheming_core::FieldSpec;

/// Placeholder for `json_object` fields. Not validated against anything.
pub const JSON_OBJECT_PLACEHOLDER: &str = r#"{"schema": {"fields": [{"mode": "nullable", "name": "placeName", "type": "string"}, {"mode": "nullable", "name": "kind", "type": "string"}]}}"#;

pub fn title(
    populator: &mut DataPopulation,
    _field: &FieldSpec,
    _record: &GeneratedRecord,
) -> Result<FieldOutcome, GeneratorError> {
    Ok(fixed(&populator.test_values().title))
}

/// The package name doubles as its URL slug.
pub fn dataset_slug(
    populator: &mut DataPopulation,
    _field: &FieldSpec,
    _record: &GeneratedRecord,
) -> Result<FieldOutcome, GeneratorError> {
    Ok(fixed(&populator.test_values().package))
}

pub fn dataset_organization(
    populator: &mut DataPopulation,
    _field: &FieldSpec,
    _record: &GeneratedRecord,
) -> Result<FieldOutcome, GeneratorError> {
    Ok(fixed(&populator.test_values().organization))
}

pub fn json_object(
    _populator: &mut DataPopulation,
    _field: &FieldSpec,
    _record: &GeneratedRecord,
) -> Result<FieldOutcome, GeneratorError> {
    Ok(fixed(JSON_OBJECT_PLACEHOLDER))
}

fn fixed(value: &str) -> FieldOutcome {
    FieldOutcome::Generated(FieldValue::text(value))
}
