//! Strategies for fields with enumerated values.

use super::FieldOutcome;
use crate::error::GeneratorError;
use crate::population::DataPopulation;
use crate::record::{FieldValue, GeneratedRecord};
use crate::values::ORGANIZATION_CHOICES_HELPER;
use rand::Rng;
use scheming_core::FieldSpec;
use tracing::debug;

/// Pick one of the declared choices uniformly at random.
///
/// Without choices (absent or an empty list), a field using the organization
/// helper gets the test organization; anything else is malformed.
pub fn select(
    populator: &mut DataPopulation,
    field: &FieldSpec,
    _record: &GeneratedRecord,
) -> Result<FieldOutcome, GeneratorError> {
    let values = field.choices().map(|c| c.values()).unwrap_or_default();
    if !values.is_empty() {
        debug!("{} choices for {}", values.len(), field.field_name());
        let idx = populator.rng().gen_range(0..values.len());
        return Ok(FieldOutcome::Generated(FieldValue::text(values[idx])));
    }

    match field.choices_helper() {
        Some(ORGANIZATION_CHOICES_HELPER) => Ok(FieldOutcome::Generated(FieldValue::text(
            populator.test_values().organization.clone(),
        ))),
        Some(helper) => Err(GeneratorError::MalformedField {
            field: field.field_name().to_string(),
            reason: format!("no choices and unrecognized choices_helper '{helper}'"),
        }),
        None => Err(GeneratorError::MalformedField {
            field: field.field_name().to_string(),
            reason: "select field has neither choices nor a choices_helper".to_string(),
        }),
    }
}

/// Same as [`select`]: one checked option.
pub fn multiple_checkbox(
    populator: &mut DataPopulation,
    field: &FieldSpec,
    record: &GeneratedRecord,
) -> Result<FieldOutcome, GeneratorError> {
    select(populator, field, record)
}

/// Conditional choice.
///
/// The field is only considered once its `conditional_field` has been
/// populated in the current scope; until then it is deferred. When the field
/// lists `conditional_values`, it is populated only if the conditional field's
/// value is one of them and left null otherwise. Without `conditional_values`
/// the presence of the conditional field is enough. Without a
/// `conditional_field` this behaves like [`select`].
pub fn autocomplete(
    populator: &mut DataPopulation,
    field: &FieldSpec,
    record: &GeneratedRecord,
) -> Result<FieldOutcome, GeneratorError> {
    let Some(conditional_field) = field.conditional_field() else {
        return select(populator, field, record);
    };

    let Some(current) = record.get(conditional_field) else {
        debug!(
            "{} waits on {}, deferring",
            field.field_name(),
            conditional_field
        );
        return Ok(FieldOutcome::Deferred);
    };

    if condition_met(field.conditional_values(), current) {
        select(populator, field, record)
    } else {
        debug!(
            "{} not applicable for {} = {:?}",
            field.field_name(),
            conditional_field,
            current
        );
        Ok(FieldOutcome::Generated(FieldValue::Null))
    }
}

fn condition_met(conditional_values: &[String], current: &FieldValue) -> bool {
    if conditional_values.is_empty() {
        return true;
    }
    current
        .as_scalar()
        .is_some_and(|value| conditional_values.contains(&value))
}
