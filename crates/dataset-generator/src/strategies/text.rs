//! Free-text strategies backed by the filler word cache.

use super::FieldOutcome;
use crate::error::GeneratorError;
use crate::population::DataPopulation;
use crate::record::{FieldValue, GeneratedRecord};
use scheming_core::FieldSpec;
use tracing::debug;

/// One filler word. Used for every field without a preset.
pub fn string(
    populator: &mut DataPopulation,
    field: &FieldSpec,
    _record: &GeneratedRecord,
) -> Result<FieldOutcome, GeneratorError> {
    let word = populator.next_word()?;
    debug!("random word for {}: {}", field.field_name(), word);
    Ok(FieldOutcome::Generated(FieldValue::Text(word)))
}

/// Tags are plain filler words; existing catalog tags are not consulted.
pub fn tag_string_autocomplete(
    populator: &mut DataPopulation,
    field: &FieldSpec,
    record: &GeneratedRecord,
) -> Result<FieldOutcome, GeneratorError> {
    string(populator, field, record)
}

/// `https://<word>.com`
pub fn resource_url_upload(
    populator: &mut DataPopulation,
    _field: &FieldSpec,
    _record: &GeneratedRecord,
) -> Result<FieldOutcome, GeneratorError> {
    let word = populator.next_word()?;
    Ok(FieldOutcome::Generated(FieldValue::Text(format!(
        "https://{word}.com"
    ))))
}
