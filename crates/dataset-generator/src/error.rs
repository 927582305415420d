//! Error types for dataset population.

use crate::words::WordSourceError;
use thiserror::Error;

/// A field still waiting on its conditional field when resolution gave up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeferredField {
    pub field_name: String,
    pub conditional_field: String,
}

impl std::fmt::Display for DeferredField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "'{}' (waits on '{}')",
            self.field_name, self.conditional_field
        )
    }
}

/// Errors that can occur while populating a record.
///
/// All of them abort the population pass; there is no partial record.
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// The schema uses a preset the strategy table does not know
    #[error("Preset '{preset}' used by field '{field}' has no generation strategy")]
    UndefinedPreset { preset: String, field: String },

    /// A field lacks what its preset needs (choices, subfields...)
    #[error("Malformed field '{field}': {reason}")]
    MalformedField { field: String, reason: String },

    /// Deferred resolution stopped making progress
    #[error("Unresolvable conditional fields: {}", join_deferred(.fields))]
    UnresolvableDependency { fields: Vec<DeferredField> },

    /// Filler word source failure
    #[error("Word source error: {0}")]
    Words(#[from] WordSourceError),
}

fn join_deferred(fields: &[DeferredField]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
