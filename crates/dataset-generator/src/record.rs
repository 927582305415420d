//! Generated dataset records.

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

/// Value produced for a single field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Deliberately left empty (e.g. a conditional field whose condition is not met)
    Null,

    /// Plain text
    Text(String),

    /// Calendar date, rendered as `YYYY-MM-DD`
    Date(NaiveDate),

    /// One nested record (`composite` preset)
    Record(GeneratedRecord),

    /// Sequence of nested records (`composite_repeating` preset)
    Records(Vec<GeneratedRecord>),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Scalar rendering of the value, `None` for null and nested records.
    pub fn as_scalar(&self) -> Option<String> {
        match self {
            FieldValue::Text(s) => Some(s.clone()),
            FieldValue::Date(d) => Some(d.format("%Y-%m-%d").to_string()),
            FieldValue::Null | FieldValue::Record(_) | FieldValue::Records(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            FieldValue::Null => Value::Null,
            FieldValue::Text(s) => Value::String(s.clone()),
            FieldValue::Date(d) => Value::String(d.format("%Y-%m-%d").to_string()),
            FieldValue::Record(record) => record.to_json(),
            FieldValue::Records(records) => {
                Value::Array(records.iter().map(GeneratedRecord::to_json).collect())
            }
        }
    }
}

/// Mapping of field name to generated value for one schema scope.
///
/// Keys keep insertion order, so a record serializes in the order its fields
/// were populated.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct GeneratedRecord {
    fields: IndexMap<String, FieldValue>,
}

impl GeneratedRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field_name: impl Into<String>, value: FieldValue) {
        self.fields.insert(field_name.into(), value);
    }

    /// Get a field value by name.
    pub fn get(&self, field_name: &str) -> Option<&FieldValue> {
        self.fields.get(field_name)
    }

    /// Whether the field has been populated in this scope (null counts).
    pub fn contains(&self, field_name: &str) -> bool {
        self.fields.contains_key(field_name)
    }

    /// Reorder fields to follow `names`; fields not named move to the end.
    pub fn reorder<'a>(&mut self, names: impl IntoIterator<Item = &'a str>) {
        let rank: HashMap<&str, usize> = names
            .into_iter()
            .enumerate()
            .map(|(idx, name)| (name, idx))
            .collect();
        let position = |name: &String| rank.get(name.as_str()).copied().unwrap_or(usize::MAX);
        self.fields.sort_by(|a, _, b, _| position(a).cmp(&position(b)));
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Convert to a JSON object suitable as a `package_create` payload.
    pub fn to_json(&self) -> Value {
        Value::Object(
            self.fields
                .iter()
                .map(|(name, value)| (name.clone(), value.to_json()))
                .collect(),
        )
    }
}
