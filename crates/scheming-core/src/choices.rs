//! Enumerated options offered by `select`-style fields.

use crate::schema::SchemaError;
use serde::Serialize;
use serde_json::Value;

/// A single selectable option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    /// Value submitted to the catalog
    pub value: String,

    /// Human readable label, when the schema provides one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Choice {
    /// Create a choice with a value and no label.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: None,
        }
    }

    fn from_value(raw: &Value, path: &str) -> Result<Self, SchemaError> {
        let obj = raw.as_object().ok_or_else(|| SchemaError::NotAnObject {
            path: path.to_string(),
        })?;

        let value = match obj.get("value") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            Some(_) => {
                return Err(SchemaError::InvalidAttribute {
                    path: path.to_string(),
                    attribute: "value".to_string(),
                    expected: "a string, number or boolean",
                })
            }
            None => {
                return Err(SchemaError::MissingAttribute {
                    path: path.to_string(),
                    attribute: "value".to_string(),
                })
            }
        };

        let label = obj.get("label").and_then(Value::as_str).map(str::to_string);

        Ok(Self { value, label })
    }
}

/// Ordered list of choices. Immutable once parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Choices {
    choices: Vec<Choice>,
}

impl Choices {
    /// Build from already parsed choices.
    pub fn new(choices: Vec<Choice>) -> Self {
        Self { choices }
    }

    /// Parse the raw `choices` array of a field description.
    pub(crate) fn from_value(raw: &Value, path: &str) -> Result<Self, SchemaError> {
        let items = raw.as_array().ok_or_else(|| SchemaError::InvalidAttribute {
            path: path.to_string(),
            attribute: "choices".to_string(),
            expected: "an array of {value, label} objects",
        })?;

        let choices = items
            .iter()
            .enumerate()
            .map(|(idx, item)| Choice::from_value(item, &format!("{path}.choices[{idx}]")))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { choices })
    }

    /// The option values in declaration order.
    pub fn values(&self) -> Vec<&str> {
        self.choices.iter().map(|c| c.value.as_str()).collect()
    }

    /// Whether `value` is one of the declared option values.
    pub fn contains(&self, value: &str) -> bool {
        self.choices.iter().any(|c| c.value == value)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Choice> {
        self.choices.iter()
    }

    pub fn len(&self) -> usize {
        self.choices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }
}

impl<'a> IntoIterator for &'a Choices {
    type Item = &'a Choice;
    type IntoIter = std::slice::Iter<'a, Choice>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
