//! Scheming schema documents.
//!
//! A document is what the catalog's `scheming_dataset_schema_show` action
//! returns: a JSON object with `dataset_fields` and `resource_fields` arrays.
//! The bare document, the full action response (`{"success": true,
//! "result": {...}}`) and a YAML rendering of either are all accepted.

use crate::fields::FieldSpecCollection;
use serde_json::Value;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

// ============================================================================
// Error Types
// ============================================================================

/// Error type for schema operations.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Error reading schema file
    #[error("Failed to read schema file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing JSON
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// A field description (or the document itself) is not an object
    #[error("Expected an object at '{path}'")]
    NotAnObject { path: String },

    /// A mandatory attribute is absent
    #[error("Missing mandatory attribute '{attribute}' at '{path}'")]
    MissingAttribute { path: String, attribute: String },

    /// An attribute has the wrong shape
    #[error("Attribute '{attribute}' at '{path}' must be {expected}")]
    InvalidAttribute {
        path: String,
        attribute: String,
        expected: &'static str,
    },
}

// ============================================================================
// Document
// ============================================================================

/// Parsed scheming schema for one dataset type.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemingSchema {
    /// Dataset type the schema describes (e.g. `bcdc_dataset`), when present
    pub dataset_type: Option<String>,

    /// Fields of the package itself
    pub dataset_fields: FieldSpecCollection,

    /// Fields of each resource attached to the package
    pub resource_fields: FieldSpecCollection,
}

impl SchemingSchema {
    /// Load a schema from a file. `.yaml` / `.yml` files are read as YAML,
    /// everything else as JSON.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml(&content),
            _ => Self::from_json(&content),
        }
    }

    /// Parse schema from JSON string.
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Parse schema from YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, SchemaError> {
        let value: Value = serde_yaml::from_str(yaml)?;
        Self::from_value(value)
    }

    /// Build a schema from an already parsed document.
    pub fn from_value(value: Value) -> Result<Self, SchemaError> {
        let document = unwrap_action_response(value);
        let obj = document.as_object().ok_or_else(|| SchemaError::NotAnObject {
            path: "$".to_string(),
        })?;

        let dataset_fields = obj
            .get("dataset_fields")
            .ok_or_else(|| SchemaError::MissingAttribute {
                path: "$".to_string(),
                attribute: "dataset_fields".to_string(),
            })
            .and_then(|raw| FieldSpecCollection::from_value(raw, "dataset_fields"))?;

        let resource_fields = match obj.get("resource_fields") {
            Some(raw) => FieldSpecCollection::from_value(raw, "resource_fields")?,
            None => FieldSpecCollection::default(),
        };

        let dataset_type = obj
            .get("dataset_type")
            .and_then(Value::as_str)
            .map(str::to_string);

        Ok(Self {
            dataset_type,
            dataset_fields,
            resource_fields,
        })
    }

    /// Union of the presets used by dataset and resource fields, sorted.
    pub fn presets(&self) -> BTreeSet<String> {
        let mut presets = self.dataset_fields.presets();
        presets.extend(self.resource_fields.presets());
        presets
    }
}

/// Strip the `{"help": ..., "success": true, "result": {...}}` envelope of a
/// catalog action response, leaving other documents untouched.
fn unwrap_action_response(value: Value) -> Value {
    match value {
        Value::Object(mut obj)
            if !obj.contains_key("dataset_fields")
                && obj.get("result").is_some_and(Value::is_object) =>
        {
            obj.remove("result").unwrap_or(Value::Null)
        }
        other => other,
    }
}
