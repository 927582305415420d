//! A single field description from a scheming schema.

use crate::choices::Choices;
use crate::fields::FieldSpecCollection;
use crate::schema::SchemaError;
use serde_json::{Map, Value};

/// Read-only description of one schema field.
///
/// The typed accessors cover the attributes the generator understands. Any
/// other attribute (validators, form snippets, help text...) stays reachable
/// through [`FieldSpec::property`].
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    field_name: String,
    label: Option<String>,
    required: bool,
    preset: Option<String>,
    choices: Option<Choices>,
    subfields: Option<FieldSpecCollection>,
    choices_helper: Option<String>,
    conditional_field: Option<String>,
    conditional_values: Vec<String>,
    raw: Map<String, Value>,
}

impl FieldSpec {
    /// Parse a raw field description.
    ///
    /// `path` locates the field inside the document and is only used for
    /// error messages, e.g. `dataset_fields[3].subfields[0]`.
    pub fn from_value(raw: &Value, path: &str) -> Result<Self, SchemaError> {
        let obj = raw.as_object().ok_or_else(|| SchemaError::NotAnObject {
            path: path.to_string(),
        })?;

        let field_name = match obj.get("field_name") {
            Some(Value::String(name)) if !name.is_empty() => name.clone(),
            Some(Value::String(_)) | None => {
                return Err(SchemaError::MissingAttribute {
                    path: path.to_string(),
                    attribute: "field_name".to_string(),
                })
            }
            Some(_) => {
                return Err(SchemaError::InvalidAttribute {
                    path: path.to_string(),
                    attribute: "field_name".to_string(),
                    expected: "a string",
                })
            }
        };

        let choices = obj
            .get("choices")
            .map(|c| Choices::from_value(c, path))
            .transpose()?;

        let subfields = match obj.get("subfields") {
            Some(Value::Array(items)) => Some(FieldSpecCollection::from_items(
                items,
                &format!("{path}.subfields"),
            )?),
            Some(_) => {
                return Err(SchemaError::InvalidAttribute {
                    path: path.to_string(),
                    attribute: "subfields".to_string(),
                    expected: "an array of field descriptions",
                })
            }
            None => None,
        };

        Ok(Self {
            field_name,
            label: optional_str(obj, "label", path)?,
            required: obj.get("required").and_then(Value::as_bool) == Some(true),
            preset: optional_str(obj, "preset", path)?,
            choices,
            subfields,
            choices_helper: optional_str(obj, "choices_helper", path)?,
            conditional_field: optional_str(obj, "conditional_field", path)?,
            conditional_values: string_list(obj, "conditional_values", path)?,
            raw: obj.clone(),
        })
    }

    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// True only when the schema sets `required` to boolean `true`.
    pub fn required(&self) -> bool {
        self.required
    }

    /// Tag selecting the generation strategy for this field.
    pub fn preset(&self) -> Option<&str> {
        self.preset.as_deref()
    }

    pub fn has_choices(&self) -> bool {
        self.choices.is_some()
    }

    pub fn choices(&self) -> Option<&Choices> {
        self.choices.as_ref()
    }

    pub fn has_subfields(&self) -> bool {
        self.subfields.is_some()
    }

    /// Nested schema of a composite field.
    pub fn subfields(&self) -> Option<&FieldSpecCollection> {
        self.subfields.as_ref()
    }

    pub fn choices_helper(&self) -> Option<&str> {
        self.choices_helper.as_deref()
    }

    /// Sibling field whose value gates population of this one.
    pub fn conditional_field(&self) -> Option<&str> {
        self.conditional_field.as_deref()
    }

    /// Values of the conditional field for which this field applies.
    pub fn conditional_values(&self) -> &[String] {
        &self.conditional_values
    }

    pub fn has_property(&self, name: &str) -> bool {
        self.raw.contains_key(name)
    }

    /// Raw attribute lookup, `None` when the field does not define it.
    pub fn property(&self, name: &str) -> Option<&Value> {
        self.raw.get(name)
    }

    /// Whether the field defines `name` with exactly `value`.
    pub fn property_equals(&self, name: &str, value: &Value) -> bool {
        self.raw.get(name) == Some(value)
    }
}

impl std::fmt::Display for FieldSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.field_name)?;
        if let Some(preset) = &self.preset {
            write!(f, " (preset: {preset})")?;
        }
        Ok(())
    }
}

fn optional_str(
    obj: &Map<String, Value>,
    attribute: &str,
    path: &str,
) -> Result<Option<String>, SchemaError> {
    match obj.get(attribute) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(SchemaError::InvalidAttribute {
            path: path.to_string(),
            attribute: attribute.to_string(),
            expected: "a string",
        }),
    }
}

fn string_list(
    obj: &Map<String, Value>,
    attribute: &str,
    path: &str,
) -> Result<Vec<String>, SchemaError> {
    let invalid = || SchemaError::InvalidAttribute {
        path: path.to_string(),
        attribute: attribute.to_string(),
        expected: "a string or an array of strings",
    };

    match obj.get(attribute) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::String(s)) => Ok(vec![s.clone()]),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| item.as_str().map(str::to_string).ok_or_else(invalid))
            .collect(),
        Some(_) => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_select_field() {
        let raw = json!({
            "field_name": "bcdc_type",
            "label": "Resource Type",
            "preset": "select",
            "required": true,
            "validators": "scheming_required scheming_choices",
            "choices": [{"value": "geographic"}, {"value": "other"}]
        });
        let field = FieldSpec::from_value(&raw, "dataset_fields[0]").unwrap();

        assert_eq!(field.field_name(), "bcdc_type");
        assert_eq!(field.label(), Some("Resource Type"));
        assert_eq!(field.preset(), Some("select"));
        assert!(field.required());
        assert!(field.has_choices());
        assert!(!field.has_subfields());
        assert_eq!(field.choices().unwrap().values(), vec!["geographic", "other"]);
        assert!(field.has_property("validators"));
        assert!(field.property_equals("required", &json!(true)));
        assert!(!field.property_equals("preset", &json!("date")));
        assert_eq!(field.property("form_snippet"), None);
    }

    #[test]
    fn test_required_must_be_boolean_true() {
        let raw = json!({"field_name": "notes", "required": "true"});
        let field = FieldSpec::from_value(&raw, "f").unwrap();
        assert!(!field.required());
    }

    #[test]
    fn test_conditional_attributes() {
        let raw = json!({
            "field_name": "iso_topic_string",
            "preset": "autocomplete",
            "conditional_field": "bcdc_type",
            "conditional_values": ["geographic"],
            "choices": [{"value": "farming", "label": "Farming"}]
        });
        let field = FieldSpec::from_value(&raw, "f").unwrap();
        assert_eq!(field.conditional_field(), Some("bcdc_type"));
        assert_eq!(field.conditional_values(), ["geographic".to_string()]);
    }

    #[test]
    fn test_single_conditional_value_string() {
        let raw = json!({"field_name": "x", "conditional_values": "geographic"});
        let field = FieldSpec::from_value(&raw, "f").unwrap();
        assert_eq!(field.conditional_values(), ["geographic".to_string()]);
    }

    #[test]
    fn test_nested_subfields() {
        let raw = json!({
            "field_name": "contacts",
            "preset": "composite_repeating",
            "subfields": [
                {"field_name": "name"},
                {"field_name": "org", "preset": "select", "choices_helper": "edc_orgs_form"}
            ]
        });
        let field = FieldSpec::from_value(&raw, "dataset_fields[7]").unwrap();
        let subfields = field.subfields().unwrap();
        assert_eq!(subfields.len(), 2);
        assert_eq!(
            subfields.get("org").unwrap().choices_helper(),
            Some("edc_orgs_form")
        );
    }

    #[test]
    fn test_missing_field_name() {
        let raw = json!({"preset": "title"});
        let err = FieldSpec::from_value(&raw, "dataset_fields[2]").unwrap_err();
        assert!(matches!(
            err,
            SchemaError::MissingAttribute { ref attribute, .. } if attribute == "field_name"
        ));
        assert!(err.to_string().contains("dataset_fields[2]"));
    }

    #[test]
    fn test_missing_field_name_in_subfield_reports_path() {
        let raw = json!({
            "field_name": "contacts",
            "subfields": [{"field_name": "name"}, {"label": "Email"}]
        });
        let err = FieldSpec::from_value(&raw, "dataset_fields[7]").unwrap_err();
        match err {
            SchemaError::MissingAttribute { path, .. } => {
                assert_eq!(path, "dataset_fields[7].subfields[1]")
            }
            other => panic!("Expected MissingAttribute, got {other:?}"),
        }
    }

    #[test]
    fn test_preset_must_be_string() {
        let raw = json!({"field_name": "x", "preset": 5});
        assert!(matches!(
            FieldSpec::from_value(&raw, "f"),
            Err(SchemaError::InvalidAttribute { .. })
        ));
    }

    #[test]
    fn test_display() {
        let raw = json!({"field_name": "title", "preset": "title"});
        let field = FieldSpec::from_value(&raw, "f").unwrap();
        assert_eq!(field.to_string(), "title (preset: title)");
    }
}
