//! Ordered collections of field descriptions.

use crate::field::FieldSpec;
use crate::schema::SchemaError;
use serde_json::Value;
use std::collections::BTreeSet;

/// Ordered, read-only sequence of [`FieldSpec`]s.
///
/// Used for the top level `dataset_fields` / `resource_fields` arrays as well
/// as for the `subfields` of composite fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldSpecCollection {
    fields: Vec<FieldSpec>,
}

impl FieldSpecCollection {
    /// Build a collection from already parsed fields.
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self { fields }
    }

    /// Parse a raw JSON array of field descriptions.
    pub fn from_value(raw: &Value, path: &str) -> Result<Self, SchemaError> {
        let items = raw.as_array().ok_or_else(|| SchemaError::InvalidAttribute {
            path: path.to_string(),
            attribute: "fields".to_string(),
            expected: "an array of field descriptions",
        })?;
        Self::from_items(items, path)
    }

    pub(crate) fn from_items(items: &[Value], path: &str) -> Result<Self, SchemaError> {
        let fields = items
            .iter()
            .enumerate()
            .map(|(idx, item)| FieldSpec::from_value(item, &format!("{path}[{idx}]")))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { fields })
    }

    /// Iterate in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, FieldSpec> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Look up a field of this scope by name.
    pub fn get(&self, field_name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.field_name() == field_name)
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.field_name()).collect()
    }

    /// Fields marked `required: true`, in source order.
    pub fn required(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|f| f.required())
    }

    /// Fields not marked as required, in source order.
    pub fn optional(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|f| !f.required())
    }

    /// Start a filter selecting fields whose `property` equals `value`.
    ///
    /// Chain [`FieldFilter::or`] to accept fields matching any of several
    /// property/value pairs.
    pub fn filter(&self, property: &str, value: impl Into<Value>) -> FieldFilter<'_> {
        FieldFilter {
            collection: self,
            conditions: vec![(property.to_string(), value.into())],
        }
    }

    /// Distinct preset tags used anywhere in the tree, sorted.
    ///
    /// Recurses into the subfields of composite fields at any depth.
    pub fn presets(&self) -> BTreeSet<String> {
        let mut presets = BTreeSet::new();
        self.collect_presets(&mut presets);
        presets
    }

    fn collect_presets(&self, presets: &mut BTreeSet<String>) {
        for field in &self.fields {
            if let Some(preset) = field.preset() {
                presets.insert(preset.to_string());
            }
            if let Some(subfields) = field.subfields() {
                subfields.collect_presets(presets);
            }
        }
    }
}

impl<'a> IntoIterator for &'a FieldSpecCollection {
    type Item = &'a FieldSpec;
    type IntoIter = std::slice::Iter<'a, FieldSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A property/value filter over a [`FieldSpecCollection`].
#[derive(Debug, Clone)]
pub struct FieldFilter<'a> {
    collection: &'a FieldSpecCollection,
    conditions: Vec<(String, Value)>,
}

impl<'a> FieldFilter<'a> {
    /// Also accept fields whose `property` equals `value`.
    pub fn or(mut self, property: &str, value: impl Into<Value>) -> Self {
        self.conditions.push((property.to_string(), value.into()));
        self
    }

    /// Matching fields in source order, each yielded once.
    pub fn iter(&self) -> impl Iterator<Item = &'a FieldSpec> + '_ {
        self.collection.iter().filter(move |field| self.matches(field))
    }

    pub fn count(&self) -> usize {
        self.iter().count()
    }

    fn matches(&self, field: &FieldSpec) -> bool {
        self.conditions
            .iter()
            .any(|(property, value)| field.property_equals(property, value))
    }
}
