//! Field model for CKAN scheming schemas.
//!
//! This crate turns the schema document served by the catalog's
//! `scheming_dataset_schema_show` action into a read-only tree:
//!
//! - [`SchemingSchema`] - the document, with dataset and resource fields
//! - [`FieldSpecCollection`] - an ordered list of fields with filtering and
//!   recursive preset discovery
//! - [`FieldSpec`] - one field description
//! - [`Choices`] - the enumerated options of a `select`-style field
//!
//! # Architecture
//!
//! ```text
//! scheming-core (this crate)
//!    │
//!    └─── dataset-generator  (walks the tree to produce dataset records)
//! ```
//!
//! # Example
//!
//! ```rust
//! use scheming_core::SchemingSchema;
//!
//! let schema = SchemingSchema::from_json(r#"{
//!     "dataset_fields": [
//!         {"field_name": "title", "preset": "title", "required": true},
//!         {"field_name": "bcdc_type", "preset": "select",
//!          "choices": [{"value": "geographic"}, {"value": "other"}]}
//!     ],
//!     "resource_fields": []
//! }"#).unwrap();
//!
//! let required: Vec<_> = schema.dataset_fields.required().map(|f| f.field_name()).collect();
//! assert_eq!(required, vec!["title"]);
//! assert!(schema.presets().contains("select"));
//! ```

pub mod choices;
pub mod field;
pub mod fields;
pub mod schema;

// Re-exports for convenience
pub use choices::{Choice, Choices};
pub use field::FieldSpec;
pub use fields::{FieldFilter, FieldSpecCollection};
pub use schema::{SchemaError, SchemingSchema};
