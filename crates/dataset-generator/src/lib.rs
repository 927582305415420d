//! Test dataset generator for a CKAN catalog using ckanext-scheming.
//!
//! This crate provides [`DataPopulation`], which walks the fields of a
//! scheming schema and produces a [`GeneratedRecord`] that can be submitted as
//! a `package_create` payload. Each field is generated by the strategy
//! registered for its `preset`; fields without a preset get a filler word.
//!
//! # Architecture
//!
//! ```text
//! SchemingSchema (JSON / YAML)
//!        │
//!        ▼
//! ┌─────────────────────┐
//! │   DataPopulation    │
//! │                     │
//! │  - strategies       │  preset -> fn
//! │  - words            │  batched filler word cache
//! │  - rng (StdRng)     │
//! │  - test values      │
//! └──────────┬──────────┘
//!            │  forward pass, then deferred passes
//!            ▼
//!    GeneratedRecord { field_name -> FieldValue }
//! ```
//!
//! # Example
//!
//! ```rust
//! use dataset_generator::{DataPopulation, RandomWords, SyllableWords, TestValues};
//! use scheming_core::SchemingSchema;
//!
//! let schema = SchemingSchema::from_json(r#"{
//!     "dataset_fields": [
//!         {"field_name": "title", "preset": "title"},
//!         {"field_name": "bcdc_type", "preset": "select",
//!          "choices": [{"value": "geographic"}, {"value": "other"}]},
//!         {"field_name": "notes"}
//!     ]
//! }"#).unwrap();
//!
//! let words = RandomWords::new(SyllableWords::new(42), 100);
//! let mut populator = DataPopulation::new(TestValues::new("zzztest", "tester"), words, 42);
//! let record = populator.populate(&schema.dataset_fields).unwrap();
//! assert_eq!(record.len(), 3);
//! println!("{}", record.to_json());
//! ```
//!
//! # Presets
//!
//! - `select`, `multiple_checkbox` - random pick from `choices`
//! - `autocomplete` - like `select`, once its `conditional_field` is populated
//! - `title`, `dataset_slug`, `dataset_organization` - fixed test names
//! - `tag_string_autocomplete` - filler word
//! - `resource_url_upload` - `https://<word>.com`
//! - `json_object` - fixed placeholder document
//! - `date` - random date within the last ten years
//! - `composite` - one nested record built from `subfields`
//! - `composite_repeating` - one to three nested records

pub mod error;
pub mod population;
pub mod record;
pub mod strategies;
pub mod values;
pub mod words;

// Re-exports for convenience
pub use error::{DeferredField, GeneratorError};
pub use population::DataPopulation;
pub use record::{FieldValue, GeneratedRecord};
pub use strategies::{FieldOutcome, Strategy, StrategyTable};
pub use values::{TestValues, DEFAULT_TEST_PREFIX};
pub use words::{
    RandomWords, SyllableWords, WordListFile, WordSource, WordSourceError,
    DEFAULT_WORD_BATCH_SIZE,
};
