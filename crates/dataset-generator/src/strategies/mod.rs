//! Generation strategies, one per schema preset.
//!
//! A [`StrategyTable`] maps preset tags to plain functions. It is built once
//! per [`DataPopulation`](crate::DataPopulation); looking up a tag that is not
//! in the table is how undefined presets are detected.

pub mod choice;
pub mod composite;
pub mod date;
pub mod fixed;
pub mod text;

use crate::error::GeneratorError;
use crate::population::DataPopulation;
use crate::record::{FieldValue, GeneratedRecord};
use scheming_core::FieldSpec;
use std::collections::HashMap;

/// Result of running a strategy on one field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldOutcome {
    /// The field got its value
    Generated(FieldValue),

    /// The field depends on a sibling that is not populated yet
    Deferred,
}

/// Generation strategy.
///
/// Receives the populator (RNG, word cache, test values, recursion), the field
/// and the record populated so far in the current scope.
pub type Strategy =
    fn(&mut DataPopulation, &FieldSpec, &GeneratedRecord) -> Result<FieldOutcome, GeneratorError>;

/// Mapping from preset tag to strategy.
#[derive(Clone)]
pub struct StrategyTable {
    strategies: HashMap<String, Strategy>,
}

impl StrategyTable {
    /// A table without any strategy.
    pub fn empty() -> Self {
        Self {
            strategies: HashMap::new(),
        }
    }

    /// The presets used by the catalog's dataset schemas.
    pub fn builtin() -> Self {
        let mut table = Self::empty();
        table.register("select", choice::select);
        table.register("multiple_checkbox", choice::multiple_checkbox);
        table.register("autocomplete", choice::autocomplete);
        table.register("title", fixed::title);
        table.register("dataset_slug", fixed::dataset_slug);
        table.register("dataset_organization", fixed::dataset_organization);
        table.register("json_object", fixed::json_object);
        table.register("tag_string_autocomplete", text::tag_string_autocomplete);
        table.register("resource_url_upload", text::resource_url_upload);
        table.register("date", date::date);
        table.register("composite", composite::composite);
        table.register("composite_repeating", composite::composite_repeating);
        table
    }

    /// Register (or replace) the strategy for `preset`.
    pub fn register(&mut self, preset: impl Into<String>, strategy: Strategy) {
        self.strategies.insert(preset.into(), strategy);
    }

    pub fn get(&self, preset: &str) -> Option<Strategy> {
        self.strategies.get(preset).copied()
    }

    pub fn contains(&self, preset: &str) -> bool {
        self.strategies.contains_key(preset)
    }

    /// Registered preset tags, sorted.
    pub fn presets(&self) -> Vec<&str> {
        let mut presets: Vec<&str> = self.strategies.keys().map(String::as_str).collect();
        presets.sort_unstable();
        presets
    }
}

impl Default for StrategyTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl std::fmt::Debug for StrategyTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StrategyTable")
            .field("presets", &self.presets())
            .finish()
    }
}
