//! Schema-driven record population.

use crate::error::{DeferredField, GeneratorError};
use crate::record::GeneratedRecord;
use crate::strategies::{text, FieldOutcome, Strategy, StrategyTable};
use crate::values::TestValues;
use crate::words::RandomWords;
use rand::rngs::StdRng;
use rand::SeedableRng;
use scheming_core::{FieldSpec, FieldSpecCollection};
use tracing::debug;

/// Populates records from scheming field collections.
///
/// Fields are generated in schema order. A field whose strategy defers (an
/// `autocomplete` field whose conditional sibling is not populated yet) is set
/// aside and retried once the forward pass is over, until every deferred field
/// resolves or a retry pass makes no progress.
///
/// The RNG is seeded so a run is reproducible given the same seed, schema and
/// word source. Dates are the exception: they are anchored to the current time.
pub struct DataPopulation {
    /// Preset tag to strategy, built once
    strategies: StrategyTable,
    /// Filler word cache
    words: RandomWords,
    /// Seeded random number generator for reproducibility
    rng: StdRng,
    /// Fixed names used by the fixed-value presets
    values: TestValues,
    /// Deferred resolution passes run so far, across all scopes
    deferred_passes: u64,
}

impl DataPopulation {
    /// Create a populator with the built-in strategies.
    pub fn new(values: TestValues, words: RandomWords, seed: u64) -> Self {
        Self {
            strategies: StrategyTable::builtin(),
            words,
            rng: StdRng::seed_from_u64(seed),
            values,
            deferred_passes: 0,
        }
    }

    /// Register (or replace) the strategy for a preset.
    pub fn with_strategy(mut self, preset: impl Into<String>, strategy: Strategy) -> Self {
        self.strategies.register(preset, strategy);
        self
    }

    pub fn supports(&self, preset: &str) -> bool {
        self.strategies.contains(preset)
    }

    /// Presets used anywhere in `fields` (subfields included) that have no
    /// strategy, sorted.
    pub fn unsupported_presets(&self, fields: &FieldSpecCollection) -> Vec<String> {
        fields
            .presets()
            .into_iter()
            .filter(|preset| !self.supports(preset))
            .collect()
    }

    /// Populate one record from a field collection.
    ///
    /// Either every field gets a value (possibly null) or an error is returned.
    pub fn populate(
        &mut self,
        fields: &FieldSpecCollection,
    ) -> Result<GeneratedRecord, GeneratorError> {
        let mut record = GeneratedRecord::new();
        let mut deferred: Vec<&FieldSpec> = Vec::new();

        for field in fields.iter() {
            match self.generate(field, &record)? {
                FieldOutcome::Generated(value) => record.insert(field.field_name(), value),
                FieldOutcome::Deferred => deferred.push(field),
            }
        }

        if !deferred.is_empty() {
            self.resolve_deferred(deferred, &mut record)?;
            record.reorder(fields.iter().map(FieldSpec::field_name));
        }
        Ok(record)
    }

    /// Retry deferred fields against the growing record.
    ///
    /// Every pass must resolve at least one field, so this runs at most
    /// `deferred.len()` passes.
    fn resolve_deferred(
        &mut self,
        mut deferred: Vec<&FieldSpec>,
        record: &mut GeneratedRecord,
    ) -> Result<(), GeneratorError> {
        while !deferred.is_empty() {
            self.deferred_passes += 1;
            debug!("Retrying {} deferred fields", deferred.len());

            let before = deferred.len();
            let mut pending = Vec::with_capacity(before);
            for field in deferred {
                match self.generate(field, record)? {
                    FieldOutcome::Generated(value) => record.insert(field.field_name(), value),
                    FieldOutcome::Deferred => pending.push(field),
                }
            }

            if pending.len() == before {
                return Err(GeneratorError::UnresolvableDependency {
                    fields: pending
                        .iter()
                        .map(|field| DeferredField {
                            field_name: field.field_name().to_string(),
                            conditional_field: field
                                .conditional_field()
                                .unwrap_or_default()
                                .to_string(),
                        })
                        .collect(),
                });
            }
            deferred = pending;
        }
        Ok(())
    }

    fn generate(
        &mut self,
        field: &FieldSpec,
        record: &GeneratedRecord,
    ) -> Result<FieldOutcome, GeneratorError> {
        let strategy: Strategy = match field.preset() {
            None => text::string,
            Some(preset) => {
                self.strategies
                    .get(preset)
                    .ok_or_else(|| GeneratorError::UndefinedPreset {
                        preset: preset.to_string(),
                        field: field.field_name().to_string(),
                    })?
            }
        };
        debug!(
            "Generating {} (preset: {})",
            field.field_name(),
            field.preset().unwrap_or("none")
        );
        strategy(self, field, record)
    }

    /// Next filler word from the cache.
    pub fn next_word(&mut self) -> Result<String, GeneratorError> {
        Ok(self.words.next_word()?)
    }

    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    pub fn test_values(&self) -> &TestValues {
        &self.values
    }

    pub fn words(&self) -> &RandomWords {
        &self.words
    }

    pub fn strategies(&self) -> &StrategyTable {
        &self.strategies
    }

    /// Deferred resolution passes run so far. Stays at zero as long as no
    /// field has had to wait on a sibling.
    pub fn deferred_passes(&self) -> u64 {
        self.deferred_passes
    }
}

impl std::fmt::Debug for DataPopulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataPopulation")
            .field("strategies", &self.strategies)
            .field("words", &self.words)
            .field("values", &self.values)
            .field("deferred_passes", &self.deferred_passes)
            .finish()
    }
}
