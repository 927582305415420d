//! Schema population integration tests.
//!
//! These tests run against the fixture schemas in `tests/fixtures`:
//! 1. Load a schema (JSON action response or YAML document)
//! 2. Populate dataset and resource records with a fixed seed
//! 3. Validate every generated value against its own field description
//! 4. Drive the same flow through the command-line binary

mod cli;
mod population;
