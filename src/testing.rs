//! Test helpers shared by unit and integration tests.
//!
//! Besides fixtures, this provides [`validate_record`], which checks a
//! generated record back against the schema it was generated from.

use chrono::{NaiveDate, TimeDelta, Utc};
use dataset_generator::strategies::composite::{MAX_COMPOSITE_REPEATS, MIN_COMPOSITE_REPEATS};
use dataset_generator::strategies::date::DATE_WINDOW_DAYS;
use dataset_generator::{
    DataPopulation, FieldValue, GeneratedRecord, RandomWords, SyllableWords, TestValues,
};
use scheming_core::{FieldSpec, FieldSpecCollection};
use std::path::{Path, PathBuf};
use std::process::Output;

use crate::TestOpts;

pub const TEST_PREFIX: &str = "zzztest";
pub const TEST_LOGIN: &str = "tester";

/// Path of a file under `tests/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Options resolving to the `zzztest` / `tes` test names.
pub fn test_opts() -> TestOpts {
    TestOpts {
        test_prefix: Some(TEST_PREFIX.to_string()),
        test_user: Some(TEST_LOGIN.to_string()),
    }
}

/// Populator with offline words and fixed test names.
pub fn offline_populator(seed: u64) -> DataPopulation {
    DataPopulation::new(
        TestValues::new(TEST_PREFIX, TEST_LOGIN),
        RandomWords::new(SyllableWords::new(seed), 50),
        seed,
    )
}

/// Check every generated value against its own field description.
///
/// Returns one message per violation, each prefixed with the dotted path of
/// the field (`contacts[1].role`). An empty result means the record is valid.
pub fn validate_record(fields: &FieldSpecCollection, record: &GeneratedRecord) -> Vec<String> {
    let mut violations = Vec::new();
    check_scope(fields, record, "", &mut violations);
    violations
}

fn check_scope(
    fields: &FieldSpecCollection,
    record: &GeneratedRecord,
    prefix: &str,
    violations: &mut Vec<String>,
) {
    for field in fields.iter() {
        let path = format!("{prefix}{}", field.field_name());
        match record.get(field.field_name()) {
            Some(value) => check_value(field, value, &path, violations),
            None => violations.push(format!("{path}: missing")),
        }
    }
    for (name, _) in record.iter() {
        if fields.get(name).is_none() {
            violations.push(format!("{prefix}{name}: not in schema"));
        }
    }
}

fn check_value(field: &FieldSpec, value: &FieldValue, path: &str, violations: &mut Vec<String>) {
    match (field.preset(), value) {
        (Some("autocomplete"), FieldValue::Null) => {}
        (Some("select" | "multiple_checkbox" | "autocomplete"), FieldValue::Text(text)) => {
            if let Some(choices) = field.choices().filter(|c| !c.is_empty()) {
                if !choices.contains(text) {
                    violations.push(format!("{path}: '{text}' is not a declared choice"));
                }
            }
        }
        (Some("date"), value) => match value.as_scalar() {
            Some(text) => check_date(&text, path, violations),
            None => violations.push(format!("{path}: expected a date, got {value:?}")),
        },
        (Some("composite"), FieldValue::Record(nested)) => {
            if let Some(subfields) = field.subfields() {
                check_scope(subfields, nested, &format!("{path}."), violations);
            }
        }
        (Some("composite_repeating"), FieldValue::Records(nested)) => {
            if !(MIN_COMPOSITE_REPEATS..=MAX_COMPOSITE_REPEATS).contains(&nested.len()) {
                violations.push(format!("{path}: {} repeats", nested.len()));
            }
            if let Some(subfields) = field.subfields() {
                for (idx, record) in nested.iter().enumerate() {
                    check_scope(subfields, record, &format!("{path}[{idx}]."), violations);
                }
            }
        }
        (Some("composite" | "composite_repeating"), other) => {
            violations.push(format!("{path}: expected nested records, got {other:?}"));
        }
        (Some("select" | "multiple_checkbox"), other) => {
            violations.push(format!("{path}: expected text, got {other:?}"));
        }
        (_, FieldValue::Null) => violations.push(format!("{path}: unexpected null")),
        _ => {}
    }
}

fn check_date(text: &str, path: &str, violations: &mut Vec<String>) {
    let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") else {
        violations.push(format!("{path}: '{text}' is not YYYY-MM-DD"));
        return;
    };
    let today = Utc::now().date_naive();
    // one day of slack for runs spanning midnight
    let earliest = today - TimeDelta::days(DATE_WINDOW_DAYS + 1);
    if date < earliest || date > today {
        violations.push(format!("{path}: {date} outside [{earliest}, {today}]"));
    }
}

/// Verify CLI command succeeded
pub fn assert_cli_success(output: &Output, command_desc: &str) {
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stdout = String::from_utf8_lossy(&output.stdout);
        panic!(
            "{} failed!\nExit code: {:?}\nStdout: {}\nStderr: {}",
            command_desc,
            output.status.code(),
            stdout,
            stderr
        );
    }
}
