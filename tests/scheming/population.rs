//! Library-level population of the fixture schemas.

use bcdc_apitests::scheming::populate::populate_package;
use bcdc_apitests::testing::{fixture_path, offline_populator, validate_record};
use dataset_generator::{FieldValue, GeneratorError};
use scheming_core::SchemingSchema;

const SEED: u64 = 42;

fn bcdc_schema() -> SchemingSchema {
    SchemingSchema::from_file(fixture_path("bcdc_dataset_schema.json"))
        .expect("Failed to load fixture schema")
}

#[test]
fn test_fixture_schema_loads_from_action_response() {
    let schema = bcdc_schema();
    assert_eq!(schema.dataset_type.as_deref(), Some("bcdc_dataset"));
    assert_eq!(schema.dataset_fields.len(), 13);
    assert_eq!(schema.resource_fields.len(), 5);

    let required: Vec<&str> = schema
        .dataset_fields
        .required()
        .map(|f| f.field_name())
        .collect();
    assert_eq!(
        required,
        vec!["title", "name", "notes", "bcdc_type", "owner_org", "publish_state", "contacts"]
    );
}

#[test]
fn test_every_fixture_preset_is_supported() {
    let schema = bcdc_schema();
    let populator = offline_populator(SEED);
    for preset in schema.presets() {
        assert!(populator.supports(&preset), "no strategy for {preset}");
    }
}

#[test]
fn test_generated_records_validate_against_schema() {
    let schema = bcdc_schema();
    let mut populator = offline_populator(SEED);

    for _ in 0..25 {
        let payload = populate_package(&mut populator, &schema, 2).unwrap();

        let violations = validate_record(&schema.dataset_fields, &payload.dataset);
        assert!(violations.is_empty(), "dataset: {violations:?}");

        for resource in &payload.resources {
            let violations = validate_record(&schema.resource_fields, resource);
            assert!(violations.is_empty(), "resource: {violations:?}");
        }
    }
}

#[test]
fn test_iso_topic_follows_dataset_type() {
    let schema = bcdc_schema();
    let mut populator = offline_populator(SEED);

    // iso_topic_string is declared before bcdc_type, so it is always deferred
    for _ in 0..40 {
        let record = populator.populate(&schema.dataset_fields).unwrap();
        let kind = record.get("bcdc_type").and_then(FieldValue::as_str).unwrap();
        let topic = record.get("iso_topic_string").unwrap();
        if kind == "geographic" {
            assert!(topic.as_str().is_some(), "geographic dataset without topic");
        } else {
            assert!(topic.is_null(), "{kind} dataset with topic {topic:?}");
        }
    }
    assert_eq!(populator.deferred_passes(), 40);
}

#[test]
fn test_fixed_names_in_payload() {
    let schema = bcdc_schema();
    let mut populator = offline_populator(SEED);
    let payload = populate_package(&mut populator, &schema, 1).unwrap();
    let json = serde_json::to_value(&payload).unwrap();

    assert_eq!(json["dataset"]["title"], "zzztest tes test dataset");
    assert_eq!(json["dataset"]["name"], "zzztest_tes_testpkg");
    assert_eq!(json["dataset"]["owner_org"], "zzztest_tes_testorg");
    assert_eq!(json["dataset"]["sub_org"], "zzztest_tes_testorg");
    assert!(json["dataset"]["dates"].is_object());
    assert!(json["dataset"]["contacts"].is_array());
    assert!(json["resources"][0]["details"].as_str().unwrap().contains("placeName"));
}

#[test]
fn test_same_seed_same_payload() {
    let schema = bcdc_schema();
    let mut first = offline_populator(SEED);
    let mut second = offline_populator(SEED);

    let a = populate_package(&mut first, &schema, 2).unwrap();
    let b = populate_package(&mut second, &schema, 2).unwrap();
    // dates are anchored to now, everything else follows the seed
    assert_eq!(a.dataset.get("contacts"), b.dataset.get("contacts"));
    assert_eq!(a.dataset.get("bcdc_type"), b.dataset.get("bcdc_type"));
    assert_eq!(a.resources, b.resources);
}

#[test]
fn test_yaml_schema_with_unknown_presets() {
    let schema = SchemingSchema::from_file(fixture_path("unsupported_presets.yaml")).unwrap();
    let mut populator = offline_populator(SEED);

    assert_eq!(
        populator.unsupported_presets(&schema.dataset_fields),
        vec!["fully_qualified_url", "license_select"]
    );

    let err = populator.populate(&schema.dataset_fields).unwrap_err();
    assert!(matches!(
        err,
        GeneratorError::UndefinedPreset { ref preset, .. } if preset == "license_select"
    ));
}

#[test]
fn test_unresolvable_fixture() {
    let schema = SchemingSchema::from_file(fixture_path("unresolvable_schema.json")).unwrap();
    let mut populator = offline_populator(SEED);

    let err = populator.populate(&schema.dataset_fields).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("iso_topic_string"), "{message}");
    assert!(message.contains("bcdc_type"), "{message}");
}
