//! End-to-end runs of the `bcdc-apitests` binary.

use bcdc_apitests::testing::{assert_cli_success, fixture_path};
use std::process::{Command, Output};

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bcdc-apitests"))
        .args(args)
        .env("RUST_LOG", "bcdc_apitests=debug")
        .env_remove("BCDC_CONFIG")
        .env("BCDC_TEST_PREFIX", "zzztest")
        .env("BCDC_TEST_USER", "tester")
        .output()
        .expect("Failed to run bcdc-apitests")
}

fn fixture(name: &str) -> String {
    fixture_path(name).to_string_lossy().into_owned()
}

#[test]
fn test_populate_to_stdout() {
    let schema = fixture("bcdc_dataset_schema.json");
    let output = run_cli(&["populate", "--schema", &schema, "--resources", "2", "--compact"]);
    assert_cli_success(&output, "populate");

    let payload: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(payload["dataset"]["name"], "zzztest_tes_testpkg");
    assert_eq!(payload["resources"].as_array().unwrap().len(), 2);
}

#[test]
fn test_populate_to_file_with_config() {
    let temp_dir = tempfile::tempdir().unwrap();
    let output_path = temp_dir.path().join("payload.json");
    let config_path = temp_dir.path().join("bcdc.toml");
    std::fs::write(
        &config_path,
        format!(
            "[test]\nprefix = \"fromfile\"\n\n[words]\nbatch_size = 3\nlist = {:?}\n",
            fixture("words.txt")
        ),
    )
    .unwrap();

    let schema = fixture("bcdc_dataset_schema.json");
    let output = Command::new(env!("CARGO_BIN_EXE_bcdc-apitests"))
        .args(["populate", "--schema", &schema, "--seed", "7"])
        .arg("--config")
        .arg(&config_path)
        .arg("--output")
        .arg(&output_path)
        .env_remove("BCDC_TEST_PREFIX")
        .env("BCDC_TEST_USER", "tester")
        .output()
        .unwrap();
    assert_cli_success(&output, "populate --config --output");
    assert!(output.stdout.is_empty());

    let payload: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output_path).unwrap()).unwrap();
    assert_eq!(payload["dataset"]["title"], "fromfile tes test dataset");
    let notes = payload["dataset"]["notes"].as_str().unwrap();
    assert!(["catalogue", "metadata", "layer", "mapping"].contains(&notes));
}

#[test]
fn test_presets_lists_sorted_union() {
    let schema = fixture("bcdc_dataset_schema.json");
    let output = run_cli(&["presets", "--schema", &schema]);
    assert_cli_success(&output, "presets");

    let stdout = String::from_utf8(output.stdout).unwrap();
    let presets: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        presets,
        vec![
            "autocomplete",
            "composite",
            "composite_repeating",
            "dataset_organization",
            "dataset_slug",
            "date",
            "json_object",
            "multiple_checkbox",
            "resource_url_upload",
            "select",
            "tag_string_autocomplete",
            "title",
        ]
    );
}

#[test]
fn test_fields_required_resource() {
    let schema = fixture("bcdc_dataset_schema.json");
    let output = run_cli(&[
        "fields", "--schema", &schema, "--section", "resource", "--required",
    ]);
    assert_cli_success(&output, "fields");

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout.lines().collect::<Vec<_>>(),
        vec![
            "url (preset: resource_url_upload)",
            "name",
            "resource_update_cycle (preset: select)"
        ]
    );
}

#[test]
fn test_check_passes_for_supported_schema() {
    let schema = fixture("bcdc_dataset_schema.json");
    let output = run_cli(&["check", "--schema", &schema]);
    assert_cli_success(&output, "check");
    assert!(String::from_utf8_lossy(&output.stdout).contains("All 12 presets are supported"));
}

#[test]
fn test_check_ignores_word_list_setting() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("bcdc.toml");
    let missing = temp_dir.path().join("no_such_words.txt");
    std::fs::write(&config_path, format!("[words]\nlist = {missing:?}\n")).unwrap();

    let schema = fixture("bcdc_dataset_schema.json");
    let output = Command::new(env!("CARGO_BIN_EXE_bcdc-apitests"))
        .args(["check", "--schema", &schema])
        .arg("--config")
        .arg(&config_path)
        .output()
        .unwrap();
    assert_cli_success(&output, "check with missing word list");
    assert!(String::from_utf8_lossy(&output.stdout).contains("All 12 presets are supported"));
}

#[test]
fn test_check_fails_listing_unsupported_presets() {
    let schema = fixture("unsupported_presets.yaml");
    let output = run_cli(&["check", "--schema", &schema]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"), "{stderr}");
    assert!(stderr.contains("fully_qualified_url, license_select"), "{stderr}");
}

#[test]
fn test_populate_unresolvable_schema_fails() {
    let schema = fixture("unresolvable_schema.json");
    let output = run_cli(&["populate", "--schema", &schema]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to populate dataset fields"), "{stderr}");
    assert!(stderr.contains("iso_topic_string"), "{stderr}");
}

#[test]
fn test_missing_schema_file() {
    let output = run_cli(&["presets", "--schema", "/nonexistent/schema.json"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to load schema"));
}
