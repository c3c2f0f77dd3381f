// HL7 OBX CLI tests
//
// This file contains end-to-end tests for the hl7-obx binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn hl7_obx() -> Command {
    Command::cargo_bin("hl7-obx").expect("binary should build")
}

#[test]
fn check_reports_collected_values() {
    hl7_obx()
        .arg("check")
        .arg(fixture("cbc_oru.hl7"))
        .assert()
        .success()
        .stdout(predicate::str::contains("OBX SUBSEGMENT ANALYSIS RESULTS"))
        .stdout(predicate::str::contains("OBX.15.1: Present (3 values)"))
        .stdout(predicate::str::contains("LAB_TECH"))
        .stdout(predicate::str::contains("CENTRAL_LAB"));
}

#[test]
fn check_json_output_uses_canonical_keys() {
    hl7_obx()
        .arg("check")
        .arg(fixture("cbc_oru.hl7"))
        .args(["--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"OBX.15.1\""))
        .stdout(predicate::str::contains("\"OBX.23.1\""))
        .stdout(predicate::str::contains("PROCESS_ID_001"));
}

#[test]
fn check_missing_file_fails() {
    hl7_obx()
        .arg("check")
        .arg(fixture("no_such_file.hl7"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read message file"));
}

#[test]
fn validate_reports_missing_fields() {
    hl7_obx()
        .arg("validate")
        .arg(fixture("bmp_oru.hl7"))
        .assert()
        .success()
        .stdout(predicate::str::contains("OBX.15.1: Missing"))
        .stdout(predicate::str::contains("Invalid"))
        .stdout(predicate::str::contains("0 of 3 required fields present"));
}

#[test]
fn validate_with_custom_requirements() {
    hl7_obx()
        .arg("validate")
        .arg(fixture("cbc_oru.hl7"))
        .args(["--require", "OBX.15.1", "--require", "OBX.23.1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 of 2 required fields present"));
}

#[test]
fn validate_rejects_unknown_key() {
    hl7_obx()
        .arg("validate")
        .arg(fixture("cbc_oru.hl7"))
        .args(["--require", "OBX.5.1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown OBX field key"));
}
