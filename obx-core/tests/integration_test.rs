// HL7 OBX integration tests
//
// This file contains end-to-end tests over the sample message fixtures.

use std::fs;
use std::path::Path;
use std::time::Instant;

use obx_core::{parse, report, validate};

fn load_fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);

    fs::read_to_string(path).expect("Failed to read fixture file")
}

#[test]
fn test_fixture_corpus_exists() {
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures");

    for name in [
        "complete_oru.hl7",
        "incomplete_oru.hl7",
        "complex_oru.hl7",
        "adt_a08.hl7",
        "international.hl7",
    ] {
        assert!(fixtures.join(name).exists(), "missing fixture {}", name);
    }
}

#[test]
fn test_end_to_end_workflow() {
    let message = load_fixture("complete_oru.hl7");

    let results = parse(&message).unwrap();
    let summary = validate(&results, None);

    assert!(summary.is_valid);
    assert!(!results.producer_institution.is_empty());
    assert!(!results.producer_name.is_empty());
    assert!(!results.process_id.is_empty());

    let rendered = report(&results);
    assert!(rendered.contains("LAB_TECH"));
}

#[test]
fn test_batch_processing() {
    // Batch processing is repeated independent invocation; outcomes differ
    // per message but no call affects another
    let complete = parse(&load_fixture("complete_oru.hl7")).unwrap();
    let incomplete = parse(&load_fixture("incomplete_oru.hl7")).unwrap();
    let complex = parse(&load_fixture("complex_oru.hl7")).unwrap();

    assert!(!complete.producer_institution.is_empty());
    assert!(incomplete.producer_institution.is_empty());
    assert!(!complex.producer_institution.is_empty());
}

#[test]
fn test_parse_is_deterministic() {
    let message = load_fixture("complete_oru.hl7");

    assert_eq!(parse(&message).unwrap(), parse(&message).unwrap());
}

#[test]
fn test_json_rendering_matches_serde_shape() {
    let results = parse(&load_fixture("complete_oru.hl7")).unwrap();

    assert_eq!(results.to_json(), serde_json::to_value(&results).unwrap());
}

#[test]
fn test_large_message_performance() {
    let mut message = load_fixture("complete_oru.hl7");
    let bulk_obx = "OBX|4|NM|2345-7^GLUCOSE^LN||100|mg/dL|70-100|N|||F|||20240815143000|LAB_TECH^TECHNICIAN_NAME||||||||BULK_PROC^4|";

    for _ in 0..100 {
        message.push('\n');
        message.push_str(bulk_obx);
    }

    let start = Instant::now();
    let results = parse(&message).unwrap();
    let elapsed = start.elapsed();

    assert!(results.producer_institution.len() > 100);
    assert_eq!(results.producer_institution.len(), 103);
    assert!(
        elapsed.as_secs_f64() < 1.0,
        "parsing took {:?}, expected well under a second",
        elapsed
    );
}
