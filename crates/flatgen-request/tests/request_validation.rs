use std::fs;
use std::path::Path;

use serde_json::json;

use flatgen_core::{FileFormat, LoadType, RecordCounts};
use flatgen_request::{
    request_json_schema_value, validate_request, validate_request_document, validate_request_json,
};

fn load_json(path: &Path) -> serde_json::Value {
    let contents =
        fs::read_to_string(path).unwrap_or_else(|_| panic!("missing json at {}", path.display()));
    serde_json::from_str(&contents).expect("parse json")
}

fn schema() -> serde_json::Value {
    request_json_schema_value().expect("request schema")
}

#[test]
fn sample_request_validates_against_schema() {
    let request_path =
        Path::new(env!("CARGO_MANIFEST_DIR")).join("../../requests/all_formats.request.json");
    let request_json = load_json(&request_path);

    let structural = validate_request_json(&request_json, &schema()).expect("compile schema");
    assert!(structural.errors.is_empty(), "structural errors found");

    let validated =
        validate_request_document(&request_json, &schema()).expect("request should validate");
    assert!(validated.warnings.is_empty(), "unexpected warnings");
    assert_eq!(validated.request.runs.len(), 5);

    let runs = validated
        .request
        .run_requests(&LoadType::Full)
        .expect("run requests");
    assert_eq!(runs[0].format, FileFormat::Eligibility);
    assert_eq!(
        runs[1].counts,
        RecordCounts::Claims {
            claims: 5,
            lines_per_claim: 5
        }
    );
    assert_eq!(runs[3].file_validation_code, Some(3));
}

#[test]
fn unknown_format_is_a_schema_violation() {
    let request_json = json!({ "runs": [{ "format": "remittance", "entries": 3 }] });

    let report = validate_request_json(&request_json, &schema()).expect("compile schema");
    assert!(!report.is_ok());
    assert!(
        report
            .errors
            .iter()
            .all(|issue| issue.code == "schema_violation")
    );
    assert!(
        report
            .errors
            .iter()
            .any(|issue| issue.path.starts_with("/runs/0"))
    );
}

#[test]
fn missing_counts_are_errors() {
    let request_json = json!({
        "runs": [
            { "format": "plan-benefit" },
            { "format": "claim", "claims": 2 }
        ]
    });

    let report = validate_request_document(&request_json, &schema()).expect_err("counts missing");
    let codes: Vec<_> = report.errors.iter().map(|issue| issue.code.as_str()).collect();
    assert_eq!(codes, vec!["counts_missing", "counts_missing"]);
    assert_eq!(report.errors[1].path, "/runs/1");
}

#[test]
fn validation_code_above_five_is_an_error() {
    let request_json = json!({
        "runs": [{ "format": "eligibility", "entries": 1, "file_validation_code": 6 }]
    });

    let report = validate_request_document(&request_json, &schema()).expect_err("code too high");
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].code, "file_validation_code_out_of_range");
    assert_eq!(report.errors[0].path, "/runs/0/file_validation_code");
}

#[test]
fn unknown_load_type_and_zero_counts_only_warn() {
    let request_json = json!({
        "runs": [
            { "format": "individual-usage", "entries": 0, "load_type": "X" },
            { "format": "claim", "claims": 1, "lines_per_claim": 0, "entries": 4 }
        ]
    });

    let validated =
        validate_request_document(&request_json, &schema()).expect("warnings do not fail");
    let codes: Vec<_> = validated
        .warnings
        .iter()
        .map(|issue| issue.code.as_str())
        .collect();
    assert_eq!(
        codes,
        vec![
            "count_zero",
            "load_type_unrecognized",
            "count_zero",
            "count_unused"
        ]
    );

    let runs = validated
        .request
        .run_requests(&LoadType::Full)
        .expect("run requests");
    assert_eq!(runs[0].load_type, LoadType::Other("X".to_string()));
}

#[test]
fn empty_request_is_rejected() {
    let request = serde_json::from_value(json!({ "runs": [] })).expect("parse request");
    let report = validate_request(&request);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].code, "runs_empty");
}
