use jsonschema::JSONSchema;
use serde_json::Value;

use flatgen_core::{MAX_FILE_VALIDATION_CODE, Topology};

use crate::errors::{RequestError, ValidationIssue, ValidationReport};
use crate::model::{GenerationRequest, RunSpec, required_counts};

/// Validated request with accumulated warnings.
#[derive(Debug, Clone)]
pub struct ValidatedRequest {
    pub request: GenerationRequest,
    pub warnings: Vec<ValidationIssue>,
}

/// Validate a request JSON document against the request JSON Schema.
pub fn validate_request_json(
    request_json: &Value,
    request_schema: &Value,
) -> Result<ValidationReport, RequestError> {
    let compiled = JSONSchema::compile(request_schema)
        .map_err(|err| RequestError::Schema(err.to_string()))?;

    let mut report = ValidationReport::default();

    if let Err(errors) = compiled.validate(request_json) {
        for error in errors {
            let path = normalized_json_pointer(&error.instance_path.to_string());
            report.push_error(ValidationIssue::error(
                "schema_violation",
                path,
                error.to_string(),
            ));
        }
    }

    Ok(report)
}

/// Semantic checks on a parsed request.
pub fn validate_request(request: &GenerationRequest) -> ValidationReport {
    let mut report = ValidationReport::default();

    if request.runs.is_empty() {
        report.push_error(
            ValidationIssue::error("runs_empty", "/runs", "request has no runs")
                .with_hint("add at least one run"),
        );
    }

    for (idx, run) in request.runs.iter().enumerate() {
        validate_run(run, &format!("/runs/{idx}"), &mut report);
    }

    report
}

/// Validate the request end-to-end, returning structured issues on failure.
pub fn validate_request_document(
    request_json: &Value,
    request_schema: &Value,
) -> Result<ValidatedRequest, ValidationReport> {
    let structural = match validate_request_json(request_json, request_schema) {
        Ok(report) => report,
        Err(err) => {
            let mut report = ValidationReport::default();
            report.push_error(ValidationIssue::error(
                "schema_validation_error",
                "/",
                err.to_string(),
            ));
            return Err(report);
        }
    };

    if !structural.is_ok() {
        return Err(structural);
    }

    let request: GenerationRequest = match serde_json::from_value(request_json.clone()) {
        Ok(request) => request,
        Err(err) => {
            let mut report = ValidationReport::default();
            report.push_error(ValidationIssue::error(
                "invalid_request_json",
                "/",
                err.to_string(),
            ));
            return Err(report);
        }
    };

    let semantic = validate_request(&request);
    if !semantic.is_ok() {
        return Err(semantic);
    }

    Ok(ValidatedRequest {
        request,
        warnings: semantic.warnings,
    })
}

fn validate_run(run: &RunSpec, base_path: &str, report: &mut ValidationReport) {
    match run.counts() {
        None => report.push_error(
            ValidationIssue::error(
                "counts_missing",
                base_path,
                format!("{} files need {}", run.format, required_counts(run.format)),
            )
            .with_hint(format!("set {}", required_counts(run.format))),
        ),
        Some(counts) => {
            if counts.primary() == 0 {
                report.push_warning(ValidationIssue::warning(
                    "count_zero",
                    base_path,
                    "run produces a header and trailer only",
                ));
            } else if run.format.topology() == Topology::Nested && counts.children() == 0 {
                report.push_warning(ValidationIssue::warning(
                    "count_zero",
                    format!("{base_path}/lines_per_claim"),
                    "claims will have no line records",
                ));
            }
        }
    }

    let unused = match run.format.topology() {
        Topology::Flat => [
            ("claims", run.claims.is_some()),
            ("lines_per_claim", run.lines_per_claim.is_some()),
        ]
        .to_vec(),
        Topology::Nested => [("entries", run.entries.is_some())].to_vec(),
    };
    for (field, present) in unused {
        if present {
            report.push_warning(ValidationIssue::warning(
                "count_unused",
                format!("{base_path}/{field}"),
                format!("{field} is ignored for {} files", run.format),
            ));
        }
    }

    if let Some(code) = run.file_validation_code {
        if code > MAX_FILE_VALIDATION_CODE {
            report.push_error(
                ValidationIssue::error(
                    "file_validation_code_out_of_range",
                    format!("{base_path}/file_validation_code"),
                    format!("file validation code {code} is above {MAX_FILE_VALIDATION_CODE}"),
                )
                .with_hint(format!("use a value in 0..={MAX_FILE_VALIDATION_CODE}")),
            );
        }
    }

    if let Some(load_type) = &run.load_type {
        if !load_type.is_recognized() {
            report.push_warning(
                ValidationIssue::warning(
                    "load_type_unrecognized",
                    format!("{base_path}/load_type"),
                    format!("load type '{load_type}' is written verbatim"),
                )
                .with_hint("use F, I or D"),
            );
        }
    }
}

fn normalized_json_pointer(pointer: &str) -> String {
    if pointer.is_empty() {
        "/".to_string()
    } else {
        pointer.to_string()
    }
}
