//! Structural checks over a generated file.
//!
//! The verifier only trusts the bytes on disk: it re-reads the file, maps each
//! line to its record kind through the record id, and checks numbering,
//! counts and parent/child linkage against the format layout.

use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Terminator};
use regex::Regex;
use serde::Serialize;

use flatgen_core::{FileFormat, RecordKind, Topology};

use crate::errors::GenerationError;
use crate::layout::{FormatLayout, layout_for};
use crate::output::pipe::DELIMITER;
use crate::policy::{FieldSpec, Source};
use crate::schema::FieldTable;
use crate::sequencer::FIRST_BODY_RECORD_NUMBER;

const CLAIM_KEY: &str = "Payer Claim Identification Number";
const LINE_KEY: &str = "Line Item Control Number";

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct VerifyIssue {
    /// One-based line number, 0 for whole-file issues.
    pub line: usize,
    pub code: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct VerificationReport {
    pub format: FileFormat,
    pub lines: usize,
    pub body_lines: usize,
    pub issues: Vec<VerifyIssue>,
}

impl VerificationReport {
    pub fn is_ok(&self) -> bool {
        self.issues.is_empty()
    }

    fn push(&mut self, line: usize, code: &str, message: impl Into<String>) {
        self.issues.push(VerifyIssue {
            line,
            code: code.to_string(),
            message: message.into(),
        });
    }
}

pub fn verify_file(path: &Path, format: FileFormat) -> Result<VerificationReport, GenerationError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .delimiter(DELIMITER)
        .terminator(Terminator::Any(b'\n'))
        .from_path(path)?;
    let mut records = Vec::new();
    for record in reader.records() {
        records.push(strip_trailing_delimiter(record?));
    }
    verify_records(format, &records)
}

/// Every line ends with a delimiter, which reads back as one empty field.
fn strip_trailing_delimiter(record: StringRecord) -> Vec<String> {
    let mut fields: Vec<String> = record.iter().map(str::to_string).collect();
    if fields.last().is_some_and(String::is_empty) {
        fields.pop();
    }
    fields
}

pub fn verify_records(
    format: FileFormat,
    records: &[Vec<String>],
) -> Result<VerificationReport, GenerationError> {
    let layout = layout_for(format);
    let mut report = VerificationReport {
        format,
        lines: records.len(),
        body_lines: records.len().saturating_sub(2),
        issues: Vec::new(),
    };
    if records.len() < 2 {
        report.push(0, "too_short", "file must hold a header and a trailer");
        return Ok(report);
    }

    let last = records.len() - 1;
    check_header(&layout, &records[0], &mut report)?;
    check_trailer(&layout, &records[last], report.body_lines, last + 1, &mut report);

    let kinds = Kinds::new(&layout);
    let body = &records[1..last];
    match layout.topology() {
        Topology::Flat => check_flat(&kinds, body, &mut report),
        Topology::Nested => check_nested(&kinds, body, &mut report),
    }
    Ok(report)
}

fn check_header(
    layout: &FormatLayout,
    header: &[String],
    report: &mut VerificationReport,
) -> Result<(), GenerationError> {
    let fields = layout.header_fields();
    check_width(RecordKind::Header, &fields, header, 1, report);
    if header.first().map(String::as_str) != Some(RecordKind::Header.record_id()) {
        report.push(1, "header_marker", "first line is not a header record");
    }

    let date = compile(r"^\d{8}$")?;
    let time = compile(r"^\d{6}$")?;
    let stamp = compile(r"^\d{14}$")?;
    let checks: [(&str, &Regex); 3] = [
        ("Creation Date", &date),
        ("Creation Time", &time),
        ("Payer Unique File Identifier", &stamp),
    ];
    for (name, pattern) in checks {
        match field(&fields, header, name) {
            Some(value) if pattern.is_match(value) => {}
            Some(value) => report.push(1, "header_format", format!("{name} '{value}' is malformed")),
            None => report.push(1, "header_format", format!("{name} is missing")),
        }
    }
    if field(&fields, header, "File Type") != Some(layout.format.file_type_tag()) {
        report.push(
            1,
            "file_type",
            format!("File Type is not '{}'", layout.format.file_type_tag()),
        );
    }
    Ok(())
}

fn check_trailer(
    layout: &FormatLayout,
    trailer: &[String],
    body_lines: usize,
    line: usize,
    report: &mut VerificationReport,
) {
    let fields = layout.trailer_fields();
    check_width(RecordKind::Trailer, &fields, trailer, line, report);
    if trailer.first().map(String::as_str) != Some(RecordKind::Trailer.record_id()) {
        report.push(line, "trailer_marker", "last line is not a trailer record");
    }
    let count_column = fields
        .iter()
        .position(|spec| matches!(spec.source, Source::BodyCount));
    let count = count_column.and_then(|column| trailer.get(column));
    if count.and_then(|value| value.parse::<usize>().ok()) != Some(body_lines) {
        report.push(
            line,
            "trailer_count",
            format!("trailer count {count:?} does not match {body_lines} body lines"),
        );
    }
}

fn check_flat(kinds: &Kinds, body: &[Vec<String>], report: &mut VerificationReport) {
    let Some(detail) = kinds.get(RecordKind::Detail) else {
        return;
    };
    let mut numbers = Numbering::default();
    for (offset, record) in body.iter().enumerate() {
        let line = offset + 2;
        if record.first().map(String::as_str) != Some(RecordKind::Detail.record_id()) {
            report.push(line, "record_id", "body line is not a detail record");
            continue;
        }
        check_width(RecordKind::Detail, detail, record, line, report);
        numbers.check(detail, record, line, report);
    }
}

/// Expected position inside the nested grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Expect {
    Claim,
    ClaimStatus,
    /// Line or the next claim.
    LineOrClaim,
    LineStatus,
}

fn check_nested(kinds: &Kinds, body: &[Vec<String>], report: &mut VerificationReport) {
    let mut numbers = Numbering::default();
    let mut expect = Expect::Claim;
    let mut claim_key: Option<String> = None;
    let mut line_key: Option<String> = None;
    let mut lines_in_claim = 0_usize;
    let mut lines_per_claim: Option<usize> = None;

    for (offset, record) in body.iter().enumerate() {
        let line = offset + 2;
        let id = record.first().map(String::as_str).unwrap_or_default();
        let kind = match (expect, id) {
            (Expect::Claim | Expect::LineOrClaim, "CLM") => RecordKind::ClaimLevel,
            (Expect::ClaimStatus, "STC") => RecordKind::ClaimStatus,
            (Expect::LineOrClaim, "DTL") => RecordKind::LineLevel,
            (Expect::LineStatus, "STC") => RecordKind::LineStatus,
            _ => {
                report.push(
                    line,
                    "grouping",
                    format!("unexpected '{id}' record while expecting {expect:?}"),
                );
                continue;
            }
        };
        let Some(fields) = kinds.get(kind) else {
            continue;
        };
        check_width(kind, fields, record, line, report);
        numbers.check(fields, record, line, report);

        match kind {
            RecordKind::ClaimLevel => {
                if claim_key.is_some() {
                    close_claim(lines_in_claim, &mut lines_per_claim, line, report);
                }
                claim_key = field(fields, record, CLAIM_KEY).map(str::to_string);
                lines_in_claim = 0;
                expect = Expect::ClaimStatus;
            }
            RecordKind::ClaimStatus => {
                if field(fields, record, CLAIM_KEY) != claim_key.as_deref() {
                    report.push(line, "linkage", "claim status does not carry its claim key");
                }
                expect = Expect::LineOrClaim;
            }
            RecordKind::LineLevel => {
                if field(fields, record, CLAIM_KEY) != claim_key.as_deref() {
                    report.push(line, "linkage", "line does not carry its claim key");
                }
                line_key = field(fields, record, LINE_KEY).map(str::to_string);
                lines_in_claim += 1;
                expect = Expect::LineStatus;
            }
            RecordKind::LineStatus => {
                if field(fields, record, LINE_KEY) != line_key.as_deref() {
                    report.push(line, "linkage", "line status does not carry its line key");
                }
                expect = Expect::LineOrClaim;
            }
            _ => {}
        }
    }

    if !body.is_empty() && expect != Expect::LineOrClaim {
        report.push(body.len() + 1, "grouping", "body ends inside a claim group");
    }
    if claim_key.is_some() {
        close_claim(lines_in_claim, &mut lines_per_claim, body.len() + 1, report);
    }
}

fn close_claim(
    lines_in_claim: usize,
    lines_per_claim: &mut Option<usize>,
    line: usize,
    report: &mut VerificationReport,
) {
    match lines_per_claim {
        Some(expected) if *expected != lines_in_claim => report.push(
            line,
            "grouping",
            format!("claim holds {lines_in_claim} lines, earlier claims hold {expected}"),
        ),
        Some(_) => {}
        None => *lines_per_claim = Some(lines_in_claim),
    }
}

/// Record numbers must run 2, 3, 4, ... across every body line.
#[derive(Debug)]
struct Numbering {
    next: u64,
}

impl Default for Numbering {
    fn default() -> Self {
        Self {
            next: FIRST_BODY_RECORD_NUMBER,
        }
    }
}

impl Numbering {
    fn check(
        &mut self,
        fields: &[&'static FieldSpec],
        record: &[String],
        line: usize,
        report: &mut VerificationReport,
    ) {
        let column = fields
            .iter()
            .position(|spec| matches!(spec.source, Source::RecordNumber));
        let value = column.and_then(|column| record.get(column));
        match value.and_then(|value| value.parse::<u64>().ok()) {
            Some(number) if number == self.next => {}
            Some(number) => report.push(
                line,
                "record_number",
                format!("record number {number}, expected {}", self.next),
            ),
            None => report.push(line, "record_number", "record number is missing"),
        }
        self.next += 1;
    }
}

struct Kinds {
    tables: Vec<(RecordKind, FieldTable)>,
}

impl Kinds {
    fn new(layout: &FormatLayout) -> Self {
        Self {
            tables: layout
                .body_tables()
                .into_iter()
                .map(|table| (table.kind, table.fields))
                .collect(),
        }
    }

    fn get(&self, kind: RecordKind) -> Option<&[&'static FieldSpec]> {
        self.tables
            .iter()
            .find(|(candidate, _)| *candidate == kind)
            .map(|(_, fields)| fields.as_slice())
    }
}

fn check_width(
    kind: RecordKind,
    fields: &[&'static FieldSpec],
    record: &[String],
    line: usize,
    report: &mut VerificationReport,
) {
    if record.len() != fields.len() {
        report.push(
            line,
            "field_count",
            format!("{kind} record has {} fields, expected {}", record.len(), fields.len()),
        );
    }
}

fn field<'a>(fields: &[&'static FieldSpec], record: &'a [String], name: &str) -> Option<&'a str> {
    fields
        .iter()
        .position(|spec| spec.name == name)
        .and_then(|index| record.get(index))
        .map(String::as_str)
}

fn compile(pattern: &str) -> Result<Regex, GenerationError> {
    Regex::new(pattern).map_err(|err| GenerationError::InvalidPattern(format!("'{pattern}': {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn short_files_are_rejected() {
        let report = verify_records(FileFormat::Eligibility, &[row(&["HDR"])]).expect("report");
        assert!(!report.is_ok());
        assert_eq!(report.issues[0].code, "too_short");
    }

    #[test]
    fn trailer_count_mismatch_is_reported() {
        let layout = layout_for(FileFormat::IndividualUsage);
        let mut header: Vec<String> = vec![String::new(); layout.header_fields().len()];
        header[0] = "HDR".to_string();
        let trailer = row(&["TRLR", "3"]);
        let report =
            verify_records(FileFormat::IndividualUsage, &[header, trailer]).expect("report");
        assert!(report.issues.iter().any(|issue| issue.code == "trailer_count"));
        assert!(report.issues.iter().any(|issue| issue.code == "header_format"));
    }
}
