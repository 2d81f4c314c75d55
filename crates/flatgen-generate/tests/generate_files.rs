use std::fs;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime};

use flatgen_core::{FileFormat, LoadType, RecordCounts, RecordKind};
use flatgen_generate::layout::{claim, layout_for};
use flatgen_generate::{
    GenerateOptions, GenerationEngine, GenerationError, RunRequest, RunState, verify_file,
};

fn temp_out_dir(label: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!(
        "flatgen_generate_{label}_{}",
        uuid::Uuid::new_v4()
    ));
    fs::create_dir_all(&dir).expect("create temp out dir");
    dir
}

fn fixed_clock() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 7)
        .and_then(|date| date.and_hms_opt(9, 5, 1))
        .expect("timestamp")
}

fn engine(out_dir: &Path) -> GenerationEngine {
    GenerationEngine::new(GenerateOptions {
        out_dir: Some(out_dir.to_path_buf()),
        generated_at: Some(fixed_clock()),
        ..GenerateOptions::default()
    })
}

fn request(format: FileFormat, counts: RecordCounts, optional_fields: bool) -> RunRequest {
    RunRequest {
        optional_fields,
        seed: Some(17),
        ..RunRequest::new(format, counts)
    }
}

fn read_rows(path: &Path) -> Vec<Vec<String>> {
    fs::read_to_string(path)
        .expect("read generated file")
        .lines()
        .map(|line| {
            let line = line.strip_suffix('|').expect("line ends with delimiter");
            line.split('|').map(str::to_string).collect()
        })
        .collect()
}

fn claims(claims: u64, lines_per_claim: u64) -> RecordCounts {
    RecordCounts::Claims {
        claims,
        lines_per_claim,
    }
}

#[test]
fn claim_file_holds_two_lines_per_claim_and_per_line() {
    let out_dir = temp_out_dir("claim_count");
    let result = engine(&out_dir)
        .run(&request(FileFormat::Claim, claims(5, 5), false))
        .expect("claim file");

    let rows = read_rows(&result.path);
    assert_eq!(rows.len() - 2, 60);
    assert_eq!(result.report.body_lines, 60);
    assert_eq!(result.report.final_state, RunState::Done.to_string());
    assert_eq!(rows[0][0], "HDR");
    assert_eq!(rows[rows.len() - 1], vec!["TRLR", "60", "CR"]);
}

#[test]
fn record_numbers_run_from_two_without_gaps() {
    let out_dir = temp_out_dir("numbering");
    for (format, counts) in [
        (FileFormat::Eligibility, RecordCounts::Entries(7)),
        (FileFormat::Claim, claims(3, 2)),
        (FileFormat::PlanBenefit, RecordCounts::Entries(4)),
    ] {
        let result = engine(&out_dir)
            .run(&request(format, counts, true))
            .expect("generated file");
        let rows = read_rows(&result.path);
        let body = &rows[1..rows.len() - 1];
        let numbers: Vec<u64> = body
            .iter()
            .map(|row| row[1].parse().expect("numeric record number"))
            .collect();
        let expected: Vec<u64> = (2..2 + body.len() as u64).collect();
        assert_eq!(numbers, expected, "{format} numbering");
    }
}

#[test]
fn claim_children_carry_their_owner_keys() {
    let out_dir = temp_out_dir("linkage");
    let result = engine(&out_dir)
        .run(&request(FileFormat::Claim, claims(4, 3), false))
        .expect("claim file");
    let rows = read_rows(&result.path);

    let claim_key_column = claim::CLAIM
        .iter()
        .position(|field| field.name == "Payer Claim Identification Number")
        .expect("claim key column");

    // CLM, STC, then (DTL, STC) per line.
    let group = 2 + 2 * 3;
    for claim in 0..4 {
        let start = 1 + claim * group;
        let claim_row = &rows[start];
        let claim_key = &claim_row[claim_key_column];
        assert_eq!(claim_row[0], "CLM");
        assert_eq!(rows[start + 1][0], "STC");
        assert_eq!(&rows[start + 1][3], claim_key);
        assert_eq!(rows[start + 1][4], "");
        for line in 0..3 {
            let line_row = &rows[start + 2 + line * 2];
            let status_row = &rows[start + 3 + line * 2];
            assert_eq!(line_row[0], "DTL");
            assert_eq!(&line_row[3], claim_key);
            assert_eq!(status_row[0], "STC");
            assert_eq!(status_row[3], "");
            assert_eq!(status_row[4], line_row[4]);
        }
    }
}

#[test]
fn optional_only_fields_follow_the_flag() {
    for format in FileFormat::ALL {
        let layout = layout_for(format);
        let counts = match format {
            FileFormat::Claim => claims(2, 2),
            _ => RecordCounts::Entries(6),
        };
        for optional_fields in [false, true] {
            let out_dir = temp_out_dir("optional");
            let result = engine(&out_dir)
                .run(&request(format, counts, optional_fields))
                .expect("generated file");
            let rows = read_rows(&result.path);

            for table in layout.body_tables() {
                let record_id = table.kind.record_id();
                let candidates = rows[1..rows.len() - 1]
                    .iter()
                    .filter(|row| row[0] == record_id && row.len() == table.fields.len());
                for row in candidates {
                    for (index, field) in table.fields.iter().enumerate() {
                        if !field.is_optional_only() {
                            continue;
                        }
                        assert_eq!(
                            row[index].is_empty(),
                            !optional_fields,
                            "{format} {} '{}' with optional_fields={optional_fields}",
                            table.kind,
                            field.name
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn zero_entries_write_header_and_zero_trailer() {
    let out_dir = temp_out_dir("zero");
    let result = engine(&out_dir)
        .run(&request(FileFormat::IndividualUsage, RecordCounts::Entries(0), false))
        .expect("empty file");
    let rows = read_rows(&result.path);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1], vec!["TRLR", "0"]);

    let result = engine(&out_dir)
        .run(&request(FileFormat::Claim, claims(0, 5), false))
        .expect("empty claim file");
    let rows = read_rows(&result.path);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1], vec!["TRLR", "0", "CR"]);
}

#[test]
fn splitting_on_newline_yields_body_lines_plus_three_pieces() {
    let cases = [
        (FileFormat::Claim, claims(5, 5), 63),
        (FileFormat::PlanBenefit, RecordCounts::Entries(10), 13),
        (FileFormat::IndividualUsage, RecordCounts::Entries(10), 13),
        (FileFormat::BenefitEntity, RecordCounts::Entries(10), 13),
        (FileFormat::Eligibility, RecordCounts::Entries(10), 13),
    ];

    for (format, counts, pieces) in cases {
        for optional_fields in [false, true] {
            let out_dir = temp_out_dir("line_count");
            let result = engine(&out_dir)
                .run(&request(format, counts, optional_fields))
                .expect("generated file");
            let contents = fs::read_to_string(&result.path).expect("read file");
            assert_eq!(contents.split('\n').count(), pieces, "{format}");
            assert_eq!(contents.lines().count(), pieces - 1, "{format}");
            assert!(contents.ends_with("|\n"), "{format}");
        }
    }
}

#[test]
fn oversized_claim_counts_are_rejected() {
    let out_dir = temp_out_dir("overflow");
    let err = engine(&out_dir)
        .run(&request(FileFormat::Claim, claims(1 << 33, 1 << 32), false))
        .expect_err("line count overflows");
    assert!(matches!(err, GenerationError::InvalidRequest(_)));

    let err = engine(&out_dir)
        .run(&request(FileFormat::Claim, claims(u64::MAX, 0), false))
        .expect_err("claim count overflows");
    assert!(matches!(err, GenerationError::InvalidRequest(_)));
    assert_eq!(fs::read_dir(&out_dir).expect("out dir").count(), 0);
}

#[test]
fn file_names_use_trading_partner_or_payer_id() {
    let out_dir = temp_out_dir("naming");
    let engine = engine(&out_dir);

    let elig = engine
        .run(&request(FileFormat::Eligibility, RecordCounts::Entries(1), false))
        .expect("eligibility file");
    let header = &read_rows(&elig.path)[0];
    assert_eq!(
        elig.report.file_name,
        format!("20240307090501_{}_test.elig31.txt", header[6])
    );

    let bene = engine
        .run(&request(FileFormat::BenefitEntity, RecordCounts::Entries(1), false))
        .expect("benefit entity file");
    assert_eq!(
        bene.report.file_name,
        format!("20240307090501_{}_test.bene", bene.report.payer_id)
    );
    assert!(bene.path.is_absolute());
    assert!(bene.path.starts_with(&out_dir));
}

#[test]
fn dated_directory_is_used_without_out_dir() {
    let root = temp_out_dir("dated");
    let engine = GenerationEngine::new(GenerateOptions {
        output_root: root.clone(),
        generated_at: Some(fixed_clock()),
        ..GenerateOptions::default()
    });
    let result = engine
        .run(&request(FileFormat::PlanBenefit, RecordCounts::Entries(2), false))
        .expect("plan file");
    let parent = result.path.parent().expect("parent dir");
    assert!(parent.ends_with("2024/3/7"));
}

#[test]
fn header_reflects_flags_and_override() {
    let out_dir = temp_out_dir("header");
    let run = RunRequest {
        load_type: LoadType::parse("X"),
        file_validation_code: Some(3),
        ..request(FileFormat::PlanBenefit, RecordCounts::Entries(1), true)
    };
    let result = engine(&out_dir).run(&run).expect("plan file");
    let header = &read_rows(&result.path)[0];
    assert_eq!(header[11], "X");
    assert_eq!(header[13], "Planbene");
    assert_eq!(header[16], "3");
    assert_eq!(header[17], "CR");
    assert_eq!(result.report.file_validation_code, 3);
}

#[test]
fn eligibility_full_load_uses_full_load_actions() {
    let out_dir = temp_out_dir("actions");
    let full = engine(&out_dir)
        .run(&request(FileFormat::Eligibility, RecordCounts::Entries(20), false))
        .expect("full load");
    for row in &read_rows(&full.path)[1..21] {
        assert!(row[3] == "I" || row[3] == "L", "full load action {}", row[3]);
    }

    let change = RunRequest {
        load_type: LoadType::Incremental,
        ..request(FileFormat::Eligibility, RecordCounts::Entries(20), false)
    };
    let change = engine(&temp_out_dir("actions_change"))
        .run(&change)
        .expect("incremental load");
    for row in &read_rows(&change.path)[1..21] {
        assert!(row[3] == "U" || row[3] == "D", "change load action {}", row[3]);
    }
}

#[test]
fn generated_files_pass_verification() {
    for format in FileFormat::ALL {
        let counts = match format {
            FileFormat::Claim => claims(3, 4),
            _ => RecordCounts::Entries(5),
        };
        for optional_fields in [false, true] {
            let out_dir = temp_out_dir("verify");
            let result = engine(&out_dir)
                .run(&request(format, counts, optional_fields))
                .expect("generated file");
            let report = verify_file(&result.path, format).expect("verification report");
            assert!(report.is_ok(), "{format}: {:?}", report.issues);
            assert_eq!(report.body_lines as u64, result.report.body_lines);
        }
    }
}

#[test]
fn verification_flags_tampered_numbering() {
    let out_dir = temp_out_dir("tamper");
    let result = engine(&out_dir)
        .run(&request(FileFormat::Claim, claims(2, 1), false))
        .expect("claim file");
    let contents = fs::read_to_string(&result.path).expect("read file");
    let tampered = contents.replacen("|2|", "|9|", 1);
    fs::write(&result.path, tampered).expect("rewrite file");
    let report = verify_file(&result.path, FileFormat::Claim).expect("verification report");
    assert!(report.issues.iter().any(|issue| issue.code == "record_number"));
}

#[test]
fn mismatched_counts_are_rejected() {
    let out_dir = temp_out_dir("mismatch");
    let err = engine(&out_dir)
        .run(&request(FileFormat::Claim, RecordCounts::Entries(3), false))
        .expect_err("claim needs claim counts");
    assert!(matches!(err, GenerationError::InvalidRequest(_)));

    let err = engine(&out_dir)
        .run(&request(FileFormat::Eligibility, claims(1, 1), false))
        .expect_err("eligibility needs entries");
    assert!(matches!(err, GenerationError::InvalidRequest(_)));
}

#[test]
fn report_lists_rows_per_kind() {
    let out_dir = temp_out_dir("report");
    let options = GenerateOptions {
        out_dir: Some(out_dir.clone()),
        generated_at: Some(fixed_clock()),
        write_report: true,
        ..GenerateOptions::default()
    };
    let result = GenerationEngine::new(options)
        .run(&request(FileFormat::Claim, claims(2, 3), false))
        .expect("claim file");
    let kinds = &result.report.records_by_kind;
    assert_eq!(kinds.get(RecordKind::ClaimLevel.as_str()), Some(&2));
    assert_eq!(kinds.get(RecordKind::ClaimStatus.as_str()), Some(&2));
    assert_eq!(kinds.get(RecordKind::LineLevel.as_str()), Some(&6));
    assert_eq!(kinds.get(RecordKind::LineStatus.as_str()), Some(&6));

    let mut report_path = result.path.clone().into_os_string();
    report_path.push(".report.json");
    let json = fs::read_to_string(PathBuf::from(report_path)).expect("report json");
    assert!(json.contains("\"body_lines\": 16"));
}
