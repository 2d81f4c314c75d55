use flatgen_core::{
    ControlFlags, Error, FileFormat, LoadType, NameSource, RecordCounts, RecordKind, Topology,
};

#[test]
fn formats_carry_reference_tags_and_extensions() {
    let expected = [
        (FileFormat::Eligibility, "Elig", ".elig31.txt"),
        (FileFormat::Claim, "CStat", ".cstat"),
        (FileFormat::IndividualUsage, "IndiUsag", ".indi"),
        (FileFormat::PlanBenefit, "Planbene", ".plan"),
        (FileFormat::BenefitEntity, "Planbene", ".bene"),
    ];

    for (format, tag, extension) in expected {
        assert_eq!(format.file_type_tag(), tag, "tag for {format}");
        assert_eq!(format.extension(), extension, "extension for {format}");
        assert!(format.file_suffix().starts_with("test"));
    }
}

#[test]
fn only_claim_files_are_nested() {
    for format in FileFormat::ALL {
        let expected = if format == FileFormat::Claim {
            Topology::Nested
        } else {
            Topology::Flat
        };
        assert_eq!(format.topology(), expected);
    }
}

#[test]
fn name_source_follows_format() {
    assert_eq!(
        FileFormat::Eligibility.name_source(),
        NameSource::TradingPartner
    );
    assert_eq!(
        FileFormat::IndividualUsage.name_source(),
        NameSource::TradingPartner
    );
    assert_eq!(FileFormat::Claim.name_source(), NameSource::Payer);
    assert_eq!(FileFormat::PlanBenefit.name_source(), NameSource::Payer);
    assert_eq!(FileFormat::BenefitEntity.name_source(), NameSource::Payer);
}

#[test]
fn format_parses_from_slug() {
    for format in FileFormat::ALL {
        let parsed: FileFormat = format.slug().parse().expect("parse slug");
        assert_eq!(parsed, format);
    }
    let parsed: FileFormat = "Plan_Benefit".parse().expect("parse mixed case");
    assert_eq!(parsed, FileFormat::PlanBenefit);
    assert!(matches!(
        "edi".parse::<FileFormat>(),
        Err(Error::UnknownFormat(_))
    ));
}

#[test]
fn unknown_load_type_is_kept_verbatim() {
    let load_type = LoadType::parse("H");
    assert_eq!(load_type, LoadType::Other("H".to_string()));
    assert!(!load_type.is_recognized());
    assert_eq!(load_type.as_str(), "H");

    let json = serde_json::to_string(&LoadType::Full).expect("serialize load type");
    assert_eq!(json, "\"F\"");
    let parsed: LoadType = serde_json::from_str("\"I\"").expect("deserialize load type");
    assert_eq!(parsed, LoadType::Incremental);
}

#[test]
fn validation_code_above_five_is_rejected() {
    let err = ControlFlags::new(LoadType::Full, false, 6, RecordCounts::Entries(1))
        .expect_err("code 6 must be rejected");
    assert!(matches!(err, Error::InvalidFlags(_)));

    let flags = ControlFlags::new(LoadType::Full, true, 5, RecordCounts::Entries(1))
        .expect("code 5 is valid");
    assert!(flags.validation_code_in(&[2, 5]));
    assert!(!flags.validation_code_in(&[1, 3]));
}

#[test]
fn nested_body_line_count_matches_claim_arithmetic() {
    assert_eq!(Topology::Nested.body_lines(5, 5), Some(60));
    assert_eq!(Topology::Nested.body_lines(0, 5), Some(0));
    assert_eq!(Topology::Flat.body_lines(7, 0), Some(7));

    let counts = RecordCounts::Claims {
        claims: 3,
        lines_per_claim: 2,
    };
    assert_eq!(counts.primary(), 3);
    assert_eq!(counts.children(), 2);
}

#[test]
fn nested_body_line_count_reports_overflow() {
    assert_eq!(Topology::Nested.body_lines(1 << 33, 1 << 32), None);
    assert_eq!(Topology::Nested.body_lines(u64::MAX, 0), None);
    assert_eq!(Topology::Flat.body_lines(u64::MAX, 0), Some(u64::MAX));
}

#[test]
fn record_ids_match_line_markers() {
    assert_eq!(RecordKind::Header.record_id(), "HDR");
    assert_eq!(RecordKind::ClaimLevel.record_id(), "CLM");
    assert_eq!(RecordKind::ClaimStatus.record_id(), "STC");
    assert_eq!(RecordKind::LineStatus.record_id(), "STC");
    assert_eq!(RecordKind::LineLevel.record_id(), "DTL");
    assert_eq!(RecordKind::Trailer.record_id(), "TRLR");
}
