//! Per-format record layouts.

pub mod benefit_entity;
pub mod claim;
pub mod eligibility;
pub mod individual_usage;
pub mod plan_benefit;

use flatgen_core::{FileFormat, RecordKind, Topology};

use crate::errors::GenerationError;
use crate::policy::{FieldSpec, Presence, Source};
use crate::schema::{FieldTable, field_table};

/// Header columns shared by every format, before the format's own tail.
pub static HEADER_PREFIX: &[FieldSpec] = &[
    FieldSpec::literal("Record Id", "HDR"),
    FieldSpec::always("File Group ID", Source::Alphanumeric(10)),
    FieldSpec::literal("File Group Sequence Number", "1"),
    FieldSpec::literal("File Group Count", "1"),
    FieldSpec::always("Creation Date", Source::Date(1980, 2019)),
    FieldSpec::always("Creation Time", Source::TimeOfDay),
    FieldSpec::always("Trading Partner ID", Source::Alphanumeric(10)),
    FieldSpec::always("Submitter Name", Source::FirstName),
    FieldSpec::optional("Payer Contact Name", Source::FirstName),
    FieldSpec::optional("Payer Support Telephone Number", Source::Phone),
    FieldSpec::optional("Payer Support Email Address", Source::Email),
    FieldSpec::always("Load Type", Source::LoadType),
    FieldSpec::always("Payer Unique File Identifier", Source::GeneratedAt),
    FieldSpec::always("File Type", Source::FileTypeTag),
    FieldSpec::literal("Version Code", "03"),
];

/// File validation code used when the request does not override it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationDefault {
    /// Fixed code when optional fields are requested, random `0..=5` otherwise.
    WhenOptional(u8),
    Random,
}

impl ValidationDefault {
    pub fn resolve(self, optional_fields: bool, draw: impl FnOnce() -> u8) -> u8 {
        match self {
            ValidationDefault::WhenOptional(code) if optional_fields => code,
            _ => draw(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum BodyLayout {
    Flat {
        detail: &'static [FieldSpec],
    },
    Nested {
        claim: &'static [FieldSpec],
        claim_status: &'static [FieldSpec],
        line: &'static [FieldSpec],
        line_status: &'static [FieldSpec],
    },
}

/// One body record kind with the kind that owns its rows.
#[derive(Debug, Clone)]
pub struct BodyTable {
    pub kind: RecordKind,
    pub fields: FieldTable,
    pub parent: Option<RecordKind>,
}

#[derive(Debug, Clone, Copy)]
pub struct FormatLayout {
    pub format: FileFormat,
    pub header: [&'static [FieldSpec]; 2],
    pub body: BodyLayout,
    pub trailer: &'static [FieldSpec],
    pub validation_default: ValidationDefault,
}

impl FormatLayout {
    pub fn topology(&self) -> Topology {
        match self.body {
            BodyLayout::Flat { .. } => Topology::Flat,
            BodyLayout::Nested { .. } => Topology::Nested,
        }
    }

    pub fn header_fields(&self) -> FieldTable {
        field_table(&self.header)
    }

    pub fn trailer_fields(&self) -> FieldTable {
        field_table(&[self.trailer])
    }

    /// Body tables in evaluation order: owners before the rows they own.
    pub fn body_tables(&self) -> Vec<BodyTable> {
        match self.body {
            BodyLayout::Flat { detail } => vec![BodyTable {
                kind: RecordKind::Detail,
                fields: field_table(&[detail]),
                parent: None,
            }],
            BodyLayout::Nested {
                claim,
                claim_status,
                line,
                line_status,
            } => vec![
                BodyTable {
                    kind: RecordKind::ClaimLevel,
                    fields: field_table(&[claim]),
                    parent: None,
                },
                BodyTable {
                    kind: RecordKind::ClaimStatus,
                    fields: field_table(&[claim_status]),
                    parent: Some(RecordKind::ClaimLevel),
                },
                BodyTable {
                    kind: RecordKind::LineLevel,
                    fields: field_table(&[line]),
                    parent: Some(RecordKind::ClaimLevel),
                },
                BodyTable {
                    kind: RecordKind::LineStatus,
                    fields: field_table(&[line_status]),
                    parent: Some(RecordKind::LineLevel),
                },
            ],
        }
    }
}

pub fn layout_for(format: FileFormat) -> FormatLayout {
    match format {
        FileFormat::Eligibility => eligibility::layout(),
        FileFormat::Claim => claim::layout(),
        FileFormat::IndividualUsage => individual_usage::layout(),
        FileFormat::PlanBenefit => plan_benefit::layout(),
        FileFormat::BenefitEntity => benefit_entity::layout(),
    }
}

/// Reject layouts whose fields read values that are not computed yet.
///
/// Sibling reads must name an earlier field of the same table, header reads a
/// header field, and parent reads a field of the owning table. A source gated
/// on a different owner kind is never taken, so its parent reads are skipped.
/// Code sets a field draws from must hold at least one value.
pub fn check_evaluation_order(layout: &FormatLayout) -> Result<(), GenerationError> {
    let header = layout.header_fields();
    check_table(RecordKind::Header, &header, &[], None)?;

    let bodies = layout.body_tables();
    for table in &bodies {
        let parent = match table.parent {
            Some(kind) => {
                let owner = bodies.iter().find(|body| body.kind == kind).ok_or_else(|| {
                    GenerationError::InvalidLayout(format!(
                        "{} rows are owned by missing kind {kind}",
                        table.kind
                    ))
                })?;
                Some((kind, owner.fields.as_slice()))
            }
            None => None,
        };
        check_table(table.kind, &table.fields, &header, parent)?;
    }

    check_table(RecordKind::Trailer, &layout.trailer_fields(), &header, None)
}

fn check_table(
    kind: RecordKind,
    fields: &[&'static FieldSpec],
    header: &[&'static FieldSpec],
    parent: Option<(RecordKind, &[&'static FieldSpec])>,
) -> Result<(), GenerationError> {
    for (index, field) in fields.iter().enumerate() {
        let earlier = &fields[..index];
        for read in field.sibling_reads() {
            if !earlier.iter().any(|candidate| candidate.name == read) {
                return Err(GenerationError::InvalidLayout(format!(
                    "{kind} field '{}' reads '{read}' which is not an earlier field",
                    field.name
                )));
            }
        }
        if let Some(set) = field.empty_codes().first() {
            return Err(GenerationError::InvalidLayout(format!(
                "{kind} field '{}' draws from empty code set '{set}'",
                field.name
            )));
        }
        for read in field.header_reads() {
            if !header.iter().any(|candidate| candidate.name == read) {
                return Err(GenerationError::InvalidLayout(format!(
                    "{kind} field '{}' reads unknown header field '{read}'",
                    field.name
                )));
            }
        }

        let mut parent_reads = Vec::new();
        let source_taken = match field.presence {
            Presence::ParentIs(owner) => parent.is_some_and(|(actual, _)| actual == owner),
            _ => true,
        };
        if source_taken {
            field.source.parent_reads(&mut parent_reads);
        }
        field.otherwise.parent_reads(&mut parent_reads);
        for read in parent_reads {
            let Some((owner, owner_fields)) = parent else {
                return Err(GenerationError::InvalidLayout(format!(
                    "{kind} field '{}' reads parent field '{read}' but has no parent",
                    field.name
                )));
            };
            if !owner_fields.iter().any(|candidate| candidate.name == read) {
                return Err(GenerationError::InvalidLayout(format!(
                    "{kind} field '{}' reads '{read}' which {owner} rows do not carry",
                    field.name
                )));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codesets::CodeSet;

    #[test]
    fn every_shipped_layout_is_ordered() {
        for format in FileFormat::ALL {
            let layout = layout_for(format);
            check_evaluation_order(&layout)
                .unwrap_or_else(|err| panic!("{format} layout rejected: {err}"));
            assert_eq!(layout.topology(), format.topology());
        }
    }

    #[test]
    fn forward_sibling_read_is_rejected() {
        static DETAIL: &[FieldSpec] = &[
            FieldSpec::always("Copy", Source::Sibling("Original")),
            FieldSpec::always("Original", Source::Alphanumeric(4)),
        ];
        static TRAILER: &[FieldSpec] = &[FieldSpec::literal("RecordID", "TRLR")];
        let layout = FormatLayout {
            format: FileFormat::Eligibility,
            header: [HEADER_PREFIX, &[]],
            body: BodyLayout::Flat { detail: DETAIL },
            trailer: TRAILER,
            validation_default: ValidationDefault::Random,
        };
        let err = check_evaluation_order(&layout).expect_err("forward read");
        assert!(err.to_string().contains("Original"));
    }

    #[test]
    fn unknown_header_read_is_rejected() {
        static DETAIL: &[FieldSpec] = &[FieldSpec::when(
            "Reason",
            Presence::HeaderEquals("Missing Indicator", "Y"),
            Source::Literal("1"),
        )];
        let layout = FormatLayout {
            format: FileFormat::Eligibility,
            header: [HEADER_PREFIX, &[]],
            body: BodyLayout::Flat { detail: DETAIL },
            trailer: &[],
            validation_default: ValidationDefault::Random,
        };
        assert!(check_evaluation_order(&layout).is_err());
    }

    #[test]
    fn flat_rows_cannot_read_a_parent() {
        static DETAIL: &[FieldSpec] = &[FieldSpec::always("Key", Source::Parent("Key"))];
        let layout = FormatLayout {
            format: FileFormat::Eligibility,
            header: [HEADER_PREFIX, &[]],
            body: BodyLayout::Flat { detail: DETAIL },
            trailer: &[],
            validation_default: ValidationDefault::Random,
        };
        assert!(check_evaluation_order(&layout).is_err());
    }

    #[test]
    fn empty_code_set_is_rejected() {
        static NOTHING: CodeSet = CodeSet::new("nothing", &[]);
        static DETAIL: &[FieldSpec] = &[FieldSpec::optional(
            "Pick",
            Source::Joined {
                parts: &[Source::Literal("x"), Source::Choice(&NOTHING)],
                separator: "-",
            },
        )];
        let layout = FormatLayout {
            format: FileFormat::Eligibility,
            header: [HEADER_PREFIX, &[]],
            body: BodyLayout::Flat { detail: DETAIL },
            trailer: &[],
            validation_default: ValidationDefault::Random,
        };
        let err = check_evaluation_order(&layout).expect_err("empty set");
        assert!(err.to_string().contains("'nothing'"));
    }

    #[test]
    fn validation_default_prefers_fixed_code_only_with_optional_fields() {
        let fixed = ValidationDefault::WhenOptional(5);
        assert_eq!(fixed.resolve(true, || 0), 5);
        assert_eq!(fixed.resolve(false, || 3), 3);
        assert_eq!(ValidationDefault::Random.resolve(true, || 1), 1);
    }

    #[test]
    fn claim_header_has_record_terminator_but_no_validation_code() {
        let header = layout_for(FileFormat::Claim).header_fields();
        let names: Vec<_> = header.iter().map(|field| field.name).collect();
        assert_eq!(names.last(), Some(&"Record Terminator"));
        assert!(!names.contains(&"File Validation Code"));
    }
}
