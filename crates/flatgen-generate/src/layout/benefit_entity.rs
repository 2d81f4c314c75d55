//! Standard benefit entity file (`Planbene`, `.bene`).

use flatgen_core::FileFormat;

use super::{BodyLayout, FormatLayout, HEADER_PREFIX, ValidationDefault};
use crate::codesets::NAME_SUFFIX;
use crate::codesets::benefit_entity::{
    COMMUNICATION_QUALIFIER, EMPLOYER_SIZE, PRIMARY_COMMUNICATION_QUALIFIER,
};
use crate::policy::{FieldSpec as F, Presence, Source};

pub fn layout() -> FormatLayout {
    FormatLayout {
        format: FileFormat::BenefitEntity,
        header: [HEADER_PREFIX, HEADER_TAIL],
        body: BodyLayout::Flat { detail: DETAIL },
        trailer: TRAILER,
        validation_default: ValidationDefault::WhenOptional(2),
    }
}

pub static HEADER_TAIL: &[F] = &[
    F::literal("Release Code", "00"),
    F::always("File Validation Code", Source::ValidationCode),
    F::literal("Record Terminator", "CR"),
];

pub static DETAIL: &[F] = &[
    F::literal("Record Id", "DTL"),
    F::always("Record Number", Source::RecordNumber),
    F::always("Payer ID", Source::PayerId),
    F::literal("Maintenance Type Code", "030"),
    F::flag("Correction Indicator"),
    F::empty("Benefit Entity Employers Identification Number"),
    F::empty("Benefit Entity SSN"),
    F::empty("Benefit Entity ETIN"),
    F::empty("Benefit Entity Facility Identification"),
    F::empty("Benefit Entity Tax Identification"),
    F::empty("Benefit Entity Member Identification"),
    F::empty("Benefit Entity NAIC Identification"),
    F::empty("Benefit Entity Payer Identification"),
    F::empty("Benefit Entity Pharmacy Processor Number Identification"),
    F::empty("Benefit Entity Service Provider Number Identification"),
    F::empty("Benefit Entity CMS Plan Identification"),
    F::always(
        "Benefit Entity National Provider Identification",
        Source::Int(1_111_111_111, 9_999_999_999),
    ),
    F::optional("Benefit Entity Last Name (or Org Name)", Source::LastName),
    F::optional("Benefit Entity First Name", Source::FirstName),
    F::optional("Benefit Entity Middle Name", Source::LastName),
    F::optional("Benefit Entity Name Suffix", Source::Choice(&NAME_SUFFIX)),
    F::optional("Benefit Entity Address Line 1", Source::StreetAddress),
    F::optional("Benefit Entity Address Line 2", Source::StreetAddress),
    F::optional("Benefit Entity City", Source::City),
    F::optional("Benefit Entity State", Source::StateAbbr),
    F::optional("Benefit Entity Zip Code", Source::PostalCode),
    F::optional("Benefit Entity Contact Name", Source::FirstName),
    F::when(
        "Benefit Entity Communication Qualifier1",
        Presence::All(&[Presence::ValidationCodeIn(&[2, 5]), Presence::OptionalFields]),
        Source::Literal("TE"),
    )
    .or(Source::Choice(&PRIMARY_COMMUNICATION_QUALIFIER)),
    F::optional("Benefit Entity Communication Number1", Source::Phone),
    F::optional(
        "Benefit Entity Communication Qualifier2",
        Source::Choice(&COMMUNICATION_QUALIFIER),
    ),
    F::optional("Benefit Entity Communication Number2", Source::Phone),
    F::optional(
        "Benefit Entity Communication Qualifier3",
        Source::Choice(&COMMUNICATION_QUALIFIER),
    ),
    F::optional("Benefit Entity Communication Number3", Source::Phone),
    F::empty("Benefit Entity Taxonomy"),
    F::optional("Rx Bank Identification Number (BIN)", Source::Int(111_111, 999_999)),
    F::always("Employer Size", Source::Choice(&EMPLOYER_SIZE)),
    F::always(
        "Benefit Entity Pseudo Tax Identification",
        Source::Int(111_111_111, 999_999_999),
    ),
    F::empty("Record Terminator "),
];

pub static TRAILER: &[F] = &[
    F::literal("RecordID", "TRLR"),
    F::always("Record Count", Source::BodyCount),
    F::literal("Record Terminator ", "CR"),
];
