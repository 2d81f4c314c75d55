//! Claim status file (`CStat`). Claims own lines, and both carry status rows.

use flatgen_core::{FileFormat, RecordKind};

use super::{BodyLayout, FormatLayout, HEADER_PREFIX, ValidationDefault};
use crate::codesets::NAME_PREFIX;
use crate::codesets::claim::{
    ENTITY, MAINTENANCE_TYPE, PATIENT_GENDER, SERVICE_QUALIFIER, STATUS_CATEGORY, STATUS_CODE,
};
use crate::policy::{FieldSpec as F, Presence, Source};

const TAX_ID: Source = Source::Int(111_111_111, 999_999_999);
const AMOUNT: Source = Source::Int(-111_111_111, 999_999_999);

pub fn layout() -> FormatLayout {
    FormatLayout {
        format: FileFormat::Claim,
        header: [HEADER_PREFIX, HEADER_TAIL],
        body: BodyLayout::Nested {
            claim: CLAIM,
            claim_status: STATUS,
            line: LINE,
            line_status: STATUS,
        },
        trailer: TRAILER,
        validation_default: ValidationDefault::Random,
    }
}

pub static HEADER_TAIL: &[F] = &[
    F::literal("Release Code", "00"),
    F::literal("Record Terminator", "CR"),
];

pub static CLAIM: &[F] = &[
    F::literal("Record ID", "CLM"),
    F::always("Record Number", Source::RecordNumber),
    F::always("Payer ID", Source::PayerId),
    F::always("Maintenance Type Code", Source::Choice(&MAINTENANCE_TYPE)),
    F::always("Billing Provider Federal Tax ID", TAX_ID),
    F::empty("Billing Provider Payer Assigned Number"),
    F::empty("Billing Provider National Provider ID"),
    F::optional("Billing Provider Last Name (or Org Name)", Source::LastName),
    F::optional("Billing Provider First Name", Source::FirstName),
    F::optional("Billing Provider Middle Name", Source::FirstName),
    F::optional("Billing Provider Name Suffix", Source::Choice(&NAME_PREFIX)),
    F::optional("Service Provider Federal Tax ID", TAX_ID)
        .or(Source::Sibling("Billing Provider Federal Tax ID")),
    F::empty("Service Provider Payer Assigned Number"),
    F::optional("Service Provider National Provider ID", TAX_ID),
    F::optional("Service Provider Last Name (or Org Name)", Source::LastName),
    F::optional("Service Provider First Name", Source::FirstName),
    F::optional("Service Provider Middle Name", Source::FirstName),
    F::optional("Service Provider Name Suffix", Source::Choice(&NAME_PREFIX)),
    F::optional(
        "Employer Identification Number",
        Source::Joined {
            parts: &[Source::Int(11, 99), Source::Int(1_111_111, 9_999_999)],
            separator: "-",
        },
    ),
    F::optional("Employer Name", Source::FirstName),
    F::optional("Subscriber ID", Source::Alphanumeric(10)),
    F::optional("Subscriber Last Name", Source::LastName),
    F::optional("Subscriber First Name", Source::FirstName),
    F::optional("Subscriber Middle Name", Source::FirstName),
    F::optional("Subscriber Name Suffix", Source::Choice(&NAME_PREFIX)),
    F::optional("Patient ID", Source::Alphanumeric(10)),
    F::always("Patient Last Name", Source::LastName),
    F::always("Patient First Name", Source::FirstName),
    F::optional("Patient Middle Name", Source::FirstName),
    F::optional("Patient Name Suffix", Source::Choice(&NAME_PREFIX)),
    F::always("Patient Date of Birth", Source::Date(1930, 2019)),
    F::optional("Patient Gender", Source::Choice(&PATIENT_GENDER)),
    F::optional("EMDEON Claim Number", Source::Alphanumeric(10)),
    F::optional("Claim Charge Amount", AMOUNT),
    F::optional("Claim Payment Amount", AMOUNT),
    F::optional("Claim Adjudication/Payment Date", Source::Date(2010, 2020)),
    F::optional("Check/EFT Date", Source::Date(2010, 2020)),
    F::optional("Check/EFT Number", AMOUNT),
    F::optional(
        "Bill Type",
        Source::Joined {
            parts: &[Source::Int(1, 9), Source::Int(10, 19)],
            separator: "",
        },
    ),
    F::always("Payer Claim Identification Number", Source::Alphanumeric(10)),
    F::optional("Patient Account Number", Source::Alphanumeric(10)),
    F::optional("Pharmacy Prescription Number", Source::Alphanumeric(10)),
    F::optional("Voucher Identifier", Source::Alphanumeric(10)),
    F::optional(
        "Application or Location System Identifier",
        Source::Alphanumeric(10),
    ),
    F::optional("Group Number", Source::Alphanumeric(10)),
    F::optional("Claim Service Date Start", Source::Date(2000, 2010)),
    F::optional("Claim Service Date End", Source::Date(2010, 2020)),
    F::literal("Record Terminator", "CR"),
];

pub static LINE: &[F] = &[
    F::literal("Record ID", "DTL"),
    F::always("Record Number", Source::RecordNumber),
    F::always("Payer ID", Source::PayerId),
    F::always(
        "Payer Claim Identification Number",
        Source::Parent("Payer Claim Identification Number"),
    ),
    F::always("Line Item Control Number", Source::Alphanumeric(10)),
    F::always("Service Qualifier ID", Source::Choice(&SERVICE_QUALIFIER)),
    F::always("Service Identification Code", Source::Alphanumeric(10)),
    F::empty("Procedure Modifier 1"),
    F::empty("Procedure Modifier 2"),
    F::empty("Procedure Modifier 3"),
    F::empty("Procedure Modifier 4"),
    F::always("Line Item Charge Amount", AMOUNT),
    F::always("Line Item Provider Payment Amount", AMOUNT),
    F::optional("Revenue Code", Source::Int(111_111, 999_999)),
    F::always("Quantity(Units of Service)", Source::Int(1, 10)),
    F::optional("EMDEON Claim Number", Source::Alphanumeric(10)),
    F::always("Date of Service Start", Source::Date(2000, 2010)),
    F::always("Date of Service End", Source::Date(2010, 2020)),
    F::literal("Record Terminator", "CR"),
];

/// Status rows follow either a claim or a line; only the owner's key is copied.
pub static STATUS: &[F] = &[
    F::literal("Record ID", "STC"),
    F::always("Record Number", Source::RecordNumber),
    F::always("Payer ID", Source::PayerId),
    F::when(
        "Payer Claim Identification Number",
        Presence::ParentIs(RecordKind::ClaimLevel),
        Source::Parent("Payer Claim Identification Number"),
    ),
    F::when(
        "Line Item Control Number",
        Presence::ParentIs(RecordKind::LineLevel),
        Source::Parent("Line Item Control Number"),
    ),
    F::always("Status Information Effective Date", Source::DateAhead(10)),
    F::optional("Claim Status Category Code", Source::Literal("F1"))
        .or(Source::Choice(&STATUS_CATEGORY)),
    F::always("Claim Status Code", Source::Choice(&STATUS_CODE)),
    F::always("Entity Code", Source::Choice(&ENTITY)),
    F::empty("Data in Error"),
    F::empty("Emdeon Status Code"),
    F::literal("Record Terminator", "CR"),
];

pub static TRAILER: &[F] = &[
    F::literal("RecordID", "TRLR"),
    F::always("Record Number", Source::BodyCount),
    F::literal("Record Terminator", "CR"),
];
