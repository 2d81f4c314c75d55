//! Plan benefit file (`Planbene`, `.plan`).
//!
//! Three column names carry a trailing space in the published layout and are
//! kept that way.

use flatgen_core::FileFormat;

use super::{BodyLayout, FormatLayout, HEADER_PREFIX, ValidationDefault};
use crate::codesets::plan_benefit::{
    AUTHORIZATION, BENEFIT_INFORMATION, BODY_PART, DELIVERY_PATTERN, DELIVERY_PERIOD,
    INSURANCE_TYPE, NATURE_OF_INJURY, PROCEDURE_QUALIFIER, QUANTITY_QUALIFIER,
    SAMPLING_FREQUENCY_QUALIFIER, SERVICE_TYPE, TIME_PERIOD,
};
use crate::codesets::{
    COVERAGE_LEVEL, DELIVERY_QUANTITY_QUALIFIER, DELIVERY_TIME, FACILITY_TYPE,
    MEDICAL_ASSISTANCE_CATEGORY, NETWORK_INDICATOR,
};
use crate::policy::{FieldSpec as F, Source};

pub fn layout() -> FormatLayout {
    FormatLayout {
        format: FileFormat::PlanBenefit,
        header: [HEADER_PREFIX, HEADER_TAIL],
        body: BodyLayout::Flat { detail: DETAIL },
        trailer: TRAILER,
        validation_default: ValidationDefault::WhenOptional(5),
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
    F::always("Member Plan Number", Source::Alphanumeric(10)),
    F::optional("Member Group Number", Source::Alphanumeric(10)),
    F::always("Benefit Information", Source::Choice(&BENEFIT_INFORMATION)),
    F::always("Service Type Code", Source::Choice(&SERVICE_TYPE)),
    F::optional("Coverage Level Code", Source::Choice(&COVERAGE_LEVEL)),
    F::optional("Insurance Type Code", Source::Choice(&INSURANCE_TYPE)),
    F::optional("Procedure Qualifier", Source::Choice(&PROCEDURE_QUALIFIER)),
    F::optional("Procedure Code", Source::Alphanumeric(5)),
    F::optional("Procedure Range End", Source::Alphanumeric(5)),
    F::empty("Procedure Modifier 1"),
    F::empty("Procedure Modifier 2"),
    F::empty("Procedure Modifier 3"),
    F::empty("Procedure Modifier 4"),
    F::optional("Plan Coverage Description", Source::Sentence),
    F::optional("Time Period Qualifier", Source::Choice(&TIME_PERIOD)),
    F::optional("Benefit Amount", Source::Int(1, 9_999_999)),
    F::optional("Benefit Percentage", Source::Percentage),
    F::optional("Quantity Qualifier", Source::Choice(&QUANTITY_QUALIFIER)),
    F::optional("Quantity", Source::Int(1, 9_999_999)),
    F::optional("Authorization/Certification Indicator", Source::Choice(&AUTHORIZATION)),
    F::optional("In Plan Network Indicator", Source::Choice(&NETWORK_INDICATOR)),
    F::optional("Benefits Effective Date", Source::Date(2010, 2015)),
    F::optional("Benefits Termination Date", Source::Date(2015, 2020)),
    F::optional("Benefit Message 1", Source::Sentence),
    F::optional("Benefit Message 2", Source::Sentence),
    F::optional("Benefit Message 3", Source::Sentence),
    F::optional("Benefit Message 4", Source::Sentence),
    F::optional("Benefit Message 5", Source::Sentence),
    F::optional(
        "Nature of Injury Code Qualifier",
        Source::TableCode(&NATURE_OF_INJURY),
    ),
    F::optional(
        "Nature of Injury Code",
        Source::TableLookup {
            table: &NATURE_OF_INJURY,
            key: "Nature of Injury Code Qualifier",
        },
    ),
    F::optional("Injured Body Part Name", Source::Choice(&BODY_PART)),
    F::optional("Facility Type Code", Source::Choice(&FACILITY_TYPE)),
    F::optional("Alternative List ID", Source::Alphanumeric(10)),
    F::optional("Coverage List ID", Source::Alphanumeric(10)),
    F::optional("Drug Formulary Number", Source::Alphanumeric(5)),
    F::always(
        "Medical Assistance Category",
        Source::Choice(&MEDICAL_ASSISTANCE_CATEGORY),
    ),
    F::optional(
        "Delivery Quantity Qualifier",
        Source::Choice(&DELIVERY_QUANTITY_QUALIFIER),
    ),
    F::optional("Delivery Quantity", Source::Int(1, 50)),
    F::optional(
        "Delivery Sampling Frequency Qualifier",
        Source::Choice(&SAMPLING_FREQUENCY_QUALIFIER),
    ),
    F::optional("Delivery Sampling Frequency", Source::Int(1, 10)),
    F::optional("Delivery Period Qualifier", Source::Choice(&DELIVERY_PERIOD)),
    F::optional("Delivery Period Count ", Source::Int(1, 10)),
    F::optional("Delivery Pattern Code ", Source::Choice(&DELIVERY_PATTERN)),
    F::optional("Delivery Time Code", Source::Choice(&DELIVERY_TIME)),
    F::literal("Record Terminator ", "CR"),
];

pub static TRAILER: &[F] = &[
    F::literal("RecordID", "TRLR"),
    F::always("Record Count", Source::BodyCount),
    F::literal("Record Terminator ", "CR"),
];
