//! Individual usage benefit file (`IndiUsag`).

use flatgen_core::FileFormat;

use super::{BodyLayout, FormatLayout, HEADER_PREFIX, ValidationDefault};
use crate::codesets::individual_usage::{
    BENEFIT_ENTITY_ID_QUALIFIER, BENEFIT_ENTITY_IDENTIFIER, BENEFIT_ENTITY_ROLE,
    BENEFIT_INFORMATION, DELIVERY_PATTERN, DELIVERY_PERIOD, INJURY, INJURY_QUALIFIER,
    INSURANCE_TYPE, MAINTENANCE_TYPE, QUANTITY_QUALIFIER, SERVICE_TYPE, TIME_PERIOD,
};
use crate::codesets::{
    COVERAGE_LEVEL, DELIVERY_QUANTITY_QUALIFIER, DELIVERY_TIME, FACILITY_TYPE,
    MEDICAL_ASSISTANCE_CATEGORY, NETWORK_INDICATOR, YES_NO,
};
use crate::policy::{FieldSpec as F, Presence, Source};

const BENEFIT_CODES: &[u8] = &[1, 2, 4, 5];
const SERVICE_CODES: &[u8] = &[1, 4, 5];

pub fn layout() -> FormatLayout {
    FormatLayout {
        format: FileFormat::IndividualUsage,
        header: [HEADER_PREFIX, HEADER_TAIL],
        body: BodyLayout::Flat { detail: DETAIL },
        trailer: TRAILER,
        validation_default: ValidationDefault::Random,
    }
}

pub static HEADER_TAIL: &[F] = &[
    F::literal("Release Code", "00"),
    F::always("File Validation Code", Source::ValidationCode),
];

pub static DETAIL: &[F] = &[
    F::literal("Record ID", "DTL"),
    F::always("Record Number", Source::RecordNumber),
    F::always("Payer ID", Source::PayerId),
    F::always("Maintenance Type Code", Source::Choice(&MAINTENANCE_TYPE)),
    F::optional("Patient ID", Source::Alphanumeric(10)),
    F::always("Subscriber ID", Source::Alphanumeric(10)),
    F::when(
        "Benefit Information",
        Presence::ValidationCodeIn(BENEFIT_CODES),
        Source::Choice(&BENEFIT_INFORMATION),
    ),
    F::optional("Coverage Level Code", Source::Choice(&COVERAGE_LEVEL)),
    F::when(
        "Service Type Code",
        Presence::ValidationCodeIn(SERVICE_CODES),
        Source::Choice(&SERVICE_TYPE),
    ),
    F::optional("Insurance Type Code", Source::Choice(&INSURANCE_TYPE)),
    F::empty("Procedure Qualifier"),
    F::empty("Procedure Code"),
    F::empty("Procedure Range End"),
    F::empty("Procedure Modifier 1"),
    F::empty("Procedure Modifier 2"),
    F::empty("Procedure Modifier 3"),
    F::empty("Procedure Modifier 4"),
    F::optional("Plan Coverage Description", Source::Sentence),
    F::optional("Time Period Qualifier", Source::Choice(&TIME_PERIOD)),
    F::optional("Benefit Amount", Source::Int(11_111, 99_999)),
    F::optional("Benefit Percentage", Source::Percentage),
    F::optional("Quantity Qualifier", Source::Choice(&QUANTITY_QUALIFIER)),
    F::optional("Quantity", Source::Int(1, 99_999)),
    F::optional("Authorization/Certification Indicator", Source::Choice(&YES_NO)),
    F::optional("In Plan Network Indicator", Source::Choice(&NETWORK_INDICATOR)),
    F::always("Member Plan Number", Source::Alphanumeric(10)),
    F::optional("Member Group Number", Source::Alphanumeric(10)),
    F::empty("Benefit Message 1"),
    F::empty("Benefit Message 2"),
    F::empty("Benefit Message 3"),
    F::empty("Benefit Message 4"),
    F::empty("Benefit Message 5"),
    F::optional("Nature of Injury Code Qualifier", Source::Choice(&INJURY_QUALIFIER)),
    F::optional("Nature of Injury Code", Source::TableCode(&INJURY)),
    F::optional(
        "Injured Body Part Name",
        Source::TableLookup {
            table: &INJURY,
            key: "Nature of Injury Code",
        },
    ),
    F::optional("Facility Type Code", Source::Choice(&FACILITY_TYPE)),
    F::optional("Alternative List ID", Source::Alphanumeric(10)),
    F::optional("Coverage List ID", Source::Alphanumeric(10)),
    F::optional("Drug Formulary Number", Source::Alphanumeric(5)),
    F::always(
        "Medical Assistance Category",
        Source::Choice(&MEDICAL_ASSISTANCE_CATEGORY),
    ),
    F::always("Benefit Begin Date", Source::Date(2000, 2010)),
    F::optional("Benefit End Date", Source::Date(2010, 2020)),
    F::when(
        "Benefit Entity Identifier",
        Presence::ValidationCodeIn(BENEFIT_CODES),
        Source::Choice(&BENEFIT_ENTITY_IDENTIFIER),
    ),
    F::optional("Benefit Entity ID", Source::Alphanumeric(10)),
    F::when(
        "Benefit Entity ID Qualifier",
        Presence::ValidationCodeIn(BENEFIT_CODES),
        Source::Choice(&BENEFIT_ENTITY_ID_QUALIFIER),
    ),
    F::optional("Benefit Entity Role", Source::Choice(&BENEFIT_ENTITY_ROLE)),
    F::optional(
        "Delivery Quantity Qualifier",
        Source::Choice(&DELIVERY_QUANTITY_QUALIFIER),
    ),
    F::optional("Delivery Quantity", Source::Int(1, 50)),
    F::optional(
        "Delivery Sampling Frequency Qualifier",
        Source::Choice(&DELIVERY_QUANTITY_QUALIFIER),
    ),
    F::optional("Delivery Sampling Frequency", Source::Int(1, 10)),
    F::optional("Delivery Period Qualifier", Source::Choice(&DELIVERY_PERIOD)),
    F::optional("Delivery Period Count", Source::Int(1, 50)),
    F::optional("Delivery Pattern Code", Source::Choice(&DELIVERY_PATTERN)),
    F::optional("Delivery Time Code", Source::Choice(&DELIVERY_TIME)),
];

pub static TRAILER: &[F] = &[
    F::literal("RecordID", "TRLR"),
    F::always("Record Count", Source::BodyCount),
];
