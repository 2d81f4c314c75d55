//! Eligibility roster (`Elig`, release 01).

use flatgen_core::FileFormat;

use super::{BodyLayout, FormatLayout, HEADER_PREFIX, ValidationDefault};
use crate::codesets::eligibility::{
    ACTION_CHANGE_LOAD, ACTION_FULL_LOAD, DISABILITY_TYPE, EMPLOYEE_STATUS, EMPLOYMENT_CLASS,
    GENDER, HEALTH_RELATED, INCOME_FREQUENCY, LANGUAGE_QUALIFIER, MAINTENANCE_REASON,
    MEMBER_STATUS, MILITARY_AFFILIATION, MILITARY_INFORMATION_STATUS, MILITARY_RANK,
    MILITARY_STATUS, MILITARY_UNIT, ONE_TO_FIVE, ONE_TO_THREE, RELATIONSHIP,
    ROSTER_RELATIONSHIP, STUDENT_STATUS,
};
use crate::codesets::{NAME_PREFIX, NAME_SUFFIX, YES_NO};
use crate::policy::{Arm, FieldSpec as F, Presence, Source};

const EMPLOYER_CODES: &[u8] = &[1, 2, 4, 5];
const GROUP_CODES: &[u8] = &[2, 5];
const MEDICARE_CODES: &[u8] = &[3, 4, 5];

pub fn layout() -> FormatLayout {
    FormatLayout {
        format: FileFormat::Eligibility,
        header: [HEADER_PREFIX, HEADER_TAIL],
        body: BodyLayout::Flat { detail: DETAIL },
        trailer: TRAILER,
        validation_default: ValidationDefault::WhenOptional(5),
    }
}

pub static HEADER_TAIL: &[F] = &[
    F::literal("Release Code", "01"),
    F::always("File Validation Code", Source::ValidationCode),
    F::flag("Rosters Indicator"),
];

static EMPLOYEE_STATUS_ARMS: [Arm; 2] = [
    Arm {
        when: Presence::OptionalFields,
        then: Source::Literal("CO"),
    },
    Arm {
        when: Presence::ValidationCodeIn(EMPLOYER_CODES),
        then: Source::Choice(&EMPLOYEE_STATUS),
    },
];

pub static DETAIL: &[F] = &[
    F::literal("Record Id", "DTL"),
    F::always("Record Number", Source::RecordNumber),
    F::always("Payer ID", Source::PayerId),
    F::when("Action Indicator", Presence::FullLoad, Source::Choice(&ACTION_FULL_LOAD))
        .or(Source::Choice(&ACTION_CHANGE_LOAD)),
    F::when(
        "Maintenance Reason Code",
        Presence::HeaderEquals("Rosters Indicator", "Y"),
        Source::Choice(&MAINTENANCE_REASON),
    ),
    F::flag("Correction Indicator"),
    F::always("Primary Subscriber ID", Source::Alphanumeric(10)),
    F::optional("Unique Patient ID (UPID)", Source::Alphanumeric(10)),
    F::when(
        "Member Relationship to Subscriber",
        Presence::HeaderEquals("Rosters Indicator", "N"),
        Source::Choice(&RELATIONSHIP),
    )
    .or(Source::Choice(&ROSTER_RELATIONSHIP)),
    F::always("Member Date of Birth", Source::Date(1930, 2019)),
    F::always("Member Last Name", Source::LastName),
    F::always("Member First Name", Source::FirstName),
    F::optional("Member Middle Name", Source::FirstName),
    F::optional("Member Name Prefix", Source::Choice(&NAME_PREFIX)),
    F::optional("Member Name Suffix", Source::Choice(&NAME_SUFFIX)),
    F::always("Member Gender", Source::Choice(&GENDER)),
    F::always("Member Street Address 1", Source::StreetAddress),
    F::optional("Member Street Address 2", Source::StreetAddress),
    F::optional("Member City", Source::City),
    F::optional("Member State", Source::StateAbbr),
    F::optional("Member ZIP Code", Source::ZipCode),
    F::optional("Member Country", Source::CountryAlpha3),
    F::optional("Member Country Subdivision", Source::Province),
    F::optional("Member Work Phone", Source::Phone),
    F::optional("Member Home Phone", Source::Phone),
    F::always("Member Plan Effective Date", Source::Date(1930, 2019)),
    F::optional("Member Plan Termination Date", Source::Date(2000, 2030)),
    F::always("Member Plan Number", Source::Alphanumeric(10)),
    F::optional("Member Plan Name", Source::Indexed("Plan")),
    F::when(
        "Member Group Number",
        Presence::ValidationCodeIn(GROUP_CODES),
        Source::Alphanumeric(10),
    ),
    F::optional("Member Group Name", Source::Indexed("Group")),
    F::when(
        "Member Insurance Policy Number",
        Presence::ValidationCodeIn(GROUP_CODES),
        Source::Pattern("[A-Za-z]{2}[0-9]{5}[A-Za-z]{2}"),
    ),
    F::optional("Member Insurance Policy Effective Date", Source::Date(1950, 2020)),
    F::optional("Member Insurance Policy Expiration Date", Source::Date(2020, 2030)),
    F::always("Member Status Code", Source::Choice(&MEMBER_STATUS)),
    F::optional(
        "Member Social Security Number",
        Source::Int(111_111_111, 1_000_000_000),
    ),
    F::when(
        "Health Insurance Claim (HIC) Number",
        Presence::ValidationCodeIn(MEDICARE_CODES),
        Source::Digits(10),
    ),
    F::optional(
        "Member Identity Card Number",
        Source::Joined {
            parts: &[Source::Int(11_111, 100_000), Source::Int(111_111, 1_000_000)],
            separator: "",
        },
    ),
    F::optional("Member Identity Card Serial Number", Source::StateAbbr),
    F::optional("Member Plan Network Identification Number", Source::Alphanumeric(10)),
    F::optional("Member Plan Network Name", Source::Indexed("Network Name")),
    F::optional("Secondary Subscriber ID", Source::Alphanumeric(10)),
    F::optional("Tertiary Subscriber ID", Source::Alphanumeric(10)),
    F::optional("Current Medicaid Recipient ID Number", Source::Alphanumeric(10)),
    F::optional("Original Medicaid Recipient ID Number", Source::Alphanumeric(10)),
    F::optional("Member Family Unit Number", Source::Choice(&ONE_TO_FIVE)),
    F::optional("Member Birth Sequence Number", Source::Choice(&ONE_TO_FIVE)),
    F::optional("Case Number", Source::Alphanumeric(10)),
    F::optional("Contract Number", Source::Alphanumeric(10)),
    F::optional("Medical Record Identification Number", Source::Alphanumeric(10)),
    F::optional("Issue Number", Source::Alphanumeric(10)),
    F::optional("Issue Date", Source::Date(2000, 2020)),
    F::optional("Care Management Eligible LOag", Source::Literal("Y")),
    F::optional("Authorization Indicator", Source::Choice(&YES_NO)),
    F::optional("Member Student Status", Source::Choice(&STUDENT_STATUS)),
    F::optional("Member Handicap Status", Source::Choice(&YES_NO)),
    F::optional("Disability type", Source::Choice(&DISABILITY_TYPE)),
    F::optional("Date of Death", Source::Date(2000, 2020)),
    F::optional("Period Start Date", Source::Date(1950, 2000)),
    F::optional("Period End Date", Source::Date(2000, 2020)),
    F::optional("Premium Paid To Start Date", Source::Date(1950, 2000)),
    F::optional("Premium Paid To End Date", Source::Date(2000, 2020)),
    F::optional("Message", Source::Sentence),
    F::literal("Medical Plan Indicator", "Y"),
    F::flag("Dental Plan Indicator"),
    F::literal("Prescription Plan Indicator", "Y"),
    F::flag("Vision Plan Indicator"),
    F::flag("Hospital Plan Indicator"),
    F::flag("Behavioral / Mental Health Plan Indicator"),
    F::flag("TRICARE Plan Indicator"),
    F::flag("Retiree Drug Subsidy Plan Indicator"),
    F::flag("Taft-Hartley Plan Indicator"),
    F::flag("HSA Account Indicator"),
    F::flag("HRA Account Indicator"),
    F::flag("FSA Account Indicator"),
    F::optional("Medicare Plan Code", Source::Literal("E")),
    F::optional("Medicare Eligibility Reason Code", Source::Literal("2")),
    F::when(
        "ESRD Coordination Period End Date",
        Presence::FieldEquals("Medicare Eligibility Reason Code", "2"),
        Source::Date(1980, 2019),
    ),
    F::optional("Premium Amount", Source::Int(111_111_111, 1_000_000_000)),
    F::optional("Rx Group Number", Source::Alphanumeric(10)),
    F::optional("Rx Insured ID Number", Source::Alphanumeric(10)),
    F::always("Rx Plan Network Indicator", Source::Choice(&ONE_TO_THREE)),
    F::optional("Small Employer Exception Indicator", Source::Choice(&YES_NO))
        .or(Source::Literal("N")),
    F::when(
        "Employee Coverage Code",
        Presence::ValidationCodeIn(EMPLOYER_CODES),
        Source::Choice(&ONE_TO_THREE),
    ),
    F::always("Employee Status Code", Source::FirstOf(&EMPLOYEE_STATUS_ARMS)),
    F::optional("COBRA Begin Date", Source::Date(1960, 2000)),
    F::optional("COBRA End Date", Source::Date(2000, 2020)),
    F::optional("Employment Class Code", Source::Choice(&EMPLOYMENT_CLASS)),
    F::optional("Member Income Frequency", Source::Choice(&INCOME_FREQUENCY)),
    F::optional("Member Income", Source::Int(111_111_111, 1_000_000_000)),
    F::when(
        "RRE ID",
        Presence::All(&[
            Presence::ValidationCodeIn(EMPLOYER_CODES),
            Presence::FieldNotIn("Medicare Plan Code", &["E", "F"]),
        ]),
        Source::Alphanumeric(10),
    ),
    F::when(
        "COBA ID",
        Presence::All(&[
            Presence::ValidationCodeIn(MEDICARE_CODES),
            Presence::FieldEquals("Medicare Plan Code", "E"),
        ]),
        Source::Alphanumeric(10),
    ),
    F::when(
        "RDS Application Number",
        Presence::All(&[
            Presence::ValidationCodeIn(GROUP_CODES),
            Presence::FieldEquals("Retiree Drug Subsidy Plan Indicator", "Y"),
        ]),
        Source::Alphanumeric(10),
    ),
    F::optional(
        "Military Information Status Code",
        Source::Choice(&MILITARY_INFORMATION_STATUS),
    ),
    F::optional("Military Status Code", Source::Choice(&MILITARY_STATUS)),
    F::optional("Military Service Affiliation Code", Source::Choice(&MILITARY_AFFILIATION)),
    F::optional("Military Unit", Source::Choice(&MILITARY_UNIT)),
    F::optional("Military Service Rank Code", Source::Choice(&MILITARY_RANK)),
    F::optional("Military Service Start Date", Source::Date(1950, 1999)),
    F::optional("Military Service End Date", Source::Date(2000, 2020)),
    F::optional("Health-related Code", Source::Choice(&HEALTH_RELATED)),
    // Height carries the weight draw and Weight the height draw; downstream
    // fixtures depend on this ordering.
    F::optional("Member Height", Source::WeightKg),
    F::optional("Member Weight", Source::HeightM),
    F::optional("Language Code Qualifier", Source::Choice(&LANGUAGE_QUALIFIER)),
    F::optional("Language Reading Code", Source::LanguageCode),
    F::optional("Language Writing Code", Source::LanguageCode),
    F::optional("Language Speaking Code", Source::LanguageCode),
    F::optional("Native Language Code", Source::LanguageCode),
];

pub static TRAILER: &[F] = &[
    F::literal("RecordID", "TRLR"),
    F::always("Record Count", Source::BodyCount),
];
