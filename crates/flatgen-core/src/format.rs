use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::record::Topology;

/// Flat-file formats the generator can produce.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum FileFormat {
    /// Eligibility roster (`.elig31.txt`).
    Eligibility,
    /// Claim status file (`.cstat`).
    Claim,
    /// Individual usage benefit file (`.indi`).
    IndividualUsage,
    /// Plan benefit file (`.plan`).
    PlanBenefit,
    /// Standard benefit entity file (`.bene`).
    BenefitEntity,
}

/// Which header identifier is embedded in the output file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameSource {
    TradingPartner,
    Payer,
}

impl FileFormat {
    pub const ALL: [FileFormat; 5] = [
        FileFormat::Eligibility,
        FileFormat::Claim,
        FileFormat::IndividualUsage,
        FileFormat::PlanBenefit,
        FileFormat::BenefitEntity,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            FileFormat::Eligibility => "eligibility",
            FileFormat::Claim => "claim",
            FileFormat::IndividualUsage => "individual-usage",
            FileFormat::PlanBenefit => "plan-benefit",
            FileFormat::BenefitEntity => "benefit-entity",
        }
    }

    /// Value of the header `File Type` field. Plan and benefit entity files
    /// share the `Planbene` tag.
    pub fn file_type_tag(self) -> &'static str {
        match self {
            FileFormat::Eligibility => "Elig",
            FileFormat::Claim => "CStat",
            FileFormat::IndividualUsage => "IndiUsag",
            FileFormat::PlanBenefit | FileFormat::BenefitEntity => "Planbene",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            FileFormat::Eligibility => ".elig31.txt",
            FileFormat::Claim => ".cstat",
            FileFormat::IndividualUsage => ".indi",
            FileFormat::PlanBenefit => ".plan",
            FileFormat::BenefitEntity => ".bene",
        }
    }

    /// Trailing part of the file name after the identifier.
    pub fn file_suffix(self) -> String {
        format!("test{}", self.extension())
    }

    pub fn topology(self) -> Topology {
        match self {
            FileFormat::Claim => Topology::Nested,
            _ => Topology::Flat,
        }
    }

    pub fn name_source(self) -> NameSource {
        match self {
            FileFormat::Eligibility | FileFormat::IndividualUsage => NameSource::TradingPartner,
            _ => NameSource::Payer,
        }
    }
}

impl std::fmt::Display for FileFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for FileFormat {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase().replace('_', "-");
        FileFormat::ALL
            .into_iter()
            .find(|format| format.slug() == normalized)
            .ok_or_else(|| Error::UnknownFormat(value.to_string()))
    }
}
