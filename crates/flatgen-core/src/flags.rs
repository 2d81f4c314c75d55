use schemars::JsonSchema;
use schemars::r#gen::SchemaGenerator;
use schemars::schema::Schema;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Highest accepted file validation code.
pub const MAX_FILE_VALIDATION_CODE: u8 = 5;

/// Load type written into the header.
///
/// Unrecognized values are kept verbatim; they behave like a non-full load
/// when selecting action codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LoadType {
    Full,
    Incremental,
    Delta,
    Other(String),
}

impl LoadType {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "F" => LoadType::Full,
            "I" => LoadType::Incremental,
            "D" => LoadType::Delta,
            other => LoadType::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            LoadType::Full => "F",
            LoadType::Incremental => "I",
            LoadType::Delta => "D",
            LoadType::Other(raw) => raw,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, LoadType::Other(_))
    }
}

impl Default for LoadType {
    fn default() -> Self {
        LoadType::Full
    }
}

impl From<String> for LoadType {
    fn from(value: String) -> Self {
        LoadType::parse(&value)
    }
}

impl From<LoadType> for String {
    fn from(value: LoadType) -> Self {
        value.as_str().to_string()
    }
}

impl std::fmt::Display for LoadType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl JsonSchema for LoadType {
    fn schema_name() -> String {
        "LoadType".to_string()
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        String::json_schema(generator)
    }
}

/// Number of records requested for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RecordCounts {
    /// Flat formats: number of detail rows.
    Entries(u64),
    /// Claim format: claim rows and line rows per claim.
    Claims { claims: u64, lines_per_claim: u64 },
}

impl RecordCounts {
    /// Primary row count: entries for flat formats, claims for nested.
    pub fn primary(self) -> u64 {
        match self {
            RecordCounts::Entries(entries) => entries,
            RecordCounts::Claims { claims, .. } => claims,
        }
    }

    pub fn children(self) -> u64 {
        match self {
            RecordCounts::Entries(_) => 0,
            RecordCounts::Claims {
                lines_per_claim, ..
            } => lines_per_claim,
        }
    }
}

/// Flags fixed for one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlFlags {
    pub load_type: LoadType,
    pub optional_fields: bool,
    pub file_validation_code: u8,
    pub counts: RecordCounts,
}

impl ControlFlags {
    pub fn new(
        load_type: LoadType,
        optional_fields: bool,
        file_validation_code: u8,
        counts: RecordCounts,
    ) -> Result<Self> {
        if file_validation_code > MAX_FILE_VALIDATION_CODE {
            return Err(Error::InvalidFlags(format!(
                "file validation code {file_validation_code} is outside 0..={MAX_FILE_VALIDATION_CODE}"
            )));
        }
        Ok(Self {
            load_type,
            optional_fields,
            file_validation_code,
            counts,
        })
    }

    pub fn validation_code_in(&self, codes: &[u8]) -> bool {
        codes.contains(&self.file_validation_code)
    }
}
