use std::path::PathBuf;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use flatgen_core::{FileFormat, LoadType, RecordCounts, Topology};
use flatgen_generate::RunRequest;

use crate::errors::{RequestError, Result};

/// One file to generate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RunSpec {
    /// File format to generate.
    pub format: FileFormat,
    /// Detail rows for flat formats.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entries: Option<u64>,
    /// Claim rows for the claim format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claims: Option<u64>,
    /// Line rows under each claim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lines_per_claim: Option<u64>,
    /// Header load type (`F`, `I`, `D`); the configured default when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_type: Option<LoadType>,
    /// Populate optional-only fields.
    #[serde(default)]
    pub optional_fields: bool,
    /// Overrides the format's default file validation code (0..=5).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_validation_code: Option<u8>,
    /// Seed for reproducible output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl RunSpec {
    /// Record counts when the counts required by the format are present.
    pub fn counts(&self) -> Option<RecordCounts> {
        match self.format.topology() {
            Topology::Flat => self.entries.map(RecordCounts::Entries),
            Topology::Nested => match (self.claims, self.lines_per_claim) {
                (Some(claims), Some(lines_per_claim)) => Some(RecordCounts::Claims {
                    claims,
                    lines_per_claim,
                }),
                _ => None,
            },
        }
    }

    /// Build the engine request for this run.
    pub fn to_run_request(&self, index: usize, default_load_type: &LoadType) -> Result<RunRequest> {
        let counts = self.counts().ok_or_else(|| RequestError::InvalidRun {
            index,
            message: format!("{} files need {}", self.format, required_counts(self.format)),
        })?;

        Ok(RunRequest {
            format: self.format,
            load_type: self
                .load_type
                .clone()
                .unwrap_or_else(|| default_load_type.clone()),
            optional_fields: self.optional_fields,
            counts,
            file_validation_code: self.file_validation_code,
            seed: self.seed,
        })
    }
}

pub(crate) fn required_counts(format: FileFormat) -> &'static str {
    match format.topology() {
        Topology::Flat => "entries",
        Topology::Nested => "claims and lines_per_claim",
    }
}

/// Batch of files to generate in one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GenerationRequest {
    /// Runs executed in order.
    pub runs: Vec<RunSpec>,
    /// Write every file into this directory instead of dated directories.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
}

impl GenerationRequest {
    pub fn run_requests(&self, default_load_type: &LoadType) -> Result<Vec<RunRequest>> {
        self.runs
            .iter()
            .enumerate()
            .map(|(index, run)| run.to_run_request(index, default_load_type))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(format: FileFormat) -> RunSpec {
        RunSpec {
            format,
            entries: None,
            claims: None,
            lines_per_claim: None,
            load_type: None,
            optional_fields: false,
            file_validation_code: None,
            seed: None,
        }
    }

    #[test]
    fn claim_counts_need_both_values() {
        let mut run = spec(FileFormat::Claim);
        run.claims = Some(3);
        assert_eq!(run.counts(), None);

        run.lines_per_claim = Some(2);
        assert_eq!(
            run.counts(),
            Some(RecordCounts::Claims {
                claims: 3,
                lines_per_claim: 2
            })
        );
    }

    #[test]
    fn missing_load_type_uses_default() {
        let mut run = spec(FileFormat::PlanBenefit);
        run.entries = Some(4);

        let request = run
            .to_run_request(0, &LoadType::Incremental)
            .expect("valid run");
        assert_eq!(request.load_type, LoadType::Incremental);
        assert_eq!(request.counts, RecordCounts::Entries(4));
    }

    #[test]
    fn flat_run_without_entries_is_rejected() {
        let run = spec(FileFormat::Eligibility);
        let err = run
            .to_run_request(2, &LoadType::Full)
            .expect_err("entries missing");
        assert!(err.to_string().contains("invalid run 2"));
    }
}
