use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use flatgen_core::{FileFormat, LoadType, RecordCounts};

use crate::state::RunState;

pub const DEFAULT_OUTPUT_ROOT: &str = "/tmp/data";

/// Options for the generation engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Root under which dated `{year}/{month}/{day}` directories are created.
    pub output_root: PathBuf,
    /// Write straight into this directory instead of a dated one.
    pub out_dir: Option<PathBuf>,
    /// Fixed generation clock; the local time is used when unset.
    pub generated_at: Option<NaiveDateTime>,
    /// Write `<file>.report.json` next to each generated file.
    pub write_report: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            output_root: PathBuf::from(DEFAULT_OUTPUT_ROOT),
            out_dir: None,
            generated_at: None,
            write_report: false,
        }
    }
}

/// Parameters of one generated file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRequest {
    pub format: FileFormat,
    pub load_type: LoadType,
    pub optional_fields: bool,
    pub counts: RecordCounts,
    /// Replaces the format's default validation code.
    pub file_validation_code: Option<u8>,
    pub seed: Option<u64>,
}

impl RunRequest {
    pub fn new(format: FileFormat, counts: RecordCounts) -> Self {
        Self {
            format,
            load_type: LoadType::Full,
            optional_fields: false,
            counts,
            file_validation_code: None,
            seed: None,
        }
    }
}

/// Report for a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub run_id: String,
    pub format: FileFormat,
    pub file_name: String,
    pub seed: u64,
    pub generated_at: String,
    pub load_type: LoadType,
    pub optional_fields: bool,
    pub file_validation_code: u8,
    pub payer_id: String,
    pub body_lines: u64,
    pub records_by_kind: BTreeMap<String, u64>,
    pub bytes_written: u64,
    pub duration_ms: u64,
    pub final_state: String,
}

impl GenerationReport {
    pub fn record_kind(&mut self, kind: &str, rows: u64) {
        *self.records_by_kind.entry(kind.to_string()).or_insert(0) += rows;
    }

    pub fn finish(&mut self, state: RunState) {
        self.final_state = state.to_string();
    }
}
