use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Instant;

use chrono::NaiveDateTime;
use tracing::{info, warn};

use flatgen_core::{ControlFlags, NameSource, RecordKind, Topology};

use crate::errors::GenerationError;
use crate::layout::{FormatLayout, check_evaluation_order, layout_for};
use crate::model::{GenerateOptions, GenerationReport, RunRequest};
use crate::naming::{dated_output_dir, file_name};
use crate::output::PipeEncoder;
use crate::provider::ValueProvider;
use crate::sequencer::Sequencer;
use crate::state::{RunState, RunStateMachine};
use crate::topology::{RecordSet, TopologyBuilder};

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    /// Absolute path of the generated file.
    pub path: PathBuf,
    pub report: GenerationReport,
}

/// Entry point for generating one flat file per request.
#[derive(Debug, Clone)]
pub struct GenerationEngine {
    options: GenerateOptions,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    pub fn run(&self, request: &RunRequest) -> Result<GenerationResult, GenerationError> {
        let start = Instant::now();
        let run_id = uuid::Uuid::new_v4().to_string();
        let seed = request.seed.unwrap_or_else(rand::random);
        let generated_at = self
            .options
            .generated_at
            .unwrap_or_else(|| chrono::Local::now().naive_local());

        let layout = layout_for(request.format);
        check_counts(&layout, request)?;
        check_evaluation_order(&layout)?;

        let mut provider = ValueProvider::seeded(seed);
        let file_validation_code = match request.file_validation_code {
            Some(code) => code,
            None => layout
                .validation_default
                .resolve(request.optional_fields, || provider.int_in(0..6) as u8),
        };
        let flags = ControlFlags::new(
            request.load_type.clone(),
            request.optional_fields,
            file_validation_code,
            request.counts,
        )?;
        let payer_id = provider.alphanumeric(10);

        info!(
            run_id = %run_id,
            format = %request.format,
            seed,
            load_type = %flags.load_type.as_str(),
            optional_fields = flags.optional_fields,
            file_validation_code,
            "generation started"
        );

        let mut machine = RunStateMachine::new();
        let mut report = GenerationReport {
            run_id: run_id.clone(),
            format: request.format,
            file_name: String::new(),
            seed,
            generated_at: generated_at.format("%Y-%m-%dT%H:%M:%S").to_string(),
            load_type: flags.load_type.clone(),
            optional_fields: flags.optional_fields,
            file_validation_code,
            payer_id: payer_id.clone(),
            body_lines: 0,
            records_by_kind: BTreeMap::new(),
            bytes_written: 0,
            duration_ms: 0,
            final_state: machine.state().to_string(),
        };

        let outcome = self.execute(
            &layout,
            &flags,
            generated_at,
            &payer_id,
            &mut provider,
            &mut machine,
            &mut report,
        );
        report.duration_ms = start.elapsed().as_millis() as u64;

        match outcome {
            Ok(path) => {
                report.finish(machine.state());
                if self.options.write_report {
                    let report_path = report_path_for(&path);
                    std::fs::write(&report_path, serde_json::to_vec_pretty(&report)?)?;
                }
                info!(
                    run_id = %run_id,
                    format = %request.format,
                    body_lines = report.body_lines,
                    bytes_written = report.bytes_written,
                    duration_ms = report.duration_ms,
                    path = %path.display(),
                    "generation completed"
                );
                Ok(GenerationResult { path, report })
            }
            Err(err) => {
                let reached = machine.state();
                machine.fail();
                warn!(
                    run_id = %run_id,
                    format = %request.format,
                    state = %reached,
                    error = %err,
                    "generation failed"
                );
                Err(err)
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn execute(
        &self,
        layout: &FormatLayout,
        flags: &ControlFlags,
        generated_at: NaiveDateTime,
        payer_id: &str,
        provider: &mut ValueProvider,
        machine: &mut RunStateMachine,
        report: &mut GenerationReport,
    ) -> Result<PathBuf, GenerationError> {
        let set = TopologyBuilder::new(layout, flags, generated_at, payer_id).build(provider)?;
        machine.advance(RunState::SchemasComputed)?;
        report.body_lines = set.body_lines();
        record_kinds(&set, report);

        let name_id = match layout.format.name_source() {
            NameSource::TradingPartner => set
                .header
                .value(0, "Trading Partner ID")
                .map(|value| value.to_string())
                .ok_or_else(|| {
                    GenerationError::InvalidLayout("header has no Trading Partner ID".to_string())
                })?,
            NameSource::Payer => payer_id.to_string(),
        };
        let dir = match &self.options.out_dir {
            Some(dir) => dir.clone(),
            None => dated_output_dir(&self.options.output_root, generated_at),
        };
        std::fs::create_dir_all(&dir)?;
        let name = file_name(layout.format, generated_at, &name_id);
        let path = std::path::absolute(dir.join(&name))?;
        report.file_name = name;

        let mut encoder = PipeEncoder::new(&path);
        encoder.append_header(&set)?;
        machine.advance(RunState::HeaderWritten)?;

        let sequencer = encoder.append_body(&set, Sequencer::new())?;
        if sequencer.issued() != set.body_lines() {
            return Err(GenerationError::InvalidLayout(format!(
                "numbered {} body lines, expected {}",
                sequencer.issued(),
                set.body_lines()
            )));
        }
        machine.advance(RunState::BodyWritten)?;

        encoder.append_trailer(&set)?;
        machine.advance(RunState::TrailerWritten)?;

        report.bytes_written = encoder.bytes_written();
        machine.advance(RunState::Done)?;
        Ok(path)
    }
}

fn check_counts(layout: &FormatLayout, request: &RunRequest) -> Result<(), GenerationError> {
    use flatgen_core::RecordCounts;

    let topology = layout.topology();
    match (topology, request.counts) {
        (Topology::Flat, RecordCounts::Entries(_))
        | (Topology::Nested, RecordCounts::Claims { .. }) => {
            let counts = request.counts;
            let body_lines = topology
                .body_lines(counts.primary(), counts.children())
                .and_then(|lines| usize::try_from(lines).ok());
            match body_lines {
                Some(_) => Ok(()),
                None => Err(GenerationError::InvalidRequest(format!(
                    "{} file with {} primary rows and {} children each is too large",
                    request.format,
                    counts.primary(),
                    counts.children()
                ))),
            }
        }
        (Topology::Flat, RecordCounts::Claims { .. }) => Err(GenerationError::InvalidRequest(
            format!("{} files take an entries count", request.format),
        )),
        (Topology::Nested, RecordCounts::Entries(_)) => Err(GenerationError::InvalidRequest(
            format!("{} files take claim and line counts", request.format),
        )),
    }
}

fn record_kinds(set: &RecordSet, report: &mut GenerationReport) {
    report.record_kind(RecordKind::Header.as_str(), set.header.len() as u64);
    for schema in &set.body {
        report.record_kind(schema.kind().as_str(), schema.len() as u64);
    }
    report.record_kind(RecordKind::Trailer.as_str(), set.trailer.len() as u64);
}

fn report_path_for(path: &std::path::Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".report.json");
    PathBuf::from(name)
}
