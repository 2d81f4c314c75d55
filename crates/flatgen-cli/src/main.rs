mod config;
mod logging;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use thiserror::Error;

use flatgen_core::{FileFormat, LoadType};
use flatgen_generate::{GenerateOptions, GenerationEngine, GenerationError, verify_file};
use flatgen_request::{
    GenerationRequest, RequestError, RunSpec, ValidationReport, request_json_schema,
    request_json_schema_value, validate_request, validate_request_document,
};

use config::{ConfigError, Settings, load_or_create_settings};
use logging::init_logging;

#[derive(Debug, Error)]
enum CliError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("request error: {0}")]
    Request(#[from] RequestError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("logging error: {0}")]
    Logging(String),
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("{path} failed verification with {issues} issue(s)")]
    VerificationFailed { path: String, issues: usize },
}

#[derive(Parser, Debug)]
#[command(name = "flatgen", version, about = "Pipe-delimited test file generator")]
struct Cli {
    /// Settings file; created with defaults when missing.
    #[arg(long, global = true, default_value = "flatgen.toml")]
    config: PathBuf,
    /// Also write JSON logs to this file.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate one file.
    Generate(GenerateArgs),
    /// Generate every run of a request document.
    Batch(BatchArgs),
    /// Check the structure of a generated file.
    Verify(VerifyArgs),
    /// Print the request JSON Schema.
    Schema,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// eligibility, claim, individual-usage, plan-benefit or benefit-entity.
    format: FileFormat,
    /// Detail rows for flat formats.
    #[arg(long)]
    entries: Option<u64>,
    /// Claim rows for the claim format.
    #[arg(long)]
    claims: Option<u64>,
    /// Line rows per claim.
    #[arg(long = "lines")]
    lines_per_claim: Option<u64>,
    /// Header load type; the configured default when omitted.
    #[arg(long)]
    load_type: Option<String>,
    /// Populate optional-only fields.
    #[arg(long, default_value_t = false)]
    optional_fields: bool,
    /// Override the format's default file validation code.
    #[arg(long)]
    file_validation_code: Option<u8>,
    #[arg(long)]
    seed: Option<u64>,
    /// Write into this directory instead of a dated one under output_root.
    #[arg(long)]
    out_dir: Option<PathBuf>,
    /// Write `<file>.report.json` next to the file.
    #[arg(long, default_value_t = false)]
    report: bool,
}

#[derive(Args, Debug)]
struct BatchArgs {
    request: PathBuf,
    #[arg(long, default_value_t = false)]
    report: bool,
}

#[derive(Args, Debug)]
struct VerifyArgs {
    format: FileFormat,
    file: PathBuf,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    let settings = load_or_create_settings(&cli.config)?;
    init_logging(
        &settings.log_level,
        settings.log_format,
        cli.log_file.as_deref(),
    )?;

    match cli.command {
        Command::Generate(args) => run_generate(args, &settings),
        Command::Batch(args) => run_batch(&args.request, args.report, &settings),
        Command::Verify(args) => run_verify(&args.file, args.format),
        Command::Schema => {
            println!("{}", serde_json::to_string_pretty(&request_json_schema())?);
            Ok(())
        }
    }
}

fn run_generate(args: GenerateArgs, settings: &Settings) -> Result<(), CliError> {
    let run = RunSpec {
        format: args.format,
        entries: args.entries,
        claims: args.claims,
        lines_per_claim: args.lines_per_claim,
        load_type: args.load_type.as_deref().map(LoadType::parse),
        optional_fields: args.optional_fields,
        file_validation_code: args.file_validation_code,
        seed: args.seed,
    };
    let request = GenerationRequest {
        runs: vec![run],
        output_dir: args.out_dir,
    };

    let report = validate_request(&request);
    check_report(&report)?;
    execute(&request, args.report, settings)
}

fn run_batch(path: &Path, write_report: bool, settings: &Settings) -> Result<(), CliError> {
    let contents = std::fs::read_to_string(path)?;
    let request_json: serde_json::Value = serde_json::from_str(&contents)?;
    let schema = request_json_schema_value()?;

    let validated = match validate_request_document(&request_json, &schema) {
        Ok(validated) => validated,
        Err(report) => {
            check_report(&report)?;
            return Err(CliError::InvalidRequest(
                "request failed validation".to_string(),
            ));
        }
    };
    for issue in &validated.warnings {
        tracing::warn!(code = %issue.code, path = %issue.path, "{}", issue.message);
    }

    execute(&validated.request, write_report, settings)
}

fn execute(
    request: &GenerationRequest,
    write_report: bool,
    settings: &Settings,
) -> Result<(), CliError> {
    let engine = GenerationEngine::new(GenerateOptions {
        output_root: settings.output_root.clone(),
        out_dir: request.output_dir.clone(),
        generated_at: None,
        write_report,
    });

    for run in request.run_requests(&settings.default_load_type)? {
        let result = engine.run(&run)?;
        println!("{}", result.path.display());
    }
    Ok(())
}

fn run_verify(path: &Path, format: FileFormat) -> Result<(), CliError> {
    let report = verify_file(path, format)?;
    for issue in &report.issues {
        println!("line {}: {} {}", issue.line, issue.code, issue.message);
    }
    tracing::info!(
        path = %path.display(),
        format = %format,
        lines = report.lines,
        body_lines = report.body_lines,
        issues = report.issues.len(),
        "verification finished"
    );

    if report.is_ok() {
        println!("{} ok ({} body lines)", path.display(), report.body_lines);
        Ok(())
    } else {
        Err(CliError::VerificationFailed {
            path: path.display().to_string(),
            issues: report.issues.len(),
        })
    }
}

fn check_report(report: &ValidationReport) -> Result<(), CliError> {
    for issue in &report.warnings {
        tracing::warn!(code = %issue.code, path = %issue.path, "{}", issue.message);
    }
    if report.is_ok() {
        return Ok(());
    }
    for issue in &report.errors {
        tracing::error!(code = %issue.code, path = %issue.path, "{}", issue.message);
    }
    let summary = report
        .errors
        .iter()
        .map(|issue| issue.to_string())
        .collect::<Vec<_>>()
        .join("; ");
    Err(CliError::InvalidRequest(summary))
}
