//! The check pipeline: load picklists, ingest, validate, write the report.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use dif_ingest::{IngestOptions, read_record_set};
use dif_model::ValidationResult;
use dif_report::{write_csv_report, write_json_report};
use dif_standards::{RESOURCES_ENV_VAR, ReferenceData, load_reference_data, resources_root};
use dif_validate::{ValidationConfig, validate_records};

/// Report file format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Csv,
    Json,
}

impl ReportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ReportFormat::Csv => "csv",
            ReportFormat::Json => "json",
        }
    }
}

/// Report location: `NAME.<ext>` when a name is given, otherwise
/// `report-<input stem>.<ext>`, both relative to the working directory.
pub fn report_path(input: &Path, name: Option<&str>, format: ReportFormat) -> PathBuf {
    let extension = format.extension();
    match name {
        Some(name) if name.ends_with(&format!(".{extension}")) => PathBuf::from(name),
        Some(name) => PathBuf::from(format!("{name}.{extension}")),
        None => {
            let stem = input
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| "input".to_string());
            PathBuf::from(format!("report-{stem}.{extension}"))
        }
    }
}

/// Resources directory: explicit flag, then `DIF_RESOURCES_DIR`, then a
/// `resources/` directory in the working directory, then the bundled one.
pub fn resolve_resources_dir(explicit: Option<&Path>) -> PathBuf {
    if let Some(dir) = explicit {
        return dir.to_path_buf();
    }
    if std::env::var_os(RESOURCES_ENV_VAR).is_none() {
        let local = PathBuf::from("resources");
        if local.is_dir() {
            return local;
        }
    }
    resources_root()
}

pub fn load_resources(dir: &Path) -> Result<ReferenceData> {
    load_reference_data(dir)
        .with_context(|| format!("load reference data from {}", dir.display()))
}

#[derive(Debug, Clone)]
pub struct CheckRequest {
    pub input: PathBuf,
    pub header_lines: usize,
    pub resources: PathBuf,
    pub format: ReportFormat,
    /// `None` skips writing the report.
    pub report: Option<PathBuf>,
}

#[derive(Debug)]
pub struct CheckOutcome {
    pub input: PathBuf,
    pub result: ValidationResult,
    pub report: Option<PathBuf>,
}

impl CheckOutcome {
    pub fn has_errors(&self) -> bool {
        self.result.has_errors()
    }
}

/// Run a full check of one file.
pub fn check_file(request: &CheckRequest) -> Result<CheckOutcome> {
    let span = info_span!("check", input = %request.input.display());
    let _guard = span.enter();
    let started = Instant::now();

    let reference = load_resources(&request.resources)?;

    let options = IngestOptions::default().with_header_lines(request.header_lines);
    let records = read_record_set(&request.input, &options)
        .with_context(|| format!("read {}", request.input.display()))?;
    debug!(
        columns = records.headers.len(),
        rows = records.len(),
        "input loaded"
    );

    let config = ValidationConfig::default().with_header_lines(request.header_lines);
    let result = validate_records(&records, &reference, config);

    if let Some(path) = &request.report {
        match request.format {
            ReportFormat::Csv => write_csv_report(&result, path),
            ReportFormat::Json => write_json_report(&result, path),
        }
        .with_context(|| format!("write report {}", path.display()))?;
    }

    info!(
        records = result.record_count,
        errors = result.error_count(),
        warnings = result.warning_count(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "check finished"
    );
    Ok(CheckOutcome {
        input: request.input.clone(),
        result,
        report: request.report.clone(),
    })
}
