use std::path::PathBuf;

use anyhow::Result;

use dif_cli::pipeline::{
    CheckOutcome, CheckRequest, ReportFormat, check_file, load_resources, report_path,
    resolve_resources_dir,
};
use dif_standards::ReferenceData;

use crate::cli::{CheckArgs, ReportFormatArg, ResourcesArgs};

pub fn run_check(args: &CheckArgs) -> Result<CheckOutcome> {
    let format = match args.format {
        ReportFormatArg::Csv => ReportFormat::Csv,
        ReportFormatArg::Json => ReportFormat::Json,
    };
    let report = if args.no_report {
        None
    } else {
        Some(report_path(&args.input, args.output.as_deref(), format))
    };
    let request = CheckRequest {
        input: args.input.clone(),
        header_lines: args.header_lines,
        resources: resolve_resources_dir(args.resources.as_deref()),
        format,
        report,
    };
    check_file(&request)
}

pub fn run_resources(args: &ResourcesArgs) -> Result<(PathBuf, ReferenceData)> {
    let dir = resolve_resources_dir(args.resources.as_deref());
    let reference = load_resources(&dir)?;
    Ok((dir, reference))
}
