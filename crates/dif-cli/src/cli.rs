//! Command-line arguments for `dif-check`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "dif-check",
    version,
    about = "Validate DALIA Interchange Format (DIF) metadata files",
    long_about = "Validate a DIF CSV file describing learning resources.\n\n\
                  Every row is checked for missing mandatory and recommended attributes,\n\
                  malformed values, and values outside the DIF picklists. Findings are\n\
                  written to a report with one column per attribute."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format.
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a DIF CSV file and write a report.
    Check(CheckArgs),

    /// Load the picklists and show their sizes.
    Resources(ResourcesArgs),
}

#[derive(Parser)]
pub struct CheckArgs {
    /// DIF CSV file to validate.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Report name, written as NAME.csv or NAME.json (default: report-<INPUT stem>).
    #[arg(short = 'o', long = "output", value_name = "NAME")]
    pub output: Option<String>,

    /// Extra header lines between the column names and the first record.
    #[arg(
        short = 'l',
        long = "header-lines",
        value_name = "HEADER_LINES",
        default_value_t = 0
    )]
    pub header_lines: usize,

    /// Report format.
    #[arg(long = "format", value_enum, default_value = "csv")]
    pub format: ReportFormatArg,

    /// Directory holding the picklist files.
    #[arg(long = "resources", value_name = "DIR")]
    pub resources: Option<PathBuf>,

    /// Print the summary only; do not write a report file.
    #[arg(long = "no-report")]
    pub no_report: bool,
}

#[derive(Parser)]
pub struct ResourcesArgs {
    /// Directory holding the picklist files.
    #[arg(long = "resources", value_name = "DIR")]
    pub resources: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    Csv,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
