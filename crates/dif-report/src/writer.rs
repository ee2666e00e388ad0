//! CSV and JSON report writers.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use csv::WriterBuilder;
use tracing::info;

use dif_model::ValidationResult;

use crate::error::{ReportError, Result};

/// Report grid: one column per attribute, header row first.
///
/// Row `i` holds the `i`-th message of every attribute; shorter columns are
/// padded with empty cells.
pub fn report_rows(result: &ValidationResult) -> Vec<Vec<String>> {
    let columns = result.columns();
    let height = columns
        .iter()
        .map(|(_, messages)| messages.len())
        .max()
        .unwrap_or(0);

    let mut rows = Vec::with_capacity(height + 1);
    rows.push(columns.iter().map(|(name, _)| (*name).to_string()).collect());
    for index in 0..height {
        rows.push(
            columns
                .iter()
                .map(|(_, messages)| messages.get(index).cloned().unwrap_or_default())
                .collect(),
        );
    }
    rows
}

/// Write the report grid as CSV.
pub fn write_csv_report(result: &ValidationResult, path: &Path) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .from_path(path)
        .map_err(|error| ReportError::csv(path, &error))?;
    let rows = report_rows(result);
    for row in &rows {
        writer
            .write_record(row)
            .map_err(|error| ReportError::csv(path, &error))?;
    }
    writer.flush().map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        path = %path.display(),
        rows = rows.len().saturating_sub(1),
        "CSV report written"
    );
    Ok(())
}

/// Write the structured result as pretty-printed JSON.
pub fn write_json_report(result: &ValidationResult, path: &Path) -> Result<()> {
    let io_error = |source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(io_error)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, result).map_err(|source| ReportError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    writer.write_all(b"\n").map_err(io_error)?;
    writer.flush().map_err(io_error)?;
    info!(path = %path.display(), "JSON report written");
    Ok(())
}
