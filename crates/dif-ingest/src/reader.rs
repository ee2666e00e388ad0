//! CSV reading with a configurable count of extra header lines.

use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, warn};

use dif_model::RecordSet;

use crate::error::{IngestError, Result};

/// Options controlling how a DIF table is read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestOptions {
    /// Non-data lines between the column-name row and the first data row.
    pub header_lines: usize,
}

impl IngestOptions {
    pub fn with_header_lines(mut self, header_lines: usize) -> Self {
        self.header_lines = header_lines;
        self
    }
}

fn normalize_header(raw: &str) -> String {
    raw.trim_matches('\u{feff}').trim().to_string()
}

fn record_to_row(record: &StringRecord) -> Vec<String> {
    record.iter().map(str::to_string).collect()
}

/// Read a DIF table from disk.
pub fn read_record_set(path: &Path, options: &IngestOptions) -> Result<RecordSet> {
    let reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|error| IngestError::from_csv(path, error))?;
    let records = collect_records(reader, path, options)?;
    debug!(
        path = %path.display(),
        columns = records.headers.len(),
        rows = records.len(),
        "record set loaded"
    );
    Ok(records)
}

/// Read a DIF table from any reader; `source` names it in errors.
pub fn read_record_set_from_reader<R: Read>(
    input: R,
    source: &Path,
    options: &IngestOptions,
) -> Result<RecordSet> {
    let reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);
    collect_records(reader, source, options)
}

fn collect_records<R: Read>(
    mut reader: csv::Reader<R>,
    source: &Path,
    options: &IngestOptions,
) -> Result<RecordSet> {
    let mut records = reader.records();

    let headers: Vec<String> = match records.next() {
        Some(record) => {
            let record = record.map_err(|error| IngestError::from_csv(source, error))?;
            record.iter().map(normalize_header).collect()
        }
        None => {
            return Err(IngestError::EmptyCsv {
                path: source.to_path_buf(),
            });
        }
    };

    let mut skipped = 0usize;
    let mut rows = Vec::new();
    for record in records {
        let record = record.map_err(|error| IngestError::from_csv(source, error))?;
        if skipped < options.header_lines {
            skipped += 1;
            continue;
        }
        rows.push(record_to_row(&record));
    }

    if skipped < options.header_lines {
        warn!(
            path = %source.display(),
            header_lines = options.header_lines,
            available = skipped,
            "header offset exceeds the number of rows; no data rows remain"
        );
    } else if skipped > 0 {
        debug!(path = %source.display(), skipped, "skipped extra header lines");
    }

    Ok(RecordSet::new(headers, rows))
}
