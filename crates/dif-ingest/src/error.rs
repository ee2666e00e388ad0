//! Error types for record set ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a DIF table.
#[derive(Debug, Error)]
pub enum IngestError {
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to open or read the file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV record.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// File has no column-name row.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },
}

impl IngestError {
    pub(crate) fn from_csv(path: impl Into<PathBuf>, error: csv::Error) -> Self {
        let path = path.into();
        let message = error.to_string();
        match error.into_kind() {
            csv::ErrorKind::Io(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Self::FileNotFound { path }
            }
            csv::ErrorKind::Io(source) => Self::FileRead { path, source },
            _ => Self::CsvParse { path, message },
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/file.csv"),
        };
        assert_eq!(err.to_string(), "CSV file not found: /path/to/file.csv");
    }

    #[test]
    fn test_parse_error_display() {
        let err = IngestError::CsvParse {
            path: PathBuf::from("data.csv"),
            message: "invalid UTF-8".to_string(),
        };
        assert_eq!(err.to_string(), "failed to parse CSV data.csv: invalid UTF-8");
    }
}
