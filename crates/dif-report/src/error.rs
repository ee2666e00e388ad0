//! Error types for report output.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while writing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to create report {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write CSV report {path}: {message}")]
    Csv { path: PathBuf, message: String },

    #[error("failed to serialize JSON report {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ReportError {
    pub(crate) fn csv(path: impl Into<PathBuf>, error: &csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            message: error.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
