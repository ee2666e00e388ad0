//! DIF record set ingestion.
//!
//! Reads the tabular metadata file into a [`dif_model::RecordSet`]: the
//! first row names the columns, an optional number of extra header lines is
//! skipped, and every remaining row becomes a record with cells kept
//! verbatim.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use dif_ingest::{IngestOptions, read_record_set};
//!
//! let options = IngestOptions::default().with_header_lines(1);
//! let records = read_record_set(Path::new("resources.csv"), &options)?;
//! ```

mod error;
mod reader;

pub use error::{IngestError, Result};
pub use reader::{IngestOptions, read_record_set, read_record_set_from_reader};
