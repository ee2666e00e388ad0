//! Report output for DIF validation results.
//!
//! - **CSV**: one column per attribute holding its diagnostic strings
//! - **JSON**: the structured [`ValidationResult`](dif_model::ValidationResult)

pub mod error;
mod writer;

pub use error::{ReportError, Result};
pub use writer::{report_rows, write_csv_report, write_json_report};
