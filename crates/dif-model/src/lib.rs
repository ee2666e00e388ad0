//! Data model for DALIA Interchange Format (DIF) metadata checks.
//!
//! - [`attribute`]: the fixed attribute set and its requirement levels
//! - [`record`]: the raw record set handed to the checker
//! - [`line`]: mapping from row index to source line
//! - [`diagnostic`]: individual findings
//! - [`result`]: per-attribute outcomes of one run

pub mod attribute;
pub mod diagnostic;
pub mod line;
pub mod record;
pub mod result;

pub use attribute::{Attribute, Requirement};
pub use diagnostic::{Diagnostic, DiagnosticKind, Level};
pub use line::{LineLocator, STRUCTURAL_OFFSET, line_of};
pub use record::{Column, RecordSet};
pub use result::{AttributeOutcome, ValidationResult};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_result_counts() {
        let mut result = ValidationResult::new(2);
        result.push(
            Attribute::License,
            AttributeOutcome::Diagnostics(vec![
                Diagnostic::new(
                    Attribute::License,
                    2,
                    DiagnosticKind::MandatoryMissing,
                    Level::Error,
                    "License is missing.",
                ),
                Diagnostic::new(
                    Attribute::License,
                    3,
                    DiagnosticKind::Unlisted,
                    Level::Error,
                    "Provided License is not part of the list.",
                ),
            ]),
        );
        result.push(
            Attribute::Description,
            AttributeOutcome::ColumnMissing(
                Attribute::Description.missing_column_message().to_string(),
            ),
        );
        result.push(
            Attribute::Title,
            AttributeOutcome::ColumnMissing(Attribute::Title.missing_column_message().to_string()),
        );
        assert_eq!(result.error_count(), 3);
        assert_eq!(result.warning_count(), 1);
        assert!(result.has_errors());
    }

    #[test]
    fn result_serializes() {
        let mut result = ValidationResult::new(1);
        result.push(Attribute::Title, AttributeOutcome::Diagnostics(vec![]));
        let json = serde_json::to_string(&result).expect("serialize result");
        let round: ValidationResult = serde_json::from_str(&json).expect("deserialize result");
        assert_eq!(round, result);
    }
}
