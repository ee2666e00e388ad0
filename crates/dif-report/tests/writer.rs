use std::fs;

use dif_model::{Attribute, AttributeOutcome, Diagnostic, DiagnosticKind, Level, ValidationResult};
use dif_report::{ReportError, report_rows, write_csv_report, write_json_report};
use tempfile::TempDir;

fn sample_result() -> ValidationResult {
    let mut result = ValidationResult::new(3);
    result.push(
        Attribute::Authors,
        AttributeOutcome::Diagnostics(vec![
            Diagnostic::new(
                Attribute::Authors,
                2,
                DiagnosticKind::Malformed,
                Level::Error,
                "Wrong name format.",
            ),
            Diagnostic::new(
                Attribute::Authors,
                4,
                DiagnosticKind::MandatoryMissing,
                Level::Error,
                "Mandatory attribute 'Author' is missing.",
            ),
        ]),
    );
    result.push(
        Attribute::License,
        AttributeOutcome::ColumnMissing(
            Attribute::License.missing_column_message().to_string(),
        ),
    );
    result.push(Attribute::Title, AttributeOutcome::Diagnostics(vec![]));
    result
}

#[test]
fn rows_are_padded_per_attribute() {
    let rows = report_rows(&sample_result());
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0], vec!["Authors", "License", "Title"]);
    assert_eq!(rows[2][0], "Line 4: Mandatory attribute 'Author' is missing.");
    assert_eq!(rows[2][1], "");
    assert_eq!(rows[2][2], "");
}

#[test]
fn csv_report_layout() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("report-sample.csv");
    write_csv_report(&sample_result(), &path).expect("write report");

    let text = fs::read_to_string(&path).expect("read report");
    insta::assert_snapshot!(text.trim_end(), @r"
    Authors,License,Title
    Line 2: Wrong name format.,The mandatory Attribute 'License' is missing from every item!,
    Line 4: Mandatory attribute 'Author' is missing.,,
    ");
}

#[test]
fn clean_result_yields_header_only() {
    let mut result = ValidationResult::new(1);
    for attribute in Attribute::ALL {
        result.push(attribute, AttributeOutcome::Diagnostics(vec![]));
    }
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("clean.csv");
    write_csv_report(&result, &path).expect("write report");

    let text = fs::read_to_string(&path).expect("read report");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("Authors,License,Link,Title,"));
    assert!(lines[0].ends_with(",TargetGroup"));
}

#[test]
fn json_report_round_trips() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("report.json");
    let result = sample_result();
    write_json_report(&result, &path).expect("write report");

    let text = fs::read_to_string(&path).expect("read report");
    let parsed: ValidationResult = serde_json::from_str(&text).expect("parse report");
    assert_eq!(parsed, result);
    assert!(text.contains("\"status\": \"column-missing\""));
}

#[test]
fn unwritable_path_is_reported() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("missing").join("report.json");
    let error = write_json_report(&sample_result(), &path).expect_err("should fail");
    assert!(matches!(error, ReportError::Io { .. }));
}
