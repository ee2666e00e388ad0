//! Integration tests for the check pipeline.

use std::fs;
use std::path::{Path, PathBuf};

use dif_cli::pipeline::{
    CheckRequest, ReportFormat, check_file, load_resources, report_path, resolve_resources_dir,
};
use dif_model::Attribute;
use dif_validate::{RecordChecker, ValidationConfig};
use tempfile::TempDir;

fn bundled_resources() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../resources")
}

const HEADER: &str = "Authors,License,Link,Title,Description,Community,Discipline,MediaType,ProficiencyLevel,PublicationDate,FileFormat,TargetGroup";

fn write_input(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("resources.csv");
    fs::write(&path, body).expect("write input");
    path
}

fn request(input: PathBuf, report: Option<PathBuf>, header_lines: usize) -> CheckRequest {
    CheckRequest {
        input,
        header_lines,
        resources: bundled_resources(),
        format: ReportFormat::Csv,
        report,
    }
}

#[test]
fn report_path_defaults_to_input_stem() {
    assert_eq!(
        report_path(Path::new("data/dalia.csv"), None, ReportFormat::Csv),
        PathBuf::from("report-dalia.csv")
    );
    assert_eq!(
        report_path(Path::new("dalia.csv"), Some("out"), ReportFormat::Json),
        PathBuf::from("out.json")
    );
    assert_eq!(
        report_path(Path::new("dalia.csv"), Some("out.csv"), ReportFormat::Csv),
        PathBuf::from("out.csv")
    );
}

#[test]
fn explicit_resources_dir_wins() {
    let dir = Path::new("/tmp/somewhere");
    assert_eq!(resolve_resources_dir(Some(dir)), dir.to_path_buf());
}

#[test]
fn bundled_resources_load() {
    let reference = load_resources(&bundled_resources()).expect("load resources");
    assert!(reference.licenses.contains("MIT"));
    assert!(reference.file_formats.contains(".pdf"));
}

#[test]
fn bundled_picklists_cover_spdx_and_common_formats() {
    let reference = load_resources(&bundled_resources()).expect("load resources");
    assert!(reference.licenses.len() > 500);
    let checker = RecordChecker::new(&reference, ValidationConfig::default());
    for license in ["AGPL-3.0-only", "CC-BY-SA-3.0", "LGPL-2.1-only", "CC0-1.0", "EUPL-1.2"] {
        assert!(
            checker.check_column(Attribute::License, [license]).is_empty(),
            "{license} should be listed"
        );
    }
    for formats in [".gif * .tex", ".ipynb", ".docx * .pptx * .mp3"] {
        assert!(
            checker.check_column(Attribute::FileFormat, [formats]).is_empty(),
            "{formats} should be listed"
        );
    }
}

#[test]
fn clean_file_passes() {
    let dir = TempDir::new().expect("temp dir");
    let input = write_input(
        dir.path(),
        &format!(
            "{HEADER}\n\"Doe, Jane\",MIT,https://example.org/course,Intro,About data,NFDI4Chem (S),https://w3id.org/kim/hochschulfaechersystematik/n079,video,novice,2023-05,.pdf,researcher\n"
        ),
    );
    let report = dir.path().join("report.csv");
    let outcome = check_file(&request(input, Some(report.clone()), 0)).expect("check");

    assert!(!outcome.has_errors());
    assert_eq!(outcome.result.record_count, 1);
    assert_eq!(outcome.result.warning_count(), 0);
    let text = fs::read_to_string(&report).expect("read report");
    assert_eq!(text.trim_end(), HEADER);
}

#[test]
fn findings_fail_the_run_and_land_in_the_report() {
    let dir = TempDir::new().expect("temp dir");
    let input = write_input(
        dir.path(),
        "Authors,License,Title\n\"Doe, Jane\",FAKE-1.0,Intro\nDoe Jane,MIT,\n",
    );
    let report = dir.path().join("report.csv");
    let outcome = check_file(&request(input, Some(report.clone()), 0)).expect("check");

    assert!(outcome.has_errors());
    let text = fs::read_to_string(&report).expect("read report");
    let lines: Vec<&str> = text.lines().collect();
    assert!(lines[0].starts_with("Authors,License,Link,Title,"));
    assert!(lines[1].starts_with(
        "Line 3: Wrong name format.,Line 2: Provided License is not part of the list"
    ));
    assert!(text.contains("The mandatory Attribute 'Link' is missing from every item!"));
    assert!(text.contains("Line 3: Title is missing."));
}

#[test]
fn header_lines_shift_report_lines() {
    let dir = TempDir::new().expect("temp dir");
    let input = write_input(
        dir.path(),
        "Title,FileFormat\nmandatory,recommended\nIntro,\n",
    );
    let outcome = check_file(&request(input, None, 1)).expect("check");

    let messages = outcome
        .result
        .get(Attribute::FileFormat)
        .expect("file format outcome")
        .messages();
    assert_eq!(
        messages,
        vec!["Line 3: It is recommended to provide the file format of a learning resource."]
    );
    assert!(outcome.report.is_none());
}

#[test]
fn missing_input_is_fatal() {
    let dir = TempDir::new().expect("temp dir");
    let error = check_file(&request(dir.path().join("absent.csv"), None, 0))
        .expect_err("missing input");
    assert!(format!("{error:#}").contains("absent.csv"));
}

#[test]
fn missing_resources_are_fatal() {
    let dir = TempDir::new().expect("temp dir");
    let input = write_input(dir.path(), "Title\nIntro\n");
    let mut request = request(input, None, 0);
    request.resources = dir.path().join("no-such-dir");
    let error = check_file(&request).expect_err("missing resources");
    assert!(format!("{error:#}").contains("load reference data"));
}
