use std::fs;
use std::path::{Path, PathBuf};

use dif_ingest::{IngestError, IngestOptions, read_record_set, read_record_set_from_reader};

fn temp_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write file");
    path
}

#[test]
fn reads_headers_and_rows() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = temp_file(
        dir.path(),
        "resources.csv",
        "\u{feff}Authors,License,Title\n\"Doe, Jane\",MIT,Intro\n,,\n",
    );

    let records = read_record_set(&path, &IngestOptions::default()).expect("read csv");
    assert_eq!(records.headers, vec!["Authors", "License", "Title"]);
    assert_eq!(records.len(), 2);
    assert_eq!(records.rows[0], vec!["Doe, Jane", "MIT", "Intro"]);
    assert_eq!(records.rows[1], vec!["", "", ""]);
}

#[test]
fn skips_extra_header_lines() {
    let contents = "Title,License\nThe title,The license\nIntro,MIT\nAdvanced,\n";
    let options = IngestOptions::default().with_header_lines(1);
    let records = read_record_set_from_reader(contents.as_bytes(), Path::new("mem.csv"), &options)
        .expect("read csv");
    assert_eq!(records.len(), 2);
    assert_eq!(records.rows[0], vec!["Intro", "MIT"]);
    assert_eq!(records.rows[1], vec!["Advanced", ""]);
}

#[test]
fn pads_ragged_rows() {
    let contents = "Title,License,Link\nIntro\nA,B,C,D\n";
    let records =
        read_record_set_from_reader(contents.as_bytes(), Path::new("mem.csv"), &IngestOptions::default())
            .expect("read csv");
    assert_eq!(records.rows[0], vec!["Intro", "", ""]);
    assert_eq!(records.rows[1], vec!["A", "B", "C"]);
}

#[test]
fn keeps_cell_whitespace() {
    let contents = "Title\n\"  spaced  \"\n";
    let records =
        read_record_set_from_reader(contents.as_bytes(), Path::new("mem.csv"), &IngestOptions::default())
            .expect("read csv");
    assert_eq!(records.rows[0], vec!["  spaced  "]);
}

#[test]
fn offset_larger_than_rows_yields_empty_set() {
    let contents = "Title\nA\n";
    let options = IngestOptions::default().with_header_lines(5);
    let records = read_record_set_from_reader(contents.as_bytes(), Path::new("mem.csv"), &options)
        .expect("read csv");
    assert!(records.is_empty());
    assert_eq!(records.headers, vec!["Title"]);
}

#[test]
fn empty_file_is_an_error() {
    let result =
        read_record_set_from_reader("".as_bytes(), Path::new("empty.csv"), &IngestOptions::default());
    assert!(matches!(result, Err(IngestError::EmptyCsv { .. })));
}

#[test]
fn missing_file_is_reported() {
    let dir = tempfile::tempdir().expect("temp dir");
    let result = read_record_set(&dir.path().join("absent.csv"), &IngestOptions::default());
    assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
}
