//! File-level runs of both converters against the fixtures in `specs/`.

use seed_convert::{ConvertError, convert_file, generate_file};
use std::fs;
use std::path::{Path, PathBuf};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("specs").join(name)
}

fn expected(name: &str) -> String {
    fs::read_to_string(fixture(name)).unwrap()
}

#[test]
fn test_text_to_csv_fixture() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("output.csv");

    let report = convert_file(&fixture("input.txt"), &out).unwrap();

    assert_eq!(fs::read_to_string(&out).unwrap(), expected("output.csv"));
    assert_eq!(report.records_written, 3);
    assert_eq!(report.lines_read, 5);
}

#[test]
fn test_text_to_csv_overwrites_destination() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("output.csv");
    fs::write(&out, "stale,content\n".repeat(100)).unwrap();

    convert_file(&fixture("input.txt"), &out).unwrap();

    assert_eq!(fs::read_to_string(&out).unwrap(), expected("output.csv"));
}

#[test]
fn test_text_to_csv_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("output.csv");

    let err = convert_file(&dir.path().join("absent.txt"), &out).unwrap_err();

    assert!(matches!(err, ConvertError::Read { .. }));
    assert!(!out.exists());
}

#[test]
fn test_npcs_to_sql_fixture() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("npcs.sql");

    let report = generate_file(&fixture("npcs.csv"), &fixture("maps.csv"), &out).unwrap();

    assert_eq!(fs::read_to_string(&out).unwrap(), expected("npcs.sql"));
    assert_eq!(report.keys, 3);
    assert_eq!(report.active, 4);
    assert_eq!(report.suppressed, 1);
    assert_eq!(report.total(), 5);
}

#[test]
fn test_npcs_to_sql_is_repeatable() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.sql");
    let second = dir.path().join("second.sql");

    generate_file(&fixture("npcs.csv"), &fixture("maps.csv"), &first).unwrap();
    generate_file(&fixture("npcs.csv"), &fixture("maps.csv"), &second).unwrap();

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn test_npcs_to_sql_all_suppressed_without_maps() {
    let dir = tempfile::tempdir().unwrap();
    let maps = dir.path().join("maps.csv");
    let out = dir.path().join("npcs.sql");
    fs::write(&maps, "MapId,Name\n").unwrap();

    let report = generate_file(&fixture("npcs.csv"), &maps, &out).unwrap();

    let sql = fs::read_to_string(&out).unwrap();
    assert_eq!(report.active, 0);
    assert_eq!(report.suppressed, 5);
    assert_eq!(sql.lines().count(), 5);
    assert!(sql.lines().all(|l| l.starts_with("-- INSERT INTO npcs VALUES (")));
}

#[test]
fn test_npcs_to_sql_short_row_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let npcs = dir.path().join("npcs.csv");
    let out = dir.path().join("npcs.sql");
    let mut table = expected("npcs.csv");
    table.push_str("6,Broken,0001,10\n");
    fs::write(&npcs, table).unwrap();

    let err = generate_file(&npcs, &fixture("maps.csv"), &out).unwrap_err();

    assert!(matches!(
        err,
        ConvertError::FieldCount {
            line: 7,
            expected: 13,
            found: 4,
            ..
        }
    ));
    assert!(!out.exists());
}

#[test]
fn test_npcs_to_sql_missing_maps() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("npcs.sql");

    let err = generate_file(&fixture("npcs.csv"), &dir.path().join("maps.csv"), &out).unwrap_err();

    assert!(matches!(err, ConvertError::Read { .. }));
}

#[test]
fn test_output_into_new_directory() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("build/sql/npcs.sql");

    generate_file(&fixture("npcs.csv"), &fixture("maps.csv"), &out).unwrap();

    assert_eq!(fs::read_to_string(&out).unwrap(), expected("npcs.sql"));
}
