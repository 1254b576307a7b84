//! The shipped appearance file and the loader's failure modes.

use std::io::Write as _;
use std::path::PathBuf;

use seatmap_engine::{DataError, load_floor_data};

fn shipped_data_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("data")
        .join("data.json")
}

#[test]
fn shipped_data_file_loads_and_validates() {
    let data = load_floor_data(&shipped_data_path()).expect("in-tree data.json must load");
    let table = data.table_style().unwrap();
    assert!(table.width > 0.0 && table.height > 0.0);
    let chair = data.chair_style().unwrap();
    assert!(chair.size > 0.0);
}

#[test]
fn loader_reports_each_failure_mode() {
    let dir = tempfile::tempdir().unwrap();

    let missing = dir.path().join("missing.json");
    assert!(matches!(
        load_floor_data(&missing).unwrap_err(),
        DataError::Read { .. }
    ));

    let malformed = dir.path().join("malformed.json");
    std::fs::File::create(&malformed)
        .unwrap()
        .write_all(b"{ oops")
        .unwrap();
    assert!(matches!(
        load_floor_data(&malformed).unwrap_err(),
        DataError::Parse { .. }
    ));

    let incomplete = dir.path().join("incomplete.json");
    std::fs::File::create(&incomplete)
        .unwrap()
        .write_all(br#"{ "rectangles": [] }"#)
        .unwrap();
    assert!(matches!(
        load_floor_data(&incomplete).unwrap_err(),
        DataError::Invalid { .. }
    ));
}
