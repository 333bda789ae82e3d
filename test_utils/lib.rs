#![allow(dead_code)]

#[path = "constants.rs"]
pub mod constants;

use constants::*;
use csv::Reader;
use std::fs;
use std::path::{Path, PathBuf};
use submarket_sniffer::{PropertyBucket, ReferenceIndex, ReferenceTables};

/// Loads the three fixture reference tables.
pub fn load_test_reference_tables() -> ReferenceTables {
    let load = |path: &Path| {
        ReferenceIndex::from_path(path, GEOGRAPHY_COLUMN).expect("Failed to load reference table")
    };

    ReferenceTables::new()
        .with_index(PropertyBucket::Office, load(&OFFICE_REFERENCE_CSV_PATH))
        .with_index(PropertyBucket::Retail, load(&RETAIL_REFERENCE_CSV_PATH))
        .with_index(
            PropertyBucket::Industrial,
            load(&INDUSTRIAL_REFERENCE_CSV_PATH),
        )
}

/// Writes a plain text report, pages separated by form feeds, the way the
/// text opener expects them.
pub fn write_text_report(dir: &Path, file_name: &str, pages: &[&str]) -> PathBuf {
    let path = dir.join(file_name);
    fs::write(&path, pages.join("\x0C")).expect("Failed to write test report");

    path
}

/// Header and rows of a written CSV.
pub fn read_csv_rows(path: &Path) -> (Vec<String>, Vec<Vec<String>>) {
    let mut reader = Reader::from_path(path).expect("Failed to open output CSV");

    let header = reader
        .headers()
        .expect("Failed to read CSV header")
        .iter()
        .map(|column| column.to_string())
        .collect();

    let rows = reader
        .records()
        .map(|record| {
            record
                .expect("Failed to read CSV row")
                .iter()
                .map(|value| value.to_string())
                .collect()
        })
        .collect();

    (header, rows)
}

/// Value of `column` in `row`, looked up through the header.
pub fn cell<'a>(header: &[String], row: &'a [String], column: &str) -> &'a str {
    let position = header
        .iter()
        .position(|name| name == column)
        .unwrap_or_else(|| panic!("Column {:?} not in header", column));

    &row[position]
}
