use crate::models::{GeographyName, SubmarketPattern};
use crate::types::{ReferenceKey, ReferenceRow, RegionCode, SubmarketName};
use crate::Error;
use csv::ReaderBuilder;
use flate2::read::GzDecoder;
use log::{debug, info};
use std::collections::HashMap;
use std::fs::File;
use std::io::{Cursor, Read};
use std::path::Path;

/// All reference rows sharing a `(region, submarket)` key.
#[derive(Debug, Clone)]
pub struct ReferenceEntry {
    pub region: RegionCode,
    pub submarket: SubmarketName,
    /// Built once per key so lookups never recompile.
    pub pattern: SubmarketPattern,
    pub rows: Vec<ReferenceRow>,
}

/// Reference dataset keyed by `(region, submarket)`.
///
/// Keys are kept in first-insertion order; lookups which need a "first seen"
/// tie-break rely on this.
#[derive(Debug, Clone, Default)]
pub struct ReferenceIndex {
    entries: Vec<ReferenceEntry>,
    positions: HashMap<ReferenceKey, usize>,
    skipped_rows: usize,
}

impl ReferenceIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a reference CSV from disk. Paths ending in `.gz` are decompressed first.
    pub fn from_path<P: AsRef<Path>>(path: P, key_column: &str) -> Result<Self, Error> {
        let path = path.as_ref();
        info!("Loading reference table {:?}...", path);

        let file = File::open(path)?;

        let is_gzipped = path
            .extension()
            .map_or(false, |extension| extension.eq_ignore_ascii_case("gz"));

        if is_gzipped {
            Self::from_reader(GzDecoder::new(file), key_column)
        } else {
            Self::from_reader(file, key_column)
        }
    }

    pub fn from_csv_str(csv: &str, key_column: &str) -> Result<Self, Error> {
        Self::from_reader(Cursor::new(csv), key_column)
    }

    /// Decompress and parse a gzip-compressed reference CSV
    pub fn from_gz_bytes(read_bytes: &[u8], key_column: &str) -> Result<Self, Error> {
        let mut decoder = GzDecoder::new(read_bytes);
        let mut decompressed_data = String::new();
        decoder.read_to_string(&mut decompressed_data)?;

        Self::from_csv_str(&decompressed_data, key_column)
    }

    pub fn from_reader<R: Read>(reader: R, key_column: &str) -> Result<Self, Error> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        // Spreadsheet exports commonly lead with a UTF-8 byte order mark
        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|header| header.trim_start_matches('\u{feff}').to_string())
            .collect();

        let key_position = headers
            .iter()
            .position(|header| header == key_column)
            .ok_or_else(|| Error::MissingColumn(key_column.to_string()))?;

        let mut index = Self::new();

        for record in reader.records() {
            let record = record?;

            let geography = record
                .get(key_position)
                .and_then(|raw| GeographyName::parse(raw));

            let Some(geography) = geography else {
                debug!(
                    "Skipping reference row without a usable {}: {:?}",
                    key_column, record
                );
                index.skipped_rows += 1;
                continue;
            };

            let row: ReferenceRow = headers
                .iter()
                .zip(record.iter())
                .map(|(header, value)| (header.clone(), value.to_string()))
                .collect();

            index.insert(&geography, row)?;
        }

        info!(
            "Indexed {} reference rows under {} keys ({} skipped)",
            index.row_count(),
            index.len(),
            index.skipped_rows
        );

        Ok(index)
    }

    /// Appends a row under the geography's `(region, submarket)` key.
    pub fn insert(&mut self, geography: &GeographyName, row: ReferenceRow) -> Result<(), Error> {
        let key = (geography.region.to_uppercase(), geography.submarket.clone());

        if let Some(&position) = self.positions.get(&key) {
            self.entries[position].rows.push(row);
            return Ok(());
        }

        let pattern = SubmarketPattern::build(&key.1)?;

        self.positions.insert(key.clone(), self.entries.len());
        self.entries.push(ReferenceEntry {
            region: key.0,
            submarket: key.1,
            pattern,
            rows: vec![row],
        });

        Ok(())
    }

    pub fn get(&self, region: &str, submarket: &str) -> Option<&[ReferenceRow]> {
        self.positions
            .get(&(region.to_string(), submarket.to_string()))
            .map(|&position| self.entries[position].rows.as_slice())
    }

    /// Entries in first-insertion order.
    pub fn entries(&self) -> impl Iterator<Item = &ReferenceEntry> {
        self.entries.iter()
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.entries.iter().map(|entry| entry.rows.len()).sum()
    }

    /// Rows excluded because their geography name could not be keyed.
    pub fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }
}
