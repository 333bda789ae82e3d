use crate::constants::{
    FIELD_SUBMARKET, INVENTORY_COLUMN, MARKET_ASKING_RENT_COLUMN, SIGNED_SQUARE_FOOT_COLUMNS,
};
use crate::models::{
    OverviewRecord, PropertyBucket, ReferenceEntry, ReferenceIndex, ReferenceTables,
};
use crate::types::ReferenceRow;
use crate::utils::{format_signed_square_feet, format_thousands, parse_reference_number};
use crate::Error;
use log::{debug, info};

pub struct ReconcilerConfig<'a> {
    /// Reference column holding the composite geography name.
    pub key_column: &'a str,
    /// Also accept keys which only match the query once abbreviations are
    /// expanded (`Ft Worth CBD` for `Fort Worth Central Business District`).
    /// Such matches rank below every literal match.
    pub abbreviation_fallback: bool,
}

/// How a reference key relates to the queried submarket; higher is better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchClass {
    AbbreviationEquivalent = 0,
    QueryWithinKey = 1,
    KeyWithinQuery = 2,
    Exact = 3,
}

/// Ranks candidate keys by class, then by key length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MatchScore {
    pub class: MatchClass,
    pub key_length: usize,
}

#[derive(Debug, Clone, Copy)]
pub struct ReferenceMatch<'i> {
    pub entry: &'i ReferenceEntry,
    pub score: MatchScore,
}

impl<'i> ReferenceMatch<'i> {
    pub fn submarket(&self) -> &'i str {
        &self.entry.submarket
    }

    /// First row stored under the matched key.
    pub fn row(&self) -> Option<&'i ReferenceRow> {
        self.entry.rows.first()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    NoSubmarket,
    NoPropertyType,
    UnrecognizedPropertyType(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileOutcome {
    Matched {
        submarket: String,
        score: MatchScore,
    },
    NoMatch,
    Skipped(SkipReason),
}

pub struct RecordReconciler<'a> {
    config: &'a ReconcilerConfig<'a>,
}

impl<'a> RecordReconciler<'a> {
    pub fn new(config: &'a ReconcilerConfig<'a>) -> Self {
        RecordReconciler { config }
    }

    /// Scores one reference key against the queried submarket; `None` when
    /// the two are unrelated.
    pub fn score(&self, query_submarket: &str, entry: &ReferenceEntry) -> Option<MatchScore> {
        let key = entry.submarket.as_str();

        let class = if key == query_submarket {
            MatchClass::Exact
        } else if !key.is_empty() && query_submarket.contains(key) {
            MatchClass::KeyWithinQuery
        } else if !query_submarket.is_empty() && key.contains(query_submarket) {
            MatchClass::QueryWithinKey
        } else if self.config.abbreviation_fallback && entry.pattern.is_full_match(query_submarket)
        {
            MatchClass::AbbreviationEquivalent
        } else {
            return None;
        };

        Some(MatchScore {
            class,
            key_length: key.chars().count(),
        })
    }

    /// Best-scoring key for a `"<region> : <submarket>"` location.
    ///
    /// Keys are visited in index order and a later key replaces the current
    /// best only with a strictly greater score, so ties go to the first key seen.
    pub fn find_best_match<'i>(
        &self,
        location: &str,
        index: &'i ReferenceIndex,
    ) -> Option<ReferenceMatch<'i>> {
        let parts: Vec<&str> = location.split(':').map(str::trim).collect();

        let [region, query_submarket] = parts.as_slice() else {
            return None;
        };

        let mut best: Option<ReferenceMatch<'i>> = None;

        for entry in index.entries().filter(|entry| entry.region == *region) {
            let Some(score) = self.score(query_submarket, entry) else {
                continue;
            };

            if best.map_or(true, |current| score > current.score) {
                best = Some(ReferenceMatch { entry, score });
            }
        }

        best
    }

    /// Looks the record up in the reference table for its property type and
    /// merges the best match into it.
    ///
    /// Records without a submarket or with an unrecognized property type are
    /// left untouched.
    pub fn reconcile(
        &self,
        record: &mut OverviewRecord,
        reference_tables: &ReferenceTables,
    ) -> Result<ReconcileOutcome, Error> {
        if record.submarket().is_empty() {
            return Ok(ReconcileOutcome::Skipped(SkipReason::NoSubmarket));
        }

        if record.property_type().is_empty() {
            return Ok(ReconcileOutcome::Skipped(SkipReason::NoPropertyType));
        }

        let Some(bucket) = PropertyBucket::from_property_type(record.property_type()) else {
            debug!(
                "No reference table for property type {:?}",
                record.property_type()
            );
            return Ok(ReconcileOutcome::Skipped(
                SkipReason::UnrecognizedPropertyType(record.property_type().to_string()),
            ));
        };

        let index = reference_tables.get(bucket)?;

        let Some(best) = self.find_best_match(record.location(), index) else {
            info!("No {} reference match for {:?}", bucket, record.location());
            return Ok(ReconcileOutcome::NoMatch);
        };

        let submarket = best.submarket().to_string();
        record.set(FIELD_SUBMARKET, Some(submarket.clone()));

        if let Some(row) = best.row() {
            self.apply_reference_row(record, row)?;
        }

        Ok(ReconcileOutcome::Matched {
            submarket,
            score: best.score,
        })
    }

    /// Merges a reference row (extracted fields win) and formats the market statistics.
    pub fn apply_reference_row(
        &self,
        record: &mut OverviewRecord,
        row: &ReferenceRow,
    ) -> Result<(), Error> {
        record.merge_reference_defaults(row);

        for column in SIGNED_SQUARE_FOOT_COLUMNS {
            let raw = record.get(column).unwrap_or("").to_string();
            record.set(column, Some(format_signed_square_feet(&raw, column)?));
        }

        let inventory = record.get(INVENTORY_COLUMN).unwrap_or("").to_string();
        if let Some(value) = parse_reference_number(&inventory, INVENTORY_COLUMN)? {
            record.set(INVENTORY_COLUMN, Some(format_thousands(value)));
        }

        let asking_rent = record.get(MARKET_ASKING_RENT_COLUMN).unwrap_or("").to_string();
        if !asking_rent.is_empty() {
            record.set(
                MARKET_ASKING_RENT_COLUMN,
                Some(format!("{} PSF", asking_rent)),
            );
        }

        Ok(())
    }
}
