use std::collections::{BTreeMap, HashMap};

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Name of a column in the reference dataset or a field of an overview record.
pub type FieldName = String;

/// Value held by an overview record field; `None` serializes as an empty CSV cell.
pub type FieldValue = Option<String>;

/// Fields of an overview record, ordered by name for deterministic iteration.
pub type OverviewFields = BTreeMap<FieldName, FieldValue>;

/// One row of a reference dataset, keyed by header name.
///
/// Column order is irrelevant here since output is always projected onto the
/// fixed column order.
pub type ReferenceRow = HashMap<FieldName, String>;

/// Uppercased region portion of a geography name (e.g. `TX USA`).
pub type RegionCode = String;

/// Submarket text as it appears in a geography name or a report.
pub type SubmarketName = String;

/// Key of the reference index.
pub type ReferenceKey = (RegionCode, SubmarketName);

/// Square footage as extracted from report text; never negative.
pub type SquareFeet = u64;

/// Raw text of a single document page.
pub type PageText = String;
