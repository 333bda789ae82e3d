use crate::constants::{DEFAULT_EXCLUDED_COLUMNS, DEFAULT_GEOGRAPHY_COLUMN, SUBMARKET_CLUSTER_MARKER};
use crate::models::{BatchConfig, ExtractorConfig, ReconcilerConfig, ReferenceTablePaths};

pub const DEFAULT_EXTRACTOR_CONFIG: &ExtractorConfig = &ExtractorConfig {
    submarket_cluster_marker: SUBMARKET_CLUSTER_MARKER,
    placeholder_value: "Company To Provide",
};

pub const DEFAULT_RECONCILER_CONFIG: &ReconcilerConfig<'static> = &ReconcilerConfig {
    key_column: DEFAULT_GEOGRAPHY_COLUMN,
    abbreviation_fallback: false,
};

pub const DEFAULT_REFERENCE_TABLE_PATHS: &ReferenceTablePaths<'static> = &ReferenceTablePaths {
    office: "OfficeSubmarkets.csv",
    retail: "RetailSubmarkets.csv",
    industrial: "IndustrialSubmarkets.csv",
};

pub const DEFAULT_BATCH_CONFIG: &BatchConfig<'static> = &BatchConfig {
    document_extensions: &["pdf"],
    excluded_columns: DEFAULT_EXCLUDED_COLUMNS,
};
