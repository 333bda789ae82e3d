mod config;
pub use config::{
    DEFAULT_BATCH_CONFIG, DEFAULT_EXTRACTOR_CONFIG, DEFAULT_RECONCILER_CONFIG,
    DEFAULT_REFERENCE_TABLE_PATHS,
};
pub mod constants;
pub mod models;
pub use models::{
    AlternationTable, BatchConfig, BatchDriver, BatchReport, DocumentFailure, DocumentId,
    DocumentOpener, DocumentTextSource, Error, ExtractorConfig, FieldExtractor, GeographyName,
    MatchClass, MatchScore, OverviewRecord, OverviewScan, PdfDocumentOpener, PropertyBucket,
    ReconcileOutcome, ReconcilerConfig, RecordReconciler, ReferenceIndex, ReferenceTablePaths,
    ReferenceTables, SubmarketLocator, SubmarketPattern, TextDocument, TextDocumentOpener,
    Tokenizer,
};
pub mod types;
pub mod utils;
pub use types::{FieldName, FieldValue, ReferenceRow, RegionCode, SquareFeet, SubmarketName};

use std::path::Path;

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// Extracts an overview record from already-extracted page text, without
/// consulting any reference data.
pub fn extract_overview_from_pages(
    document_id: &DocumentId,
    pages: &[String],
) -> Result<OverviewRecord, Error> {
    let document = TextDocument::new(pages.to_vec());

    FieldExtractor::new(DEFAULT_EXTRACTOR_CONFIG).extract(document_id, &document)
}

/// Rolls every PDF report in `input_dir` up into `output_csv`, using the
/// reference tables at their default locations.
pub fn run_batch(
    input_dir: &Path,
    output_csv: &Path,
    excluded_columns: &[&str],
) -> Result<BatchReport, Error> {
    let reference_tables = ReferenceTables::load(
        DEFAULT_REFERENCE_TABLE_PATHS,
        DEFAULT_RECONCILER_CONFIG.key_column,
    );

    run_batch_with_custom_config(
        PdfDocumentOpener,
        &reference_tables,
        DEFAULT_RECONCILER_CONFIG,
        &BatchConfig {
            excluded_columns,
            ..*DEFAULT_BATCH_CONFIG
        },
        input_dir,
        output_csv,
    )
}

pub fn run_batch_with_custom_config<O: DocumentOpener>(
    opener: O,
    reference_tables: &ReferenceTables,
    reconciler_config: &ReconcilerConfig,
    batch_config: &BatchConfig,
    input_dir: &Path,
    output_csv: &Path,
) -> Result<BatchReport, Error> {
    let batch_driver = BatchDriver::new(
        opener,
        DEFAULT_EXTRACTOR_CONFIG,
        reconciler_config,
        reference_tables,
        batch_config,
    );

    batch_driver.run(input_dir, output_csv)
}
