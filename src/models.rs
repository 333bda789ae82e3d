pub mod alternation_table;
pub use alternation_table::AlternationTable;

pub mod batch_driver;
pub use batch_driver::{BatchConfig, BatchDriver, BatchReport, DocumentFailure};

pub mod document_id;
pub use document_id::DocumentId;

pub mod document_source;
pub use document_source::{
    DocumentOpener, DocumentTextSource, PdfDocument, PdfDocumentOpener, TextDocument,
    TextDocumentOpener,
};

pub mod error;
pub use error::Error;

pub mod field_extractor;
pub use field_extractor::{ExtractorConfig, FieldExtractor};

pub mod geography_name;
pub use geography_name::GeographyName;

pub mod overview_record;
pub use overview_record::OverviewRecord;

pub mod overview_scan;
pub use overview_scan::OverviewScan;

pub mod record_reconciler;
pub use record_reconciler::{
    MatchClass, MatchScore, ReconcileOutcome, ReconcilerConfig, RecordReconciler,
    ReferenceMatch, SkipReason,
};

pub mod reference_index;
pub use reference_index::{ReferenceEntry, ReferenceIndex};

pub mod reference_tables;
pub use reference_tables::{PropertyBucket, ReferenceTablePaths, ReferenceTables};

pub mod submarket_locator;
pub use submarket_locator::SubmarketLocator;

pub mod submarket_pattern;
pub use submarket_pattern::SubmarketPattern;

pub mod tokenizer;
pub use tokenizer::Tokenizer;
