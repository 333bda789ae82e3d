use crate::constants::COLUMN_ORDER;
use crate::models::{
    DocumentId, DocumentOpener, ExtractorConfig, FieldExtractor, OverviewRecord,
    ReconcileOutcome, ReconcilerConfig, RecordReconciler, ReferenceTables,
};
use crate::Error;
use csv::Writer;
use log::{debug, error, info, warn};
use std::fs;
use std::io::Write;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::{Path, PathBuf};

pub struct BatchConfig<'a> {
    /// Extensions (without the dot, compared case-insensitively) of files treated as reports.
    pub document_extensions: &'a [&'a str],
    /// Columns dropped from the output.
    pub excluded_columns: &'a [&'a str],
}

/// A report which yielded no record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentFailure {
    pub file_name: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub rows_written: usize,
    /// Set only when a CSV was written.
    pub output_path: Option<PathBuf>,
    pub failures: Vec<DocumentFailure>,
}

impl BatchReport {
    pub fn has_results(&self) -> bool {
        self.rows_written > 0
    }
}

pub struct BatchDriver<'a, O: DocumentOpener> {
    opener: O,
    extractor: FieldExtractor<'a>,
    reconciler: RecordReconciler<'a>,
    reference_tables: &'a ReferenceTables,
    config: &'a BatchConfig<'a>,
}

impl<'a, O: DocumentOpener> BatchDriver<'a, O> {
    pub fn new(
        opener: O,
        extractor_config: &'a ExtractorConfig,
        reconciler_config: &'a ReconcilerConfig<'a>,
        reference_tables: &'a ReferenceTables,
        config: &'a BatchConfig<'a>,
    ) -> Self {
        BatchDriver {
            opener,
            extractor: FieldExtractor::new(extractor_config),
            reconciler: RecordReconciler::new(reconciler_config),
            reference_tables,
            config,
        }
    }

    /// Header of the output CSV: the fixed column order minus excluded columns.
    pub fn output_columns(&self) -> Vec<&'static str> {
        COLUMN_ORDER
            .iter()
            .copied()
            .filter(|column| !self.config.excluded_columns.contains(column))
            .collect()
    }

    /// Report files directly inside `input_dir`, sorted by file name.
    pub fn list_documents(&self, input_dir: &Path) -> Result<Vec<PathBuf>, Error> {
        let mut documents = Vec::new();

        for entry in fs::read_dir(input_dir)? {
            let path = entry?.path();

            if path.is_file() && self.has_document_extension(&path) {
                documents.push(path);
            }
        }

        documents.sort();

        Ok(documents)
    }

    fn has_document_extension(&self, path: &Path) -> bool {
        let Some(extension) = path.extension() else {
            return false;
        };

        self.config
            .document_extensions
            .iter()
            .any(|accepted| extension.eq_ignore_ascii_case(accepted))
    }

    /// Extracts and reconciles a single report.
    pub fn process_document(&self, path: &Path) -> Result<OverviewRecord, Error> {
        let document_id = DocumentId::from_file_name(path)?;
        let document = self.opener.open(path)?;

        let mut record = self.extractor.extract(&document_id, &document)?;

        match self
            .reconciler
            .reconcile(&mut record, self.reference_tables)?
        {
            ReconcileOutcome::Matched { submarket, score } => {
                debug!("{} matched {:?} ({:?})", document_id.address, submarket, score);
            }
            ReconcileOutcome::NoMatch => {
                warn!(
                    "{}: no reference match for {:?}",
                    document_id.address,
                    record.location()
                );
            }
            ReconcileOutcome::Skipped(reason) => {
                debug!("{}: reconciliation skipped ({:?})", document_id.address, reason);
            }
        }

        Ok(record)
    }

    /// Processes every report, containing failures (including panics raised
    /// while decoding a document) to the report which caused them.
    pub fn collect_records(
        &self,
        input_dir: &Path,
    ) -> Result<(Vec<OverviewRecord>, Vec<DocumentFailure>), Error> {
        let documents = self.list_documents(input_dir)?;
        let total_documents = documents.len();

        let mut records = Vec::new();
        let mut failures = Vec::new();

        for (document_idx, path) in documents.iter().enumerate() {
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();

            info!(
                "   -- {} ({} of {})",
                file_name,
                document_idx + 1,
                total_documents
            );

            let result = catch_unwind(AssertUnwindSafe(|| self.process_document(path)))
                .unwrap_or_else(|panic_info| {
                    let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                        (*s).to_string()
                    } else if let Some(s) = panic_info.downcast_ref::<String>() {
                        s.clone()
                    } else {
                        "unknown panic".to_string()
                    };

                    Err(Error::DocumentError(format!("panicked: {}", panic_msg)))
                });

            match result {
                Ok(record) => records.push(record),
                Err(err) => {
                    error!("Error parsing {}: {}", file_name, err);
                    failures.push(DocumentFailure {
                        file_name,
                        reason: err.to_string(),
                    });
                }
            }
        }

        Ok((records, failures))
    }

    pub fn write_csv<W: Write>(&self, records: &[OverviewRecord], writer: W) -> Result<(), Error> {
        let columns = self.output_columns();
        let mut writer = Writer::from_writer(writer);

        writer.write_record(&columns)?;

        for record in records {
            writer.write_record(record.project(&columns))?;
        }

        writer.flush()?;

        Ok(())
    }

    /// Runs the whole folder. Writes `output_csv` only when at least one
    /// report yielded a record.
    pub fn run(&self, input_dir: &Path, output_csv: &Path) -> Result<BatchReport, Error> {
        let (records, failures) = self.collect_records(input_dir)?;

        if records.is_empty() {
            warn!("No results extracted.");
            return Ok(BatchReport {
                rows_written: 0,
                output_path: None,
                failures,
            });
        }

        let file = fs::File::create(output_csv)?;
        self.write_csv(&records, file)?;

        info!("Wrote {} rows to {:?}", records.len(), output_csv);

        Ok(BatchReport {
            rows_written: records.len(),
            output_path: Some(output_csv.to_path_buf()),
            failures,
        })
    }
}
