use clap::Parser;
use log::{error, info};
use std::path::PathBuf;
use submarket_sniffer::constants::DEFAULT_EXCLUDED_COLUMNS;
use submarket_sniffer::{
    run_batch_with_custom_config, BatchConfig, BatchReport, DocumentOpener, Error,
    PdfDocumentOpener, ReconcilerConfig, ReferenceTablePaths, ReferenceTables,
    TextDocumentOpener, DEFAULT_BATCH_CONFIG, DEFAULT_RECONCILER_CONFIG,
    DEFAULT_REFERENCE_TABLE_PATHS,
};

/// Rolls a folder of property overview reports up into a single CSV,
/// enriched with submarket statistics.
#[derive(Parser, Debug)]
#[command(name = "submarket-sniffer-cli", version, about)]
struct Cli {
    /// Folder holding the reports
    input_dir: PathBuf,

    /// Output CSV
    #[arg(short, long, default_value = "all_results.csv")]
    output: PathBuf,

    /// Column to drop from the output (repeatable). Replaces the default exclusions.
    #[arg(long = "exclude", value_name = "COL")]
    excluded_columns: Vec<String>,

    #[arg(long, value_name = "P", default_value = DEFAULT_REFERENCE_TABLE_PATHS.office)]
    office_table: String,

    #[arg(long, value_name = "P", default_value = DEFAULT_REFERENCE_TABLE_PATHS.retail)]
    retail_table: String,

    #[arg(long, value_name = "P", default_value = DEFAULT_REFERENCE_TABLE_PATHS.industrial)]
    industrial_table: String,

    /// Reference column holding the composite geography name
    #[arg(long, value_name = "C", default_value = DEFAULT_RECONCILER_CONFIG.key_column)]
    key_column: String,

    /// Extension of report files (repeatable)
    #[arg(long = "extension", value_name = "EXT")]
    extensions: Vec<String>,

    /// Also accept submarkets matching only through abbreviation variants
    #[arg(long)]
    abbreviation_fallback: bool,

    /// Treat reports as form-feed separated plain text rather than PDF
    #[arg(long)]
    text_input: bool,
}

fn run<O: DocumentOpener>(cli: &Cli, opener: O) -> Result<BatchReport, Error> {
    let reference_tables = ReferenceTables::load(
        &ReferenceTablePaths {
            office: &cli.office_table,
            retail: &cli.retail_table,
            industrial: &cli.industrial_table,
        },
        &cli.key_column,
    );

    let reconciler_config = ReconcilerConfig {
        key_column: &cli.key_column,
        abbreviation_fallback: cli.abbreviation_fallback,
    };

    let excluded_columns: Vec<&str> = if cli.excluded_columns.is_empty() {
        DEFAULT_EXCLUDED_COLUMNS.to_vec()
    } else {
        cli.excluded_columns.iter().map(String::as_str).collect()
    };

    let document_extensions: Vec<&str> = if cli.extensions.is_empty() {
        DEFAULT_BATCH_CONFIG.document_extensions.to_vec()
    } else {
        cli.extensions
            .iter()
            .map(|extension| extension.trim_start_matches('.'))
            .collect()
    };

    let batch_config = BatchConfig {
        document_extensions: &document_extensions,
        excluded_columns: &excluded_columns,
    };

    run_batch_with_custom_config(
        opener,
        &reference_tables,
        &reconciler_config,
        &batch_config,
        &cli.input_dir,
        &cli.output,
    )
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    info!("Processing {:?}...", cli.input_dir);

    let result = if cli.text_input {
        run(&cli, TextDocumentOpener)
    } else {
        run(&cli, PdfDocumentOpener)
    };

    match result {
        Ok(report) => {
            for failure in &report.failures {
                eprintln!("skipped {}: {}", failure.file_name, failure.reason);
            }

            match &report.output_path {
                Some(output_path) => println!(
                    "{} rows written to {}",
                    report.rows_written,
                    output_path.display()
                ),
                None => println!("No results extracted."),
            }
        }
        Err(e) => {
            error!("Error processing {:?}: {}", cli.input_dir, e);
            std::process::exit(1);
        }
    }
}
