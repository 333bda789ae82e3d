use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("Missing Building Area: RBA is missing or zero")]
    MissingBuildingArea,

    #[error("Missing Field: {0}")]
    MissingField(&'static str),

    #[error("Invalid File Name: {0} does not follow the `<prefix>_ <address>.pdf` convention")]
    InvalidFileName(String),

    #[error("Missing Column: {0}")]
    MissingColumn(String),

    #[error("Invalid Number: column `{column}` holds `{value}`")]
    InvalidNumber { column: String, value: String },

    #[error("Square Footage Out Of Range: {field} of {value} SF")]
    SquareFootageOutOfRange { field: &'static str, value: u64 },

    #[error("Reference Table Unavailable: {bucket} ({reason})")]
    ReferenceTableUnavailable { bucket: String, reason: String },

    #[error("Document Error: {0}")]
    DocumentError(String),

    #[error("IO Error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV Error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Regex Error: {0}")]
    RegexError(#[from] regex::Error),

    #[error("PDF Error: {0}")]
    PdfError(#[from] lopdf::Error),
}

