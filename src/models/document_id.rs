use crate::Error;
use std::path::Path;

const ADDRESS_SEPARATOR: &str = "_ ";
const DOCUMENT_SUFFIX: &str = ".pdf";

/// Identity of a report, passed alongside its text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentId {
    pub address: String,
    /// Overrides the market name found in the report text.
    pub market: Option<String>,
}

impl DocumentId {
    pub fn new(address: &str) -> Self {
        Self {
            address: address.to_string(),
            market: None,
        }
    }

    pub fn with_market(mut self, market: &str) -> Self {
        self.market = Some(market.to_string());
        self
    }

    /// Recovers the address from an exported report name such as
    /// `Property Report_ 123 Main St.pdf`.
    pub fn from_file_name(path: &Path) -> Result<Self, Error> {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        let after_separator = file_name
            .split(ADDRESS_SEPARATOR)
            .nth(1)
            .ok_or_else(|| Error::InvalidFileName(file_name.clone()))?;

        // ASCII lowercasing keeps byte offsets intact
        let end = after_separator
            .to_ascii_lowercase()
            .find(DOCUMENT_SUFFIX)
            .unwrap_or(after_separator.len());

        let address = after_separator[..end].trim();

        if address.is_empty() {
            return Err(Error::InvalidFileName(file_name));
        }

        Ok(Self::new(address))
    }
}
