use crate::types::PageText;
use crate::Error;
use std::fs;
use std::path::Path;

/// Per-page plain text of a single document.
pub trait DocumentTextSource {
    fn page_count(&self) -> usize;

    /// Text of the page at zero-based `index`.
    fn page_text(&self, index: usize) -> Result<PageText, Error>;
}

/// Opens documents found by the batch driver.
pub trait DocumentOpener {
    type Document: DocumentTextSource;

    fn open(&self, path: &Path) -> Result<Self::Document, Error>;
}

/// PDF document backed by `lopdf`.
pub struct PdfDocument {
    document: lopdf::Document,
    page_numbers: Vec<u32>,
}

impl PdfDocument {
    pub fn load(path: &Path) -> Result<Self, Error> {
        let document = lopdf::Document::load(path)?;
        let page_numbers = document.get_pages().keys().copied().collect();

        Ok(Self {
            document,
            page_numbers,
        })
    }
}

impl DocumentTextSource for PdfDocument {
    fn page_count(&self) -> usize {
        self.page_numbers.len()
    }

    fn page_text(&self, index: usize) -> Result<PageText, Error> {
        let page_number = self.page_numbers.get(index).ok_or_else(|| {
            Error::DocumentError(format!(
                "Page {} out of range ({} pages)",
                index + 1,
                self.page_numbers.len()
            ))
        })?;

        Ok(self.document.extract_text(&[*page_number])?)
    }
}

#[derive(Copy, Clone, Default)]
pub struct PdfDocumentOpener;

impl DocumentOpener for PdfDocumentOpener {
    type Document = PdfDocument;

    fn open(&self, path: &Path) -> Result<Self::Document, Error> {
        PdfDocument::load(path)
    }
}

/// Already-extracted text, one entry per page.
#[derive(Debug, Clone, Default)]
pub struct TextDocument {
    pages: Vec<PageText>,
}

impl TextDocument {
    pub fn new(pages: Vec<PageText>) -> Self {
        Self { pages }
    }

    /// Splits a text dump into pages on form feed characters.
    pub fn from_text(text: &str) -> Self {
        Self::new(text.split('\x0C').map(|page| page.to_string()).collect())
    }
}

impl DocumentTextSource for TextDocument {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_text(&self, index: usize) -> Result<PageText, Error> {
        self.pages.get(index).cloned().ok_or_else(|| {
            Error::DocumentError(format!(
                "Page {} out of range ({} pages)",
                index + 1,
                self.pages.len()
            ))
        })
    }
}

/// Reads form feed separated text dumps (e.g. `pdftotext` output saved under the report's name).
#[derive(Copy, Clone, Default)]
pub struct TextDocumentOpener;

impl DocumentOpener for TextDocumentOpener {
    type Document = TextDocument;

    fn open(&self, path: &Path) -> Result<Self::Document, Error> {
        let text = fs::read_to_string(path)?;
        Ok(TextDocument::from_text(&text))
    }
}
