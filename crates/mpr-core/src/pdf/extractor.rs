//! PDF text extraction using lopdf and pdf-extract.

use lopdf::Document;
use tracing::{debug, warn};

use super::{LineSource, Result};
use crate::error::ExtractionError;
use crate::models::RawLine;

/// Line source backed by a PDF document.
pub struct PdfExtractor {
    document: Option<Document>,
    raw_data: Vec<u8>,
}

impl PdfExtractor {
    /// Create an empty extractor; call [`PdfExtractor::load`] before use.
    pub fn new() -> Self {
        Self {
            document: None,
            raw_data: Vec::new(),
        }
    }

    /// Create an extractor and load `data` into it.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let mut extractor = Self::new();
        extractor.load(data)?;
        Ok(extractor)
    }

    /// Load a PDF from bytes.
    pub fn load(&mut self, data: &[u8]) -> Result<()> {
        let mut doc =
            Document::load_mem(data).map_err(|e| ExtractionError::Parse(e.to_string()))?;

        // USDA reports are sometimes encrypted with an empty owner password
        if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(ExtractionError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");

            let mut decrypted_data = Vec::new();
            doc.save_to(&mut decrypted_data).map_err(|e| {
                ExtractionError::Parse(format!("Failed to save decrypted PDF: {}", e))
            })?;
            self.raw_data = decrypted_data;
        } else {
            self.raw_data = data.to_vec();
        }

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(ExtractionError::NoPages);
        }

        debug!("Loaded PDF with {} pages", page_count);
        self.document = Some(doc);
        Ok(())
    }

    /// Get the number of pages in the loaded PDF.
    pub fn page_count(&self) -> u32 {
        self.document
            .as_ref()
            .map(|doc| doc.get_pages().len() as u32)
            .unwrap_or(0)
    }

    /// Extract the text of every page, in order.
    pub fn extract_pages(&self) -> Result<Vec<String>> {
        if self.document.is_none() {
            return Err(ExtractionError::Parse("No document loaded".to_string()));
        }

        let pages = pdf_extract::extract_text_from_mem_by_pages(&self.raw_data)
            .map_err(|e| ExtractionError::TextExtraction(e.to_string()))?;

        if pages.len() as u32 != self.page_count() {
            warn!(
                "Text extractor returned {} pages for a {} page document",
                pages.len(),
                self.page_count()
            );
        }
        Ok(pages)
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl LineSource for PdfExtractor {
    fn lines(&self) -> Result<Vec<RawLine>> {
        let pages = self.extract_pages()?;
        let mut lines = Vec::new();

        for (page_idx, text) in pages.iter().enumerate() {
            let page = page_idx as u32 + 1;
            let before = lines.len();
            for line in text.lines() {
                let index = lines.len();
                lines.push(RawLine::new(line, page, index));
            }

            if lines.len() == before {
                warn!("No text found on page {}", page);
            } else {
                debug!("Extracted {} lines from page {}", lines.len() - before, page);
            }
        }

        if lines.iter().all(|l| l.text.trim().is_empty()) {
            return Err(ExtractionError::TextExtraction(
                "document contains no text".to_string(),
            ));
        }

        Ok(lines)
    }
}
