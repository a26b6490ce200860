//! Line sources: where a report's text lines come from.

mod extractor;

pub use extractor::PdfExtractor;

use crate::error::ExtractionError;
use crate::models::RawLine;

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Produces the ordered text lines of a whole document.
pub trait LineSource {
    fn lines(&self) -> Result<Vec<RawLine>>;
}

/// Text that has already been extracted elsewhere.
#[derive(Debug, Clone)]
pub struct TextSource {
    text: String,
}

impl TextSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl LineSource for TextSource {
    fn lines(&self) -> Result<Vec<RawLine>> {
        if self.text.trim().is_empty() {
            return Err(ExtractionError::NoPages);
        }
        Ok(RawLine::from_text(&self.text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_source() {
        let source = TextSource::new("Loin\n1/4 Trimmed Loin VAC 171,141 92.50 - 109.90 97.72\n");
        let lines = source.lines().unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text, "Loin");
    }

    #[test]
    fn test_empty_text_is_an_extraction_failure() {
        assert!(matches!(
            TextSource::new(" \n ").lines(),
            Err(ExtractionError::NoPages)
        ));
    }
}
