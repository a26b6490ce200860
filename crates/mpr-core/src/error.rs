//! Error types for the mpr-core library.

use thiserror::Error;

/// Main error type for the mpr library.
#[derive(Error, Debug)]
pub enum MprError {
    /// The line source could not produce text.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// Report type identifier is not part of the catalog.
    #[error("unknown report type: {0}")]
    UnknownReportType(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised while turning a source document into text lines.
///
/// These are the only failures that abort a parse call.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from the document.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The document is empty or has no pages.
    #[error("document has no pages")]
    NoPages,
}

/// Result type for the mpr library.
pub type Result<T> = std::result::Result<T, MprError>;
