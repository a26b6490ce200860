//! Core library for USDA market report parsing.
//!
//! This crate provides:
//! - Line sources (PDF text extraction, pre-extracted text)
//! - Row grammars, noise filtering and number normalization
//! - Section classifiers for weekly, daily and pork report layouts
//! - Pricing record models and parser configuration

pub mod error;
pub mod models;
pub mod pdf;
pub mod report;

pub use error::{ExtractionError, MprError, Result};
pub use models::config::{MprConfig, ParserConfig, SectionMatch, ZeroValuePolicy};
pub use models::{Layout, MeatType, PricingRecord, RawLine, ReportType};
pub use pdf::{LineSource, PdfExtractor, TextSource};
pub use report::{MarketReportParser, ParseReport, ParseStats, ReportParser};
