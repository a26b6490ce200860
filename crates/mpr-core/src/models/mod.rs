//! Data models shared by the parser and its callers.

pub mod config;
pub mod record;
pub mod report;

pub use record::{PricingRecord, RawLine};
pub use report::{Layout, MeatType, ReportType};
