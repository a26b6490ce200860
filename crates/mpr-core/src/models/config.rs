//! Configuration structures for the report parser.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MprError, Result};

/// Main configuration for the mpr pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MprConfig {
    /// Parser behavior.
    pub parser: ParserConfig,

    /// Output defaults for the CLI.
    pub output: OutputConfig,
}

/// How the daily layout resolves a line that matches several section markers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionMatch {
    /// Markers are tried most specific first; the first hit wins.
    #[default]
    FirstMatch,
    /// Every marker is tried; the last hit wins.
    LastMatch,
}

/// Whether a zero in volume or price disqualifies a pork row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroValuePolicy {
    /// Zero is treated the same as a missing value and the row is dropped.
    #[default]
    Reject,
    /// Zero is a legitimate value; only missing fields drop the row.
    Accept,
}

/// Parser configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Section marker resolution for daily reports.
    pub daily_section_match: SectionMatch,

    /// Zero handling for pork cut rows.
    pub pork_zero_values: ZeroValuePolicy,
}

/// Output serialization format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
    Text,
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default format when none is given on the command line.
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Json,
            pretty: true,
        }
    }
}

impl MprConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| MprError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| MprError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
