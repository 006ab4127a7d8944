//! Output format abstraction.

use serde::{Deserialize, Serialize};
use std::io::Write;
use thiserror::Error;
use tripcost_estimate::{ComparisonResult, EstimationResult};

/// Output format identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human readable report.
    #[default]
    Text,
    /// JSON document.
    Json,
    /// Comma separated rows.
    Csv,
}

impl OutputFormat {
    /// Returns the format name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }

    /// Returns all available formats.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Text, Self::Json, Self::Csv]
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => Err(FormatError::UnknownFormat(s.to_string())),
        }
    }
}

/// Errors that can occur during formatting.
#[derive(Error, Debug)]
pub enum FormatError {
    /// Unknown output format.
    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Trait for output formatters.
pub trait Formatter: Send + Sync {
    /// Writes a single estimate.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_estimate<W: Write>(
        &self,
        estimate: &EstimationResult,
        writer: W,
    ) -> Result<(), FormatError>;

    /// Writes a comparison of two destinations.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_comparison<W: Write>(
        &self,
        comparison: &ComparisonResult,
        writer: W,
    ) -> Result<(), FormatError>;
}
