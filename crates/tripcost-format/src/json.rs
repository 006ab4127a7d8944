//! JSON output format.

use serde::Serialize;
use std::io::Write;
use tripcost_estimate::{ComparisonResult, EstimationResult};

use crate::{FormatError, Formatter};

/// JSON formatter.
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    /// Whether to pretty-print.
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a compact JSON formatter.
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: false }
    }

    /// Sets whether to pretty-print output.
    #[must_use]
    pub const fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn write_value<T: Serialize, W: Write>(&self, value: &T, mut writer: W) -> Result<(), FormatError> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut writer, value)?;
        } else {
            serde_json::to_writer(&mut writer, value)?;
        }
        writeln!(writer)?;
        Ok(())
    }
}

impl Formatter for JsonFormatter {
    fn write_estimate<W: Write>(
        &self,
        estimate: &EstimationResult,
        writer: W,
    ) -> Result<(), FormatError> {
        self.write_value(estimate, writer)
    }

    fn write_comparison<W: Write>(
        &self,
        comparison: &ComparisonResult,
        writer: W,
    ) -> Result<(), FormatError> {
        self.write_value(comparison, writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tripcost_estimate::Estimator;
    use tripcost_types::{Destination, Month, TripConfiguration};

    fn estimate() -> EstimationResult {
        let config = TripConfiguration::new(Destination::Dubai).with_month(Month::Jun);
        Estimator::global().estimate(&config).unwrap()
    }

    #[test]
    fn test_json_estimate() {
        let mut output = Cursor::new(Vec::new());
        JsonFormatter::new()
            .write_estimate(&estimate(), &mut output)
            .unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert_eq!(result.lines().count(), 1);

        let value: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert_eq!(value["total"], 12180);
        assert_eq!(value["resolved_month"], "jun");
        assert_eq!(value["breakdown"]["hotel"], 6400);
    }

    #[test]
    fn test_json_pretty_parses_back() {
        let mut output = Cursor::new(Vec::new());
        JsonFormatter::new()
            .with_pretty(true)
            .write_estimate(&estimate(), &mut output)
            .unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(result.lines().count() > 1);
        let parsed: EstimationResult = serde_json::from_str(&result).unwrap();
        assert_eq!(parsed, estimate());
    }

    #[test]
    fn test_json_comparison() {
        let comparison = Estimator::global()
            .compare(
                Destination::Dubai,
                Destination::AbuDhabi,
                &TripConfiguration::default(),
            )
            .unwrap();
        let mut output = Cursor::new(Vec::new());
        JsonFormatter::new()
            .write_comparison(&comparison, &mut output)
            .unwrap();

        let value: serde_json::Value =
            serde_json::from_slice(&output.into_inner()).unwrap();
        assert_eq!(value["cheaper"], "abudhabi");
        assert_eq!(value["savings"], comparison.savings);
    }
}
