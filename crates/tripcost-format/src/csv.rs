//! CSV output format.

use std::io::Write;
use tripcost_estimate::{ComparisonResult, EstimationResult};

use crate::{FormatError, Formatter};

/// CSV formatter.
///
/// Amounts are written in AED as whole units.
#[derive(Debug, Clone)]
pub struct CsvFormatter {
    /// Field delimiter (default: comma).
    delimiter: char,
    /// Whether to include header row.
    include_header: bool,
}

impl CsvFormatter {
    /// Creates a new CSV formatter with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delimiter: ',',
            include_header: true,
        }
    }

    /// Sets the field delimiter.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether to include a header row.
    #[must_use]
    pub const fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for CsvFormatter {
    fn write_estimate<W: Write>(
        &self,
        estimate: &EstimationResult,
        mut writer: W,
    ) -> Result<(), FormatError> {
        let d = self.delimiter;

        if self.include_header {
            writeln!(writer, "category{d}amount")?;
        }

        for (category, amount) in estimate.breakdown.lines() {
            writeln!(writer, "{category}{d}{amount}")?;
        }
        writeln!(writer, "total{d}{}", estimate.total)?;

        Ok(())
    }

    fn write_comparison<W: Write>(
        &self,
        comparison: &ComparisonResult,
        mut writer: W,
    ) -> Result<(), FormatError> {
        let d = self.delimiter;

        if self.include_header {
            writeln!(writer, "destination{d}total{d}per_person{d}daily_budget")?;
        }

        for estimate in [&comparison.first, &comparison.second] {
            writeln!(
                writer,
                "{}{d}{}{d}{}{d}{}",
                estimate.destination,
                estimate.total,
                estimate.per_person,
                estimate.daily_budget
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tripcost_estimate::Estimator;
    use tripcost_types::{Destination, Month, TripConfiguration};

    fn dubai_june() -> TripConfiguration {
        TripConfiguration::new(Destination::Dubai).with_month(Month::Jun)
    }

    #[test]
    fn test_csv_estimate() {
        let estimate = Estimator::global().estimate(&dubai_june()).unwrap();
        let mut output = Cursor::new(Vec::new());

        CsvFormatter::new()
            .write_estimate(&estimate, &mut output)
            .unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        let lines: Vec<_> = result.lines().collect();
        assert_eq!(lines[0], "category,amount");
        assert_eq!(lines[1], "hotel,6400");
        assert_eq!(lines[7], "tax,580");
        assert_eq!(lines[8], "total,12180");
    }

    #[test]
    fn test_csv_comparison_without_header() {
        let comparison = Estimator::global()
            .compare(Destination::Dubai, Destination::International, &dubai_june())
            .unwrap();
        let mut output = Cursor::new(Vec::new());

        CsvFormatter::new()
            .with_header(false)
            .with_delimiter(';')
            .write_comparison(&comparison, &mut output)
            .unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        let lines: Vec<_> = result.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "dubai;12180;6090;1218");
        assert!(lines[1].starts_with("international;"));
    }
}
