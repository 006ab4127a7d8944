//! Human readable report format.

use std::io::Write;
use tripcost_currency::{ExchangeRates, format_amount};
use tripcost_estimate::{ComparisonResult, EstimationResult};
use tripcost_types::Currency;

use crate::{FormatError, Formatter};

/// Labels for the breakdown lines, matching [`CostBreakdown::lines`].
///
/// [`CostBreakdown::lines`]: tripcost_estimate::CostBreakdown::lines
const LABELS: [&str; 7] = [
    "Hotel",
    "Flights",
    "Daily expenses",
    "Activities",
    "Travel insurance",
    "Visa fees",
    "Tax (5%)",
];

/// Text report formatter.
///
/// Amounts are converted from AED to the display currency before rendering.
#[derive(Debug, Clone, Copy)]
pub struct TextFormatter {
    currency: Currency,
}

impl TextFormatter {
    /// Creates a formatter that renders amounts in AED.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            currency: Currency::Aed,
        }
    }

    /// Sets the display currency.
    #[must_use]
    pub const fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    fn amount(&self, aed: u64) -> String {
        let converted =
            ExchangeRates::global().convert(aed as f64, Currency::Aed, self.currency);
        format_amount(converted, self.currency)
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for TextFormatter {
    fn write_estimate<W: Write>(
        &self,
        estimate: &EstimationResult,
        mut writer: W,
    ) -> Result<(), FormatError> {
        writeln!(
            writer,
            "{} in {} ({} season, x{:.2})",
            estimate.destination_name,
            estimate.resolved_month.name(),
            estimate.season,
            estimate.seasonal_multiplier
        )?;
        writeln!(writer)?;
        writeln!(writer, "  {:<18}{:>14}", "Total", self.amount(estimate.total))?;
        writeln!(
            writer,
            "  {:<18}{:>14}",
            "Per person",
            self.amount(estimate.per_person)
        )?;
        writeln!(
            writer,
            "  {:<18}{:>14}",
            "Daily budget",
            self.amount(estimate.daily_budget)
        )?;
        writeln!(writer)?;

        writeln!(writer, "Breakdown")?;
        for (label, (category, amount)) in LABELS.iter().zip(estimate.breakdown.lines()) {
            // Extras only show up when they were charged
            if amount == 0 && matches!(category, "insurance" | "visa") {
                continue;
            }
            writeln!(writer, "  {label:<18}{:>14}", self.amount(amount))?;
        }

        writeln!(writer)?;
        for rec in &estimate.recommendations {
            writeln!(writer, "{} {} ({})", rec.icon, rec.message, rec.tier)?;
        }
        for warning in &estimate.warnings {
            writeln!(writer, "[{}] {}", warning.severity, warning.message)?;
        }
        writeln!(writer, "Confidence: {}%", estimate.confidence_score)?;

        Ok(())
    }

    fn write_comparison<W: Write>(
        &self,
        comparison: &ComparisonResult,
        mut writer: W,
    ) -> Result<(), FormatError> {
        writeln!(
            writer,
            "  {:<16}{:>14}{:>14}{:>14}",
            "Destination", "Total", "Per person", "Per day"
        )?;
        for estimate in [&comparison.first, &comparison.second] {
            writeln!(
                writer,
                "  {:<16}{:>14}{:>14}{:>14}",
                estimate.destination_name,
                self.amount(estimate.total),
                self.amount(estimate.per_person),
                self.amount(estimate.daily_budget)
            )?;
        }
        writeln!(writer)?;

        let cheapest = comparison.cheapest();
        if comparison.savings == 0 {
            writeln!(writer, "Both destinations cost the same.")?;
        } else {
            writeln!(
                writer,
                "{} is cheaper by {}",
                cheapest.destination_name,
                self.amount(comparison.savings)
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tripcost_estimate::{Estimator, EstimatorOptions};
    use tripcost_types::{Destination, Month, TripConfiguration};

    fn dubai_june() -> TripConfiguration {
        TripConfiguration::new(Destination::Dubai).with_month(Month::Jun)
    }

    fn render(formatter: &TextFormatter, estimate: &EstimationResult) -> String {
        let mut output = Cursor::new(Vec::new());
        formatter.write_estimate(estimate, &mut output).unwrap();
        String::from_utf8(output.into_inner()).unwrap()
    }

    #[test]
    fn test_text_estimate_in_aed() {
        let estimate = Estimator::global().estimate(&dubai_june()).unwrap();
        let report = render(&TextFormatter::new(), &estimate);

        assert!(report.starts_with("Dubai in June (off season, x0.80)"));
        assert!(report.contains("AED 12,180"));
        assert!(report.contains("AED 6,400"));
        assert!(report.contains("Luxury resorts"));
        assert!(report.contains("Confidence: 100%"));
        assert!(!report.contains("Visa fees"));
    }

    #[test]
    fn test_text_estimate_in_usd() {
        let estimate = Estimator::global().estimate(&dubai_june()).unwrap();
        let report = render(&TextFormatter::new().with_currency(Currency::Usd), &estimate);

        // 12180 * 0.27
        assert!(report.contains("$3,289"));
        assert!(!report.contains("AED"));
    }

    #[test]
    fn test_text_shows_charged_extras() {
        let estimator = Estimator::with_options(EstimatorOptions {
            apply_extras: true,
            ..EstimatorOptions::default()
        });
        let estimate = estimator
            .estimate(&dubai_june().with_extras(false, true))
            .unwrap();
        let report = render(&TextFormatter::new(), &estimate);

        assert!(report.contains("Visa fees"));
        assert!(!report.contains("Travel insurance"));
    }

    #[test]
    fn test_text_comparison() {
        let comparison = Estimator::global()
            .compare(Destination::Dubai, Destination::AbuDhabi, &dubai_june())
            .unwrap();
        let mut output = Cursor::new(Vec::new());
        TextFormatter::new()
            .write_comparison(&comparison, &mut output)
            .unwrap();

        let report = String::from_utf8(output.into_inner()).unwrap();
        assert!(report.contains("Abu Dhabi is cheaper by AED"));
        assert!(report.contains("Dubai"));
    }
}
