//! Display utilities and output formatting for the tripcost CLI.

use anyhow::Result;
use std::io::{self, BufWriter, Write};
use tripcost_lib::prelude::*;
use tripcost_lib::{PriceBand, Session};

/// Resolved output options for one invocation.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Output {
    pub(crate) format: OutputFormat,
    pub(crate) currency: Currency,
}

impl Output {
    /// Writes an estimate to stdout.
    pub(crate) fn estimate(&self, estimate: &EstimationResult) -> Result<()> {
        let mut writer = BufWriter::new(io::stdout().lock());
        match self.format {
            OutputFormat::Text => TextFormatter::new()
                .with_currency(self.currency)
                .write_estimate(estimate, &mut writer)?,
            OutputFormat::Json => JsonFormatter::new()
                .with_pretty(true)
                .write_estimate(estimate, &mut writer)?,
            OutputFormat::Csv => CsvFormatter::new().write_estimate(estimate, &mut writer)?,
        }
        writer.flush()?;
        Ok(())
    }

    /// Writes a comparison to stdout.
    pub(crate) fn comparison(&self, comparison: &ComparisonResult) -> Result<()> {
        let mut writer = BufWriter::new(io::stdout().lock());
        match self.format {
            OutputFormat::Text => TextFormatter::new()
                .with_currency(self.currency)
                .write_comparison(comparison, &mut writer)?,
            OutputFormat::Json => JsonFormatter::new()
                .with_pretty(true)
                .write_comparison(comparison, &mut writer)?,
            OutputFormat::Csv => CsvFormatter::new().write_comparison(comparison, &mut writer)?,
        }
        writer.flush()?;
        Ok(())
    }

    /// Renders an AED amount in the display currency.
    pub(crate) fn amount(&self, aed: f64) -> String {
        amount(aed, self.currency)
    }

    /// Renders a price band in the display currency.
    pub(crate) fn band(&self, band: &PriceBand) -> String {
        format!(
            "{} - {} (avg {})",
            self.amount(band.min),
            self.amount(band.max),
            self.amount(band.avg)
        )
    }
}

/// Renders an AED amount in `currency`.
pub(crate) fn amount(aed: f64, currency: Currency) -> String {
    let converted = ExchangeRates::global().convert(aed, Currency::Aed, currency);
    format_amount(converted, currency)
}

/// Picks the display currency: the flag, then the config file, then the
/// session.
pub(crate) fn resolve_currency(
    flag: Option<Currency>,
    configured: Option<Currency>,
    session: &Session,
) -> Currency {
    flag.or(configured).unwrap_or_else(|| session.currency())
}
