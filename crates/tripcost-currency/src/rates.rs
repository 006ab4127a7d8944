//! Exchange rate table.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Deserialize;
use thiserror::Error;
use tripcost_types::{ConfigurationError, Currency};

/// Embedded JSON data with the default rates.
const EXCHANGE_RATES_JSON: &str = include_str!("../data/exchange_rates.json");

/// Static default rate table.
static RATES: OnceLock<ExchangeRates> = OnceLock::new();

/// Errors raised while building a rate table.
#[derive(Error, Debug)]
pub enum CurrencyError {
    /// The document is not valid JSON or has the wrong shape.
    #[error("Invalid exchange rate JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A currency code is not supported.
    #[error(transparent)]
    UnknownCode(#[from] ConfigurationError),

    /// The table has no rate for a supported currency.
    #[error("No exchange rate for {0}")]
    MissingRate(Currency),

    /// A rate is zero, negative or not finite.
    #[error("Invalid exchange rate for {currency}: {rate}")]
    InvalidRate {
        /// The currency.
        currency: Currency,
        /// The rejected rate.
        rate: f64,
    },
}

#[derive(Debug, Deserialize)]
struct RawExchangeRates {
    base: String,
    rates: HashMap<String, f64>,
}

/// Units of each currency per one AED.
///
/// Every [`Currency`] has a positive rate and the AED rate is 1, so
/// conversions never fail once the table is built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExchangeRates {
    rates: [f64; Currency::all().len()],
}

impl ExchangeRates {
    /// Returns the default rate table.
    #[must_use]
    pub fn global() -> &'static Self {
        RATES.get_or_init(|| {
            Self::from_json(EXCHANGE_RATES_JSON)
                .expect("embedded exchange_rates.json should be valid")
        })
    }

    /// Builds a table from rates relative to AED.
    ///
    /// # Errors
    ///
    /// Returns an error if a currency has no rate, a rate is not a positive
    /// finite number, or the AED rate is not 1.
    pub fn new(rates: &HashMap<Currency, f64>) -> Result<Self, CurrencyError> {
        let mut table = [0.0; Currency::all().len()];
        for &currency in Currency::all() {
            let rate = *rates
                .get(&currency)
                .ok_or(CurrencyError::MissingRate(currency))?;
            if !rate.is_finite() || rate <= 0.0 {
                return Err(CurrencyError::InvalidRate { currency, rate });
            }
            table[currency as usize] = rate;
        }

        let reference = table[Currency::Aed as usize];
        if (reference - 1.0).abs() > f64::EPSILON {
            return Err(CurrencyError::InvalidRate {
                currency: Currency::Aed,
                rate: reference,
            });
        }

        Ok(Self { rates: table })
    }

    /// Builds a table from a JSON document of the form
    /// `{"base": "AED", "rates": {"USD": 0.27, ...}}`.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid, the base is not AED, a code
    /// is unknown, or [`ExchangeRates::new`] rejects the rates.
    pub fn from_json(json: &str) -> Result<Self, CurrencyError> {
        let raw: RawExchangeRates = serde_json::from_str(json)?;

        let base: Currency = raw.base.parse()?;
        if base != Currency::Aed {
            return Err(CurrencyError::InvalidRate {
                currency: base,
                rate: 1.0,
            });
        }

        let rates = raw
            .rates
            .iter()
            .map(|(code, &rate)| Ok((code.parse::<Currency>()?, rate)))
            .collect::<Result<HashMap<_, _>, CurrencyError>>()?;

        Self::new(&rates)
    }

    /// Returns the units of `currency` per one AED.
    #[must_use]
    pub const fn rate(&self, currency: Currency) -> f64 {
        self.rates[currency as usize]
    }

    /// Converts an amount between currencies through AED.
    ///
    /// Converting to the same currency returns the amount unchanged.
    #[must_use]
    pub fn convert(&self, amount: f64, from: Currency, to: Currency) -> f64 {
        if from == to {
            return amount;
        }
        let in_aed = if from == Currency::Aed {
            amount
        } else {
            amount / self.rate(from)
        };
        in_aed * self.rate(to)
    }

    /// Returns every currency with its rate.
    pub fn iter(&self) -> impl Iterator<Item = (Currency, f64)> + '_ {
        Currency::all().iter().map(|&c| (c, self.rate(c)))
    }
}

impl Default for ExchangeRates {
    fn default() -> Self {
        *Self::global()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_rates() {
        let rates = ExchangeRates::global();
        assert_eq!(rates.rate(Currency::Aed), 1.0);
        assert_eq!(rates.rate(Currency::Usd), 0.27);
        assert_eq!(rates.rate(Currency::Eur), 0.25);
        assert_eq!(rates.rate(Currency::Gbp), 0.21);
        assert_eq!(rates.rate(Currency::Inr), 22.5);
        assert_eq!(rates.iter().count(), 5);
    }

    #[test]
    fn test_convert_from_aed() {
        let rates = ExchangeRates::global();
        assert_relative_eq!(rates.convert(1000.0, Currency::Aed, Currency::Usd), 270.0);
        assert_relative_eq!(rates.convert(100.0, Currency::Aed, Currency::Inr), 2250.0);
    }

    #[test]
    fn test_convert_between_foreign_currencies() {
        let rates = ExchangeRates::global();
        // 27 USD = 100 AED = 25 EUR
        assert_relative_eq!(
            rates.convert(27.0, Currency::Usd, Currency::Eur),
            25.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_same_currency_is_identity() {
        let rates = ExchangeRates::global();
        for &currency in Currency::all() {
            assert_eq!(rates.convert(123.45, currency, currency), 123.45);
        }
    }

    #[test]
    fn test_round_trip() {
        let rates = ExchangeRates::global();
        for &a in Currency::all() {
            for &b in Currency::all() {
                let there = rates.convert(12_180.0, a, b);
                assert_relative_eq!(
                    rates.convert(there, b, a),
                    12_180.0,
                    max_relative = 1e-9
                );
            }
        }
    }

    #[test]
    fn test_missing_rate() {
        let rates = HashMap::from([(Currency::Aed, 1.0), (Currency::Usd, 0.27)]);
        assert!(matches!(
            ExchangeRates::new(&rates),
            Err(CurrencyError::MissingRate(Currency::Eur))
        ));
    }

    #[test]
    fn test_non_positive_rate() {
        let mut rates: HashMap<_, _> = ExchangeRates::global().iter().collect();
        rates.insert(Currency::Gbp, 0.0);
        assert!(matches!(
            ExchangeRates::new(&rates),
            Err(CurrencyError::InvalidRate {
                currency: Currency::Gbp,
                ..
            })
        ));
    }

    #[test]
    fn test_custom_table() {
        let json = r#"{"base":"AED","rates":{"AED":1,"USD":0.3,"EUR":0.25,"GBP":0.2,"inr":22}}"#;
        let rates = ExchangeRates::from_json(json).unwrap();
        assert_eq!(rates.rate(Currency::Usd), 0.3);
        assert_eq!(rates.rate(Currency::Inr), 22.0);
    }

    #[test]
    fn test_unknown_code() {
        let json = r#"{"base":"AED","rates":{"AED":1,"JPY":40}}"#;
        assert!(matches!(
            ExchangeRates::from_json(json),
            Err(CurrencyError::UnknownCode(_))
        ));
    }
}
