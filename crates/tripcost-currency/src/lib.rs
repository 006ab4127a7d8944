//! Display currency conversion for the tripcost travel budget estimator.
//!
//! - [`ExchangeRates`] - Fixed rates relative to AED
//! - [`format_amount`] - Whole-unit rendering with symbol and separators
//!
//! # Example
//!
//! ```
//! use tripcost_currency::{ExchangeRates, format_amount};
//! use tripcost_types::Currency;
//!
//! let usd = ExchangeRates::global().convert(1000.0, Currency::Aed, Currency::Usd);
//! assert_eq!(format_amount(usd, Currency::Usd), "$270");
//! ```

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod amount;
mod rates;

pub use amount::format_amount;
pub use rates::{CurrencyError, ExchangeRates};
