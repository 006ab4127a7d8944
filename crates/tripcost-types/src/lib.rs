//! Core types for the tripcost travel budget estimator.
//!
//! This crate provides the fundamental data structures used throughout tripcost:
//!
//! - [`TripConfiguration`] - The trip a caller wants priced
//! - [`Destination`], [`HotelType`], [`FlightClass`], [`FlightDistance`], [`BudgetTier`] - Lookup keys into the cost tables
//! - [`Month`] - Month of travel used for seasonal pricing
//! - [`Currency`] - Display currencies
//! - [`ConfigurationError`] - The estimator's input contract violations

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod currency;
mod destination;
mod error;
mod month;
mod trip;

pub use currency::Currency;
pub use destination::{BudgetTier, Destination, FlightClass, FlightDistance, HotelType};
pub use error::ConfigurationError;
pub use month::Month;
pub use trip::{ACTIVITIES_RANGE, DAYS_RANGE, TRAVELERS_RANGE, TripConfiguration};
