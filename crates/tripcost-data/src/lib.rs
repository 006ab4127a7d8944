//! Static cost reference tables for the tripcost travel budget estimator.
//!
//! This crate provides the reference data the estimator prices trips from:
//!
//! - [`CostDatabase`] - Hotel, flight, daily expense and activity tables
//! - [`DestinationInfo`] - Display data and seasonal multipliers per destination
//! - [`PriceBand`] - Min/max/average price of a table entry
//! - [`Activity`] - Entry of a destination's activity catalog
//!
//! # Example
//!
//! ```
//! use tripcost_data::CostDatabase;
//! use tripcost_types::{Destination, HotelType};
//!
//! let db = CostDatabase::global();
//! let band = db.hotel_rate(HotelType::FourStar, Destination::Dubai).unwrap();
//! assert_eq!(band.avg, 800.0);
//! ```

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod band;
mod catalog;
mod database;
mod destination;

pub use band::PriceBand;
pub use catalog::{Activity, average_cost, most_expensive};
pub use database::{CostDatabase, DatabaseError};
pub use destination::{DestinationInfo, Season, SeasonMultipliers};
