//! Travel budget estimation for Dubai, Abu Dhabi and international trips.
//!
//! This is a facade crate that re-exports functionality from the tripcost
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```
//! use tripcost_lib::prelude::*;
//!
//! let config = TripConfiguration::new(Destination::International)
//!     .with_days(7)
//!     .with_travelers(1)
//!     .with_hotel(HotelType::FiveStar)
//!     .with_flight(FlightClass::Business, FlightDistance::Long)
//!     .with_activities(0)
//!     .with_month(Month::Jul);
//!
//! let estimate = Estimator::global().estimate(&config)?;
//! assert_eq!(estimate.total, 49350);
//! # Ok::<(), ConfigurationError>(())
//! ```

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use tripcost_types::*;

// Re-export reference data
pub use tripcost_data::{
    Activity, CostDatabase, DatabaseError, DestinationInfo, PriceBand, Season, SeasonMultipliers,
};

// Re-export the estimation engine
pub use tripcost_estimate::{
    ComparisonResult, CostBreakdown, EstimationResult, Estimator, EstimatorOptions,
    Recommendation, RecommendationTier, Severity, Warning,
};

// Re-export currency conversion
#[cfg(feature = "currency")]
pub use tripcost_currency::{CurrencyError, ExchangeRates, format_amount};

// Re-export formatters
#[cfg(feature = "format")]
pub use tripcost_format::{
    CsvFormatter, FormatError, Formatter, JsonFormatter, OutputFormat, TextFormatter,
};

// Re-export session persistence
#[cfg(feature = "session")]
pub use tripcost_session::{
    RecentSearch, SavedTrip, Session, SessionError, SessionSnapshot, SessionStore, TripId,
};

/// Prelude module for convenient imports.
///
/// ```
/// use tripcost_lib::prelude::*;
/// ```
pub mod prelude {
    pub use tripcost_types::{
        BudgetTier, ConfigurationError, Currency, Destination, FlightClass, FlightDistance,
        HotelType, Month, TripConfiguration,
    };

    pub use tripcost_data::CostDatabase;

    pub use tripcost_estimate::{ComparisonResult, EstimationResult, Estimator, EstimatorOptions};

    #[cfg(feature = "currency")]
    pub use tripcost_currency::{ExchangeRates, format_amount};

    #[cfg(feature = "format")]
    pub use tripcost_format::{CsvFormatter, Formatter, JsonFormatter, OutputFormat, TextFormatter};

    #[cfg(feature = "session")]
    pub use tripcost_session::{Session, SessionStore};
}
