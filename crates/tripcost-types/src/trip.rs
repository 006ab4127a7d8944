//! Trip configuration supplied by the caller.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use crate::{BudgetTier, ConfigurationError, Destination, FlightClass, FlightDistance, HotelType, Month};

/// Accepted trip length in days.
pub const DAYS_RANGE: RangeInclusive<u32> = 1..=30;

/// Accepted party size.
pub const TRAVELERS_RANGE: RangeInclusive<u32> = 1..=20;

/// Accepted number of paid activities per day.
pub const ACTIVITIES_RANGE: RangeInclusive<u32> = 0..=10;

/// Everything the estimator needs to price a trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TripConfiguration {
    /// Where the trip goes.
    pub destination: Destination,
    /// Trip length in days.
    pub days: u32,
    /// Number of travelers sharing the trip.
    pub travelers: u32,
    /// Hotel class.
    pub hotel_type: HotelType,
    /// Flight cabin class.
    pub flight_class: FlightClass,
    /// Flight haul length (international trips only).
    pub flight_distance: FlightDistance,
    /// Paid activities per day, priced at the catalog average.
    pub activities_per_day: u32,
    /// Month of travel.
    pub month: Month,
    /// Whether travel insurance was requested.
    pub include_insurance: bool,
    /// Whether visa fees were requested.
    pub include_visa: bool,
    /// Requested daily spending tier.
    ///
    /// The estimator derives the tier from the hotel class unless it runs in
    /// strict mode.
    pub budget_tier: BudgetTier,
}

impl TripConfiguration {
    /// Creates a configuration for the destination with default settings.
    #[must_use]
    pub fn new(destination: Destination) -> Self {
        Self {
            destination,
            ..Self::default()
        }
    }

    /// Sets the trip length in days.
    #[must_use]
    pub const fn with_days(mut self, days: u32) -> Self {
        self.days = days;
        self
    }

    /// Sets the number of travelers.
    #[must_use]
    pub const fn with_travelers(mut self, travelers: u32) -> Self {
        self.travelers = travelers;
        self
    }

    /// Sets the hotel class.
    #[must_use]
    pub const fn with_hotel(mut self, hotel_type: HotelType) -> Self {
        self.hotel_type = hotel_type;
        self
    }

    /// Sets the flight class and haul length.
    #[must_use]
    pub const fn with_flight(mut self, class: FlightClass, distance: FlightDistance) -> Self {
        self.flight_class = class;
        self.flight_distance = distance;
        self
    }

    /// Sets the number of activities per day.
    #[must_use]
    pub const fn with_activities(mut self, activities_per_day: u32) -> Self {
        self.activities_per_day = activities_per_day;
        self
    }

    /// Sets the month of travel.
    #[must_use]
    pub const fn with_month(mut self, month: Month) -> Self {
        self.month = month;
        self
    }

    /// Sets the optional insurance and visa extras.
    #[must_use]
    pub const fn with_extras(mut self, insurance: bool, visa: bool) -> Self {
        self.include_insurance = insurance;
        self.include_visa = visa;
        self
    }

    /// Sets the requested daily spending tier.
    #[must_use]
    pub const fn with_budget_tier(mut self, tier: BudgetTier) -> Self {
        self.budget_tier = tier;
        self
    }

    /// Returns a copy of this configuration for another destination.
    #[must_use]
    pub const fn for_destination(mut self, destination: Destination) -> Self {
        self.destination = destination;
        self
    }

    /// Checks that every numeric field lies in its accepted domain.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::OutOfRange`] for the first field that
    /// is out of range.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        check_range("days", self.days, &DAYS_RANGE)?;
        check_range("travelers", self.travelers, &TRAVELERS_RANGE)?;
        check_range(
            "activities per day",
            self.activities_per_day,
            &ACTIVITIES_RANGE,
        )
    }
}

impl Default for TripConfiguration {
    fn default() -> Self {
        Self {
            destination: Destination::Dubai,
            days: 5,
            travelers: 2,
            hotel_type: HotelType::FourStar,
            flight_class: FlightClass::Economy,
            flight_distance: FlightDistance::Medium,
            activities_per_day: 3,
            month: Month::Jan,
            include_insurance: false,
            include_visa: false,
            budget_tier: BudgetTier::Mid,
        }
    }
}

impl std::fmt::Display for TripConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} in {}: {} days, {} travelers, {} hotel",
            self.destination,
            self.month.name(),
            self.days,
            self.travelers,
            self.hotel_type
        )?;
        if self.destination.has_flights() {
            write!(f, ", {} {} flight", self.flight_distance, self.flight_class)?;
        }
        Ok(())
    }
}

fn check_range(
    field: &'static str,
    value: u32,
    range: &RangeInclusive<u32>,
) -> Result<(), ConfigurationError> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(ConfigurationError::OutOfRange {
            field,
            value,
            min: *range.start(),
            max: *range.end(),
        })
    }
}
