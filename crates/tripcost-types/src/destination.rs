//! Destination and travel class definitions.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::ConfigurationError;

/// Travel destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Destination {
    /// Dubai, UAE.
    #[default]
    Dubai,
    /// Abu Dhabi, UAE.
    #[serde(rename = "abudhabi")]
    AbuDhabi,
    /// Any destination outside the UAE.
    International,
}

impl Destination {
    /// Returns the destination identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Dubai => "dubai",
            Self::AbuDhabi => "abudhabi",
            Self::International => "international",
        }
    }

    /// Returns true if trips to this destination include a flight.
    ///
    /// Domestic UAE trips are priced without flights.
    #[must_use]
    pub const fn has_flights(&self) -> bool {
        matches!(self, Self::International)
    }

    /// Returns all destinations.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Dubai, Self::AbuDhabi, Self::International]
    }
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Destination {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dubai" | "dxb" => Ok(Self::Dubai),
            "abudhabi" | "abu-dhabi" | "abu_dhabi" | "auh" => Ok(Self::AbuDhabi),
            "international" | "intl" => Ok(Self::International),
            _ => Err(ConfigurationError::unknown(
                "destination",
                s,
                "dubai, abudhabi, international",
            )),
        }
    }
}

/// Hotel class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum HotelType {
    /// Hostels and budget hotels.
    #[serde(rename = "budget")]
    Budget,
    /// Three star hotels.
    #[serde(rename = "3star")]
    ThreeStar,
    /// Four star hotels.
    #[default]
    #[serde(rename = "4star")]
    FourStar,
    /// Five star hotels.
    #[serde(rename = "5star")]
    FiveStar,
    /// Luxury resorts.
    #[serde(rename = "luxury")]
    Luxury,
}

impl HotelType {
    /// Returns the hotel class identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Budget => "budget",
            Self::ThreeStar => "3star",
            Self::FourStar => "4star",
            Self::FiveStar => "5star",
            Self::Luxury => "luxury",
        }
    }

    /// Returns the daily expense tier implied by this hotel class.
    ///
    /// Budget hotels map to the budget tier, five star hotels to the luxury
    /// tier and every other class (luxury resorts included) to the mid tier.
    #[must_use]
    pub const fn implied_tier(&self) -> BudgetTier {
        match self {
            Self::Budget => BudgetTier::Budget,
            Self::FiveStar => BudgetTier::Luxury,
            Self::ThreeStar | Self::FourStar | Self::Luxury => BudgetTier::Mid,
        }
    }

    /// Returns all hotel classes.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Budget,
            Self::ThreeStar,
            Self::FourStar,
            Self::FiveStar,
            Self::Luxury,
        ]
    }
}

impl std::fmt::Display for HotelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HotelType {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "budget" => Ok(Self::Budget),
            "3star" | "3" | "three-star" => Ok(Self::ThreeStar),
            "4star" | "4" | "four-star" => Ok(Self::FourStar),
            "5star" | "5" | "five-star" => Ok(Self::FiveStar),
            "luxury" => Ok(Self::Luxury),
            _ => Err(ConfigurationError::unknown(
                "hotel type",
                s,
                "budget, 3star, 4star, 5star, luxury",
            )),
        }
    }
}

/// Flight cabin class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FlightClass {
    /// Economy cabin.
    #[default]
    Economy,
    /// Business cabin.
    Business,
    /// First class cabin.
    First,
}

impl FlightClass {
    /// Returns the cabin class identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Economy => "economy",
            Self::Business => "business",
            Self::First => "first",
        }
    }

    /// Returns all cabin classes.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Economy, Self::Business, Self::First]
    }
}

impl std::fmt::Display for FlightClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FlightClass {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "economy" | "eco" => Ok(Self::Economy),
            "business" | "biz" => Ok(Self::Business),
            "first" => Ok(Self::First),
            _ => Err(ConfigurationError::unknown(
                "flight class",
                s,
                "economy, business, first",
            )),
        }
    }
}

/// Flight haul length, only meaningful for international trips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FlightDistance {
    /// Short haul (1-3 hours).
    Short,
    /// Medium haul (4-7 hours).
    #[default]
    Medium,
    /// Long haul (8+ hours).
    Long,
}

impl FlightDistance {
    /// Returns the haul identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
        }
    }

    /// Returns all haul lengths.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Short, Self::Medium, Self::Long]
    }
}

impl std::fmt::Display for FlightDistance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FlightDistance {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "short" => Ok(Self::Short),
            "medium" => Ok(Self::Medium),
            "long" => Ok(Self::Long),
            _ => Err(ConfigurationError::unknown(
                "flight distance",
                s,
                "short, medium, long",
            )),
        }
    }
}

/// Spending tier used to select daily expense rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BudgetTier {
    /// Street food and public transport.
    Budget,
    /// Local restaurants and taxis.
    #[default]
    Mid,
    /// Fine dining and private transfers.
    Luxury,
}

impl BudgetTier {
    /// Returns the tier identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Budget => "budget",
            Self::Mid => "mid",
            Self::Luxury => "luxury",
        }
    }

    /// Returns all tiers.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Budget, Self::Mid, Self::Luxury]
    }
}

impl std::fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BudgetTier {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "budget" => Ok(Self::Budget),
            "mid" | "medium" => Ok(Self::Mid),
            "luxury" => Ok(Self::Luxury),
            _ => Err(ConfigurationError::unknown(
                "budget tier",
                s,
                "budget, mid, luxury",
            )),
        }
    }
}
