//! Confidence scoring.

/// Weight awarded when the hotel rate resolved.
const HOTEL_WEIGHT: u8 = 30;

/// Weight awarded when the daily expense rate resolved.
const DAILY_WEIGHT: u8 = 30;

/// Weight awarded when the activity catalog is non-empty.
const ACTIVITY_WEIGHT: u8 = 20;

/// Weight awarded when the seasonal multiplier is positive.
const SEASON_WEIGHT: u8 = 20;

/// Which inputs of an estimate were backed by reference data.
///
/// With the bundled database every valid configuration is fully covered, so
/// the score is 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DataCoverage {
    /// A hotel rate was found.
    pub hotel_rate: bool,
    /// A daily expense rate was found.
    pub daily_rate: bool,
    /// The activity catalog has at least one entry.
    pub activity_catalog: bool,
    /// The seasonal multiplier is positive.
    pub seasonal_multiplier: bool,
}

impl DataCoverage {
    /// Returns the weighted score, capped at 100.
    #[must_use]
    pub fn score(&self) -> u8 {
        let weights = [
            (self.hotel_rate, HOTEL_WEIGHT),
            (self.daily_rate, DAILY_WEIGHT),
            (self.activity_catalog, ACTIVITY_WEIGHT),
            (self.seasonal_multiplier, SEASON_WEIGHT),
        ];
        let sum: u8 = weights
            .iter()
            .filter(|(covered, _)| *covered)
            .map(|(_, weight)| weight)
            .sum();
        sum.min(100)
    }
}
