//! Destination metadata and seasons.

use serde::{Deserialize, Serialize};
use tripcost_types::{Currency, Month};

/// Pricing season of a month at a destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    /// High demand, prices above normal.
    Peak,
    /// Low demand, prices below normal.
    Off,
    /// Neither peak nor off season.
    Normal,
}

impl Season {
    /// Returns the season as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Peak => "peak",
            Self::Off => "off",
            Self::Normal => "normal",
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Price multipliers applied per season.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeasonMultipliers {
    /// Multiplier during peak season.
    pub peak: f64,
    /// Multiplier during off season.
    pub off: f64,
    /// Multiplier for every other month.
    pub normal: f64,
}

impl SeasonMultipliers {
    /// Returns the multiplier for a season.
    #[must_use]
    pub const fn for_season(&self, season: Season) -> f64 {
        match season {
            Season::Peak => self.peak,
            Season::Off => self.off,
            Season::Normal => self.normal,
        }
    }

    /// Returns true if every multiplier is finite and strictly positive.
    #[must_use]
    pub fn are_positive(&self) -> bool {
        [self.peak, self.off, self.normal]
            .iter()
            .all(|m| m.is_finite() && *m > 0.0)
    }
}

/// Display and seasonal data for one destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DestinationInfo {
    /// Display name (e.g. "Abu Dhabi").
    pub name: String,
    /// Country or region.
    pub country: String,
    /// Currency the rates are quoted in.
    pub currency: Currency,
    /// Months priced at the peak multiplier.
    pub peak_season: Vec<Month>,
    /// Months priced at the off-season multiplier.
    pub off_season: Vec<Month>,
    /// Seasonal multipliers.
    pub multipliers: SeasonMultipliers,
}

impl DestinationInfo {
    /// Classifies a month. Peak membership wins if a month is listed twice.
    #[must_use]
    pub fn season_of(&self, month: Month) -> Season {
        if self.peak_season.contains(&month) {
            Season::Peak
        } else if self.off_season.contains(&month) {
            Season::Off
        } else {
            Season::Normal
        }
    }

    /// Returns the price multiplier for a month.
    #[must_use]
    pub fn multiplier_for(&self, month: Month) -> f64 {
        self.multipliers.for_season(self.season_of(month))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dubai() -> DestinationInfo {
        DestinationInfo {
            name: "Dubai".to_string(),
            country: "UAE".to_string(),
            currency: Currency::Aed,
            peak_season: vec![Month::Nov, Month::Dec, Month::Jan, Month::Feb, Month::Mar],
            off_season: vec![Month::Jun, Month::Jul, Month::Aug],
            multipliers: SeasonMultipliers {
                peak: 1.4,
                off: 0.8,
                normal: 1.0,
            },
        }
    }

    #[test]
    fn test_season_of() {
        let info = dubai();
        assert_eq!(info.season_of(Month::Dec), Season::Peak);
        assert_eq!(info.season_of(Month::Jul), Season::Off);
        assert_eq!(info.season_of(Month::Apr), Season::Normal);
    }

    #[test]
    fn test_multiplier_for() {
        let info = dubai();
        assert_eq!(info.multiplier_for(Month::Jan), 1.4);
        assert_eq!(info.multiplier_for(Month::Jun), 0.8);
        assert_eq!(info.multiplier_for(Month::Oct), 1.0);
    }

    #[test]
    fn test_peak_wins_over_off() {
        let mut info = dubai();
        info.off_season.push(Month::Dec);
        assert_eq!(info.season_of(Month::Dec), Season::Peak);
    }

    #[test]
    fn test_multipliers_positive() {
        assert!(dubai().multipliers.are_positive());
        let bad = SeasonMultipliers {
            peak: 1.2,
            off: 0.0,
            normal: 1.0,
        };
        assert!(!bad.are_positive());
    }
}
