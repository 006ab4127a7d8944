//! Price bands.

use serde::{Deserialize, Serialize};

/// Observed price range for one table entry.
///
/// Only [`PriceBand::avg`] feeds the estimator; `min` and `max` are kept for
/// display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBand {
    /// Lowest observed price.
    pub min: f64,
    /// Highest observed price.
    pub max: f64,
    /// Average price.
    pub avg: f64,
}

impl PriceBand {
    /// A band with every bound at zero, used for trips that need no flight.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Creates a new price band.
    #[must_use]
    pub const fn new(min: f64, max: f64, avg: f64) -> Self {
        Self { min, max, avg }
    }

    /// Returns true if `min <= avg <= max` and no bound is negative.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.min >= 0.0 && self.min <= self.avg && self.avg <= self.max
    }
}

impl std::fmt::Display for PriceBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0}-{:.0} (avg {:.0})", self.min, self.max, self.avg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_consistency() {
        assert!(PriceBand::new(200.0, 350.0, 275.0).is_consistent());
        assert!(PriceBand::ZERO.is_consistent());
        assert!(!PriceBand::new(300.0, 200.0, 250.0).is_consistent());
        assert!(!PriceBand::new(-1.0, 10.0, 5.0).is_consistent());
    }

    #[test]
    fn test_band_display() {
        assert_eq!(
            PriceBand::new(200.0, 350.0, 275.0).to_string(),
            "200-350 (avg 275)"
        );
    }
}
