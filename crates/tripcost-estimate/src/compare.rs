//! Side-by-side comparison of two destinations.

use serde::{Deserialize, Serialize};
use tripcost_types::Destination;

use crate::EstimationResult;

/// The same trip priced at two destinations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Estimate for the first destination.
    pub first: EstimationResult,
    /// Estimate for the second destination.
    pub second: EstimationResult,
    /// Absolute difference between the two totals.
    pub savings: u64,
    /// Destination with the lower total, the first one on a tie.
    pub cheaper: Destination,
}

impl ComparisonResult {
    /// Builds a comparison from two estimates.
    #[must_use]
    pub fn new(first: EstimationResult, second: EstimationResult) -> Self {
        let cheaper = if second.total < first.total {
            second.destination
        } else {
            first.destination
        };
        Self {
            savings: first.total.abs_diff(second.total),
            cheaper,
            first,
            second,
        }
    }

    /// Returns the estimate for a destination, if it is part of the
    /// comparison.
    #[must_use]
    pub fn get(&self, destination: Destination) -> Option<&EstimationResult> {
        [&self.first, &self.second]
            .into_iter()
            .find(|r| r.destination == destination)
    }

    /// Returns the estimate with the lower total.
    #[must_use]
    pub fn cheapest(&self) -> &EstimationResult {
        if self.second.total < self.first.total {
            &self.second
        } else {
            &self.first
        }
    }
}
