//! Estimation output types.

use serde::{Deserialize, Serialize};
use tripcost_data::Season;
use tripcost_types::{Destination, Month};

/// Cost per category, rounded to whole currency units.
///
/// Each line is rounded on its own, so the lines may differ from the
/// rounded total by a few units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Accommodation for every traveler and night.
    pub hotel: u64,
    /// Round trip fares (international trips only).
    pub flights: u64,
    /// Food, transport and incidentals.
    pub daily: u64,
    /// Paid activities.
    pub activities: u64,
    /// Travel insurance surcharge, zero unless extras are applied.
    #[serde(default)]
    pub insurance: u64,
    /// Visa fees, zero unless extras are applied.
    #[serde(default)]
    pub visa: u64,
    /// Tax on the subtotal.
    pub tax: u64,
}

impl CostBreakdown {
    /// Returns the sum of every line except tax.
    #[must_use]
    pub const fn subtotal(&self) -> u64 {
        self.hotel + self.flights + self.daily + self.activities + self.insurance + self.visa
    }

    /// Returns the labelled lines in display order.
    #[must_use]
    pub const fn lines(&self) -> [(&'static str, u64); 7] {
        [
            ("hotel", self.hotel),
            ("flights", self.flights),
            ("daily", self.daily),
            ("activities", self.activities),
            ("insurance", self.insurance),
            ("visa", self.visa),
            ("tax", self.tax),
        ]
    }
}

/// Spending level a recommendation is aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationTier {
    /// Under 200 per person per day.
    Budget,
    /// Under 400 per person per day.
    Mid,
    /// Under 800 per person per day.
    Premium,
    /// 800 or more per person per day.
    Luxury,
}

impl RecommendationTier {
    /// Returns the tier as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Budget => "budget",
            Self::Mid => "mid",
            Self::Premium => "premium",
            Self::Luxury => "luxury",
        }
    }
}

impl std::fmt::Display for RecommendationTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Advice on what the budget affords.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Spending level.
    pub tier: RecommendationTier,
    /// Human readable advice.
    pub message: String,
    /// Icon shown next to the advice.
    pub icon: String,
}

/// How urgently a warning should be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The budget is unrealistic.
    Critical,
    /// The budget is tight.
    Warning,
    /// Informational hint.
    Info,
}

impl Severity {
    /// Returns the severity as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Budget warning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    /// How urgent the warning is.
    pub severity: Severity,
    /// Human readable warning.
    pub message: String,
}

/// Priced trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimationResult {
    /// Destination that was priced.
    pub destination: Destination,
    /// Display name of the destination.
    pub destination_name: String,
    /// Month of travel.
    pub resolved_month: Month,
    /// Season the month falls in at the destination.
    pub season: Season,
    /// Multiplier applied to hotel and flight prices.
    pub seasonal_multiplier: f64,
    /// Trip total including tax.
    pub total: u64,
    /// Total divided by the number of travelers.
    pub per_person: u64,
    /// Per-person cost divided by the number of days.
    pub daily_budget: u64,
    /// Cost per category.
    pub breakdown: CostBreakdown,
    /// Exactly one recommendation for the daily per-person budget.
    pub recommendations: Vec<Recommendation>,
    /// Warnings in evaluation order.
    pub warnings: Vec<Warning>,
    /// Data coverage score between 0 and 100.
    pub confidence_score: u8,
}

impl EstimationResult {
    /// Returns true if any warning is critical.
    #[must_use]
    pub fn has_critical_warning(&self) -> bool {
        self.warnings
            .iter()
            .any(|w| w.severity == Severity::Critical)
    }
}
