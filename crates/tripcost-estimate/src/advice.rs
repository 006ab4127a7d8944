//! Budget recommendations and warnings.

use tripcost_types::Destination;

use crate::{Recommendation, RecommendationTier, Severity, Warning};

/// Daily per-person spend below which the budget tier is recommended.
pub const BUDGET_DAILY_LIMIT: f64 = 200.0;

/// Daily per-person spend below which the mid tier is recommended.
pub const MID_DAILY_LIMIT: f64 = 400.0;

/// Daily per-person spend below which the premium tier is recommended.
pub const PREMIUM_DAILY_LIMIT: f64 = 800.0;

/// Per-person spend per day below which the budget is considered unrealistic.
const CRITICAL_PER_DAY: f64 = 100.0;

/// Per-person spend per day below which the budget is considered tight.
const TIGHT_PER_DAY: f64 = 200.0;

/// Per-person spend per day below which Abu Dhabi is suggested over Dubai.
const DUBAI_VALUE_PER_DAY: f64 = 500.0;

/// Returns the single recommendation for a per-person budget.
///
/// The budget is spread over `days` (treated as at least one) and matched
/// against the tier limits in ascending order.
#[must_use]
pub fn recommend(per_person: f64, days: u32) -> Recommendation {
    let daily_per_person = per_person / f64::from(days.max(1));

    let (tier, message, icon) = if daily_per_person < BUDGET_DAILY_LIMIT {
        (
            RecommendationTier::Budget,
            "Consider hostels or budget hotels",
            "💰",
        )
    } else if daily_per_person < MID_DAILY_LIMIT {
        (
            RecommendationTier::Mid,
            "Good for 3-star hotels and local dining",
            "🏨",
        )
    } else if daily_per_person < PREMIUM_DAILY_LIMIT {
        (
            RecommendationTier::Premium,
            "Perfect for 4-star hotels and fine dining",
            "✨",
        )
    } else {
        (
            RecommendationTier::Luxury,
            "Luxury resorts and premium experiences",
            "👑",
        )
    };

    Recommendation {
        tier,
        message: message.to_string(),
        icon: icon.to_string(),
    }
}

/// Returns the warnings for a per-person budget, in evaluation order.
///
/// At most one low-budget warning fires. The Dubai value hint is evaluated
/// independently and always comes last.
#[must_use]
pub fn warnings(per_person: f64, destination: Destination, days: u32) -> Vec<Warning> {
    let days = f64::from(days);
    let mut warnings = Vec::new();

    if per_person < CRITICAL_PER_DAY * days {
        warnings.push(Warning {
            severity: Severity::Critical,
            message: "Extremely low budget - consider reducing days or increasing budget"
                .to_string(),
        });
    } else if per_person < TIGHT_PER_DAY * days {
        warnings.push(Warning {
            severity: Severity::Warning,
            message: "Budget may be tight for comfortable travel".to_string(),
        });
    }

    if destination == Destination::Dubai && per_person < DUBAI_VALUE_PER_DAY * days {
        warnings.push(Warning {
            severity: Severity::Info,
            message: "Dubai is generally expensive - consider Abu Dhabi for better value"
                .to_string(),
        });
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommend_tiers() {
        assert_eq!(recommend(199.0 * 5.0, 5).tier, RecommendationTier::Budget);
        assert_eq!(recommend(200.0 * 5.0, 5).tier, RecommendationTier::Mid);
        assert_eq!(recommend(399.9 * 5.0, 5).tier, RecommendationTier::Mid);
        assert_eq!(recommend(400.0 * 5.0, 5).tier, RecommendationTier::Premium);
        assert_eq!(recommend(800.0 * 5.0, 5).tier, RecommendationTier::Luxury);
    }

    #[test]
    fn test_recommend_message_and_icon() {
        let rec = recommend(6090.0, 5);
        assert_eq!(rec.tier, RecommendationTier::Luxury);
        assert_eq!(rec.message, "Luxury resorts and premium experiences");
        assert_eq!(rec.icon, "👑");
    }

    #[test]
    fn test_critical_and_dubai_hint_both_fire() {
        let list = warnings(250.0, Destination::Dubai, 3);
        let severities: Vec<_> = list.iter().map(|w| w.severity).collect();
        assert_eq!(severities, [Severity::Critical, Severity::Info]);
        assert!(list[1].message.contains("Abu Dhabi"));
    }

    #[test]
    fn test_tight_budget_is_exclusive_with_critical() {
        let list = warnings(450.0, Destination::AbuDhabi, 3);
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].severity, Severity::Warning);
    }

    #[test]
    fn test_dubai_hint_alone() {
        let list = warnings(1323.0, Destination::Dubai, 3);
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].severity, Severity::Info);
    }

    #[test]
    fn test_no_warnings_for_comfortable_budget() {
        assert!(warnings(6090.0, Destination::Dubai, 5).is_empty());
        assert!(warnings(1000.0, Destination::International, 3).is_empty());
    }

    #[test]
    fn test_thresholds_are_strict() {
        assert_eq!(
            warnings(300.0, Destination::International, 3)[0].severity,
            Severity::Warning
        );
        assert!(warnings(600.0, Destination::International, 3).is_empty());
    }
}
