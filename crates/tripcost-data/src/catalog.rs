//! Activity catalogs.

use serde::{Deserialize, Serialize};

/// A bookable activity at a destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Activity name (e.g. "Desert Safari").
    pub name: String,
    /// Ticket price per person.
    pub cost: u32,
    /// Free-form category (e.g. "cultural", "waterpark").
    pub category: String,
}

impl Activity {
    /// Creates a new activity.
    #[must_use]
    pub fn new(name: impl Into<String>, cost: u32, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cost,
            category: category.into(),
        }
    }
}

impl std::fmt::Display for Activity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.category, self.cost)
    }
}

/// Mean ticket price of a catalog, or zero for an empty catalog.
#[must_use]
pub fn average_cost(catalog: &[Activity]) -> f64 {
    if catalog.is_empty() {
        return 0.0;
    }
    let sum: u64 = catalog.iter().map(|a| u64::from(a.cost)).sum();
    sum as f64 / catalog.len() as f64
}

/// Returns the `limit` most expensive activities, most expensive first.
///
/// The sort is stable: activities with equal cost keep their catalog order.
/// The catalog itself is left untouched.
#[must_use]
pub fn most_expensive(catalog: &[Activity], limit: usize) -> Vec<Activity> {
    let mut sorted = catalog.to_vec();
    sorted.sort_by(|a, b| b.cost.cmp(&a.cost));
    sorted.truncate(limit);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Activity> {
        vec![
            Activity::new("Burj Khalifa", 150, "attraction"),
            Activity::new("Desert Safari", 250, "adventure"),
            Activity::new("Dubai Mall", 50, "shopping"),
            Activity::new("Aquaventure", 300, "waterpark"),
            Activity::new("Ski Dubai", 250, "activity"),
            Activity::new("Dhow Cruise", 200, "dinner"),
        ]
    }

    #[test]
    fn test_average_cost() {
        assert_eq!(average_cost(&catalog()), 200.0);
        assert_eq!(average_cost(&[]), 0.0);
    }

    #[test]
    fn test_most_expensive_is_stable() {
        let top = most_expensive(&catalog(), 3);
        let names: Vec<_> = top.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["Aquaventure", "Desert Safari", "Ski Dubai"]);
    }

    #[test]
    fn test_most_expensive_limit_larger_than_catalog() {
        let top = most_expensive(&catalog(), 10);
        assert_eq!(top.len(), 6);
        assert_eq!(top.last().map(|a| a.cost), Some(50));
    }

    #[test]
    fn test_most_expensive_zero_limit() {
        assert!(most_expensive(&catalog(), 0).is_empty());
    }
}
