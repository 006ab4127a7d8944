//! Persisted session records.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use tripcost_estimate::EstimationResult;
use tripcost_types::{Currency, TripConfiguration};
use uuid::Uuid;

/// Unique identifier for a saved trip.
pub type TripId = Uuid;

/// A configuration the user estimated, with its headline figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentSearch {
    /// The configuration that was estimated.
    pub config: TripConfiguration,
    /// Trip total in AED.
    pub total: u64,
    /// Per-person cost in AED.
    pub per_person: u64,
    /// When the estimate was made.
    pub searched_at: DateTime<Utc>,
}

impl RecentSearch {
    /// Records an estimate made now.
    #[must_use]
    pub fn new(config: TripConfiguration, estimate: &EstimationResult) -> Self {
        Self {
            config,
            total: estimate.total,
            per_person: estimate.per_person,
            searched_at: Utc::now(),
        }
    }
}

/// A trip the user chose to keep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedTrip {
    /// Unique identifier.
    pub id: TripId,
    /// The configuration that was estimated.
    pub config: TripConfiguration,
    /// The full estimate at the time of saving.
    pub estimate: EstimationResult,
    /// When the trip was saved.
    pub saved_at: DateTime<Utc>,
}

impl SavedTrip {
    /// Creates a saved trip with a fresh identifier.
    #[must_use]
    pub fn new(config: TripConfiguration, estimate: EstimationResult) -> Self {
        Self {
            id: Uuid::new_v4(),
            config,
            estimate,
            saved_at: Utc::now(),
        }
    }

    /// Returns the first eight characters of the identifier.
    #[must_use]
    pub fn short_id(&self) -> String {
        self.id.simple().to_string()[..8].to_string()
    }
}

impl std::fmt::Display for SavedTrip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} ({}) AED {}",
            self.short_id(),
            self.estimate.destination_name,
            self.config,
            self.estimate.total
        )
    }
}

/// Everything persisted between runs.
///
/// Keys are read one by one. A missing or malformed key falls back to its
/// default, and list entries that are not valid records are dropped, so the
/// preferences in a document written by the web client still load.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SessionSnapshot {
    /// Most recent searches, newest first.
    #[serde(deserialize_with = "skip_invalid")]
    pub recent_searches: Vec<RecentSearch>,
    /// Saved trips, newest first.
    #[serde(deserialize_with = "skip_invalid")]
    pub saved_trips: Vec<SavedTrip>,
    /// Dark mode preference.
    #[serde(deserialize_with = "or_default")]
    pub dark_mode: bool,
    /// Display currency.
    #[serde(deserialize_with = "or_default")]
    pub currency: Currency,
}

/// Deserializes a list, dropping entries that do not parse as `T`.
fn skip_invalid<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let serde_json::Value::Array(values) = serde_json::Value::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };
    let total = values.len();
    let records: Vec<T> = values
        .into_iter()
        .filter_map(|value| serde_json::from_value(value).ok())
        .collect();
    if records.len() < total {
        tracing::warn!(skipped = total - records.len(), "dropping unreadable session records");
    }
    Ok(records)
}

/// Deserializes a value, falling back to the default when it does not parse.
fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}
