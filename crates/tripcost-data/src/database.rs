//! Cost database with reference prices.

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::Deserialize;
use thiserror::Error;
use tripcost_types::{
    BudgetTier, ConfigurationError, Destination, FlightClass, FlightDistance, HotelType,
};

use crate::catalog::{self, Activity};
use crate::{DestinationInfo, PriceBand};

/// Embedded JSON data with the reference price tables.
const COST_DATABASE_JSON: &str = include_str!("../data/cost_database.json");

/// Static cost database instance.
static DATABASE: OnceLock<CostDatabase> = OnceLock::new();

/// Errors raised while loading a cost database.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// The document is not valid JSON or has the wrong shape.
    #[error("Invalid cost database JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A table is keyed by a value no configuration can name.
    #[error("Invalid key in {table} table: {source}")]
    Key {
        /// The table holding the bad key.
        table: &'static str,
        /// Why the key was rejected.
        source: ConfigurationError,
    },

    /// A combination a valid configuration can reference has no entry.
    #[error("Incomplete cost database: {0}")]
    Incomplete(ConfigurationError),

    /// An entry holds values the estimator cannot use.
    #[error("Invalid {table} entry for {key}: {reason}")]
    InvalidEntry {
        /// The table holding the entry.
        table: &'static str,
        /// The entry key.
        key: String,
        /// What is wrong with it.
        reason: &'static str,
    },
}

/// Raw JSON structure for deserialization.
#[derive(Debug, Deserialize)]
struct RawCostDatabase {
    destinations: HashMap<String, DestinationInfo>,
    hotels: HashMap<String, HashMap<String, PriceBand>>,
    flights: HashMap<String, HashMap<String, PriceBand>>,
    daily_expenses: HashMap<String, HashMap<String, PriceBand>>,
    activities: HashMap<String, Vec<Activity>>,
}

/// Reference prices for every destination, hotel class, flight and tier.
///
/// The database is read-only once built. Every combination of
/// [`Destination`], [`HotelType`], [`FlightClass`], [`FlightDistance`] and
/// [`BudgetTier`] resolves; [`CostDatabase::from_json`] refuses documents
/// where that does not hold.
#[derive(Debug, Clone)]
pub struct CostDatabase {
    destinations: HashMap<Destination, DestinationInfo>,
    hotels: HashMap<(HotelType, Destination), PriceBand>,
    flights: HashMap<(FlightClass, FlightDistance), PriceBand>,
    daily_expenses: HashMap<(Destination, BudgetTier), PriceBand>,
    activities: HashMap<Destination, Vec<Activity>>,
}

impl CostDatabase {
    /// Returns the global cost database instance.
    ///
    /// This lazily initializes the database from embedded JSON on first access.
    #[must_use]
    pub fn global() -> &'static Self {
        DATABASE.get_or_init(|| {
            Self::from_json(COST_DATABASE_JSON)
                .expect("embedded cost_database.json should be valid")
        })
    }

    /// Creates a cost database from a JSON string and checks it.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid, uses unknown keys, misses a
    /// combination or holds inconsistent prices.
    pub fn from_json(json: &str) -> Result<Self, DatabaseError> {
        let raw: RawCostDatabase = serde_json::from_str(json)?;

        let destinations = raw
            .destinations
            .into_iter()
            .map(|(key, info)| Ok((parse_key("destinations", &key)?, info)))
            .collect::<Result<_, DatabaseError>>()?;

        let mut hotels = HashMap::new();
        for (hotel_key, by_destination) in raw.hotels {
            let hotel: HotelType = parse_key("hotels", &hotel_key)?;
            for (dest_key, band) in by_destination {
                hotels.insert((hotel, parse_key("hotels", &dest_key)?), band);
            }
        }

        let mut flights = HashMap::new();
        for (class_key, by_distance) in raw.flights {
            let class: FlightClass = parse_key("flights", &class_key)?;
            for (distance_key, band) in by_distance {
                flights.insert((class, parse_key("flights", &distance_key)?), band);
            }
        }

        let mut daily_expenses = HashMap::new();
        for (dest_key, by_tier) in raw.daily_expenses {
            let destination: Destination = parse_key("daily_expenses", &dest_key)?;
            for (tier_key, band) in by_tier {
                daily_expenses.insert(
                    (destination, parse_key("daily_expenses", &tier_key)?),
                    band,
                );
            }
        }

        let activities = raw
            .activities
            .into_iter()
            .map(|(key, list)| Ok((parse_key("activities", &key)?, list)))
            .collect::<Result<_, DatabaseError>>()?;

        let db = Self {
            destinations,
            hotels,
            flights,
            daily_expenses,
            activities,
        };
        db.check()?;
        Ok(db)
    }

    /// Returns the metadata for a destination.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::MissingEntry`] if the destination is not
    /// in the database.
    pub fn destination(
        &self,
        destination: Destination,
    ) -> Result<&DestinationInfo, ConfigurationError> {
        self.destinations
            .get(&destination)
            .ok_or_else(|| ConfigurationError::missing("destination", destination.as_str()))
    }

    /// Returns all destinations in the database, in declaration order.
    pub fn destinations(&self) -> impl Iterator<Item = (Destination, &DestinationInfo)> {
        Destination::all()
            .iter()
            .filter_map(|d| self.destinations.get(d).map(|info| (*d, info)))
    }

    /// Returns the nightly hotel rate band.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::MissingEntry`] if there is no entry.
    pub fn hotel_rate(
        &self,
        hotel: HotelType,
        destination: Destination,
    ) -> Result<&PriceBand, ConfigurationError> {
        self.hotels.get(&(hotel, destination)).ok_or_else(|| {
            ConfigurationError::missing("hotel", format!("{hotel}/{destination}"))
        })
    }

    /// Returns the per-traveler round trip fare band.
    ///
    /// Destinations without flights always resolve to [`PriceBand::ZERO`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::MissingEntry`] if there is no entry.
    pub fn flight_rate(
        &self,
        class: FlightClass,
        destination: Destination,
        distance: FlightDistance,
    ) -> Result<PriceBand, ConfigurationError> {
        if !destination.has_flights() {
            return Ok(PriceBand::ZERO);
        }
        self.flights
            .get(&(class, distance))
            .copied()
            .ok_or_else(|| ConfigurationError::missing("flight", format!("{class}/{distance}")))
    }

    /// Returns the per-traveler daily expense band.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::MissingEntry`] if there is no entry.
    pub fn daily_rate(
        &self,
        destination: Destination,
        tier: BudgetTier,
    ) -> Result<&PriceBand, ConfigurationError> {
        self.daily_expenses
            .get(&(destination, tier))
            .ok_or_else(|| {
                ConfigurationError::missing("daily expense", format!("{destination}/{tier}"))
            })
    }

    /// Returns the activity catalog of a destination, in catalog order.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::MissingEntry`] if there is no catalog.
    pub fn activities(&self, destination: Destination) -> Result<&[Activity], ConfigurationError> {
        self.activities
            .get(&destination)
            .map(Vec::as_slice)
            .ok_or_else(|| ConfigurationError::missing("activity", destination.as_str()))
    }

    /// Returns the mean ticket price over the whole catalog.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::MissingEntry`] if there is no catalog.
    pub fn average_activity_cost(&self, destination: Destination) -> Result<f64, ConfigurationError> {
        self.activities(destination).map(catalog::average_cost)
    }

    /// Returns the `limit` most expensive activities of a destination.
    ///
    /// Ties keep catalog order. The result has `min(limit, catalog size)`
    /// entries.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::MissingEntry`] if there is no catalog.
    pub fn top_activities(
        &self,
        destination: Destination,
        limit: usize,
    ) -> Result<Vec<Activity>, ConfigurationError> {
        self.activities(destination)
            .map(|list| catalog::most_expensive(list, limit))
    }

    /// Checks completeness and consistency of every table.
    fn check(&self) -> Result<(), DatabaseError> {
        for &destination in Destination::all() {
            let info = self
                .destination(destination)
                .map_err(DatabaseError::Incomplete)?;
            if !info.multipliers.are_positive() {
                return Err(DatabaseError::InvalidEntry {
                    table: "destinations",
                    key: destination.to_string(),
                    reason: "seasonal multipliers must be positive",
                });
            }
            self.activities(destination)
                .map_err(DatabaseError::Incomplete)?;

            for &hotel in HotelType::all() {
                let band = self
                    .hotel_rate(hotel, destination)
                    .map_err(DatabaseError::Incomplete)?;
                check_band("hotels", || format!("{hotel}/{destination}"), band)?;
            }
            for &tier in BudgetTier::all() {
                let band = self
                    .daily_rate(destination, tier)
                    .map_err(DatabaseError::Incomplete)?;
                check_band("daily_expenses", || format!("{destination}/{tier}"), band)?;
            }
        }

        for &class in FlightClass::all() {
            for &distance in FlightDistance::all() {
                let band = self
                    .flight_rate(class, Destination::International, distance)
                    .map_err(DatabaseError::Incomplete)?;
                check_band("flights", || format!("{class}/{distance}"), &band)?;
            }
        }

        Ok(())
    }

    /// Returns the number of destinations in the database.
    #[must_use]
    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    /// Returns true if the database has no destinations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }
}

impl Default for CostDatabase {
    fn default() -> Self {
        Self::global().clone()
    }
}

fn parse_key<T>(table: &'static str, key: &str) -> Result<T, DatabaseError>
where
    T: FromStr<Err = ConfigurationError>,
{
    key.parse()
        .map_err(|source| DatabaseError::Key { table, source })
}

fn check_band(
    table: &'static str,
    key: impl FnOnce() -> String,
    band: &PriceBand,
) -> Result<(), DatabaseError> {
    if band.is_consistent() {
        Ok(())
    } else {
        Err(DatabaseError::InvalidEntry {
            table,
            key: key(),
            reason: "expected 0 <= min <= avg <= max",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tripcost_types::{Currency, Month};

    #[test]
    fn test_global_database_loads() {
        let db = CostDatabase::global();
        assert!(!db.is_empty());
        assert_eq!(db.len(), 3);
    }

    #[test]
    fn test_destination_metadata() {
        let db = CostDatabase::global();
        let abu = db.destination(Destination::AbuDhabi).unwrap();
        assert_eq!(abu.name, "Abu Dhabi");
        assert_eq!(abu.country, "UAE");
        assert_eq!(abu.currency, Currency::Aed);
        assert_eq!(abu.multipliers.off, 0.85);

        let intl = db.destination(Destination::International).unwrap();
        assert_eq!(intl.currency, Currency::Usd);
        assert!(intl.peak_season.contains(&Month::Dec));
    }

    #[test]
    fn test_rate_lookups() {
        let db = CostDatabase::global();
        assert_eq!(
            db.hotel_rate(HotelType::FourStar, Destination::Dubai).unwrap().avg,
            800.0
        );
        assert_eq!(
            db.daily_rate(Destination::International, BudgetTier::Luxury)
                .unwrap()
                .avg,
            650.0
        );
        assert_eq!(
            db.flight_rate(
                FlightClass::Business,
                Destination::International,
                FlightDistance::Long
            )
            .unwrap()
            .avg,
            22000.0
        );
    }

    #[test]
    fn test_domestic_flights_are_zero() {
        let db = CostDatabase::global();
        for &class in FlightClass::all() {
            for &distance in FlightDistance::all() {
                assert_eq!(
                    db.flight_rate(class, Destination::Dubai, distance).unwrap(),
                    PriceBand::ZERO
                );
                assert_eq!(
                    db.flight_rate(class, Destination::AbuDhabi, distance).unwrap(),
                    PriceBand::ZERO
                );
            }
        }
    }

    #[test]
    fn test_average_activity_cost() {
        let db = CostDatabase::global();
        assert_eq!(db.average_activity_cost(Destination::Dubai).unwrap(), 200.0);
        assert_eq!(
            db.average_activity_cost(Destination::International).unwrap(),
            640.0 / 6.0
        );
    }

    #[test]
    fn test_top_activities_leaves_catalog_order() {
        let db = CostDatabase::global();
        let top = db.top_activities(Destination::AbuDhabi, 2).unwrap();
        assert_eq!(top[0].name, "Ferrari World");
        assert_eq!(top[1].name, "Warner Bros World");

        let catalog = db.activities(Destination::AbuDhabi).unwrap();
        assert_eq!(catalog[0].name, "Sheikh Zayed Mosque");
    }

    #[test]
    fn test_destinations_in_declaration_order() {
        let db = CostDatabase::global();
        let ids: Vec<_> = db.destinations().map(|(d, _)| d).collect();
        assert_eq!(ids, Destination::all());
    }

    #[test]
    fn test_rejects_unknown_key() {
        let json = COST_DATABASE_JSON.replace("\"abudhabi\": {\n      \"name\"", "\"sharjah\": {\n      \"name\"");
        let err = CostDatabase::from_json(&json).unwrap_err();
        assert!(matches!(err, DatabaseError::Key { table: "destinations", .. }));
    }

    #[test]
    fn test_rejects_incomplete_tables() {
        let json = r#"{
            "destinations": {},
            "hotels": {},
            "flights": {},
            "daily_expenses": {},
            "activities": {}
        }"#;
        let err = CostDatabase::from_json(json).unwrap_err();
        assert!(matches!(
            err,
            DatabaseError::Incomplete(ConfigurationError::MissingEntry { table: "destination", .. })
        ));
    }

    #[test]
    fn test_rejects_inverted_band() {
        let json = COST_DATABASE_JSON.replace(
            "{ \"min\": 200, \"max\": 350, \"avg\": 275 }",
            "{ \"min\": 400, \"max\": 350, \"avg\": 275 }",
        );
        let err = CostDatabase::from_json(&json).unwrap_err();
        assert!(matches!(err, DatabaseError::InvalidEntry { table: "hotels", .. }));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            CostDatabase::from_json("{ not json"),
            Err(DatabaseError::Json(_))
        ));
    }
}
