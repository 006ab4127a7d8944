//! In-memory session state.

use tripcost_estimate::EstimationResult;
use tripcost_types::{Currency, TripConfiguration};

use crate::{RecentSearch, SavedTrip, SessionSnapshot, TripId};

/// Number of recent searches kept.
pub const MAX_RECENT_SEARCHES: usize = 5;

/// The user's preferences and history for one run.
///
/// Loaded from a [`SessionStore`](crate::SessionStore) at start-up and
/// written back when something changed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    snapshot: SessionSnapshot,
    dirty: bool,
}

impl Session {
    /// Creates an empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a loaded snapshot.
    #[must_use]
    pub fn from_snapshot(snapshot: SessionSnapshot) -> Self {
        Self {
            snapshot,
            dirty: false,
        }
    }

    /// Returns the state to persist.
    #[must_use]
    pub const fn snapshot(&self) -> &SessionSnapshot {
        &self.snapshot
    }

    /// Returns true if the session changed since it was loaded.
    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Records an estimate at the front of the recent searches, dropping the
    /// oldest beyond [`MAX_RECENT_SEARCHES`].
    pub fn record_search(&mut self, config: TripConfiguration, estimate: &EstimationResult) {
        let searches = &mut self.snapshot.recent_searches;
        searches.insert(0, RecentSearch::new(config, estimate));
        searches.truncate(MAX_RECENT_SEARCHES);
        self.dirty = true;
    }

    /// Returns the recent searches, newest first.
    #[must_use]
    pub fn recent_searches(&self) -> &[RecentSearch] {
        &self.snapshot.recent_searches
    }

    /// Forgets every recent search.
    pub fn clear_history(&mut self) {
        self.snapshot.recent_searches.clear();
        self.dirty = true;
    }

    /// Saves a trip at the front of the list and returns its identifier.
    pub fn save_trip(&mut self, config: TripConfiguration, estimate: EstimationResult) -> TripId {
        let trip = SavedTrip::new(config, estimate);
        let id = trip.id;
        self.snapshot.saved_trips.insert(0, trip);
        self.dirty = true;
        id
    }

    /// Returns the saved trips, newest first.
    #[must_use]
    pub fn saved_trips(&self) -> &[SavedTrip] {
        &self.snapshot.saved_trips
    }

    /// Finds a saved trip by full identifier or by identifier prefix.
    ///
    /// An empty id, or a prefix matching more than one trip, finds nothing.
    #[must_use]
    pub fn find_trip(&self, id: &str) -> Option<&SavedTrip> {
        let id = id.trim().to_lowercase();
        if id.is_empty() {
            return None;
        }
        let mut matches = self.snapshot.saved_trips.iter().filter(|trip| {
            trip.id.to_string() == id || trip.id.simple().to_string().starts_with(&id)
        });
        match (matches.next(), matches.next()) {
            (Some(trip), None) => Some(trip),
            _ => None,
        }
    }

    /// Removes a saved trip, returning it if it existed.
    pub fn remove_trip(&mut self, id: TripId) -> Option<SavedTrip> {
        let index = self
            .snapshot
            .saved_trips
            .iter()
            .position(|trip| trip.id == id)?;
        self.dirty = true;
        Some(self.snapshot.saved_trips.remove(index))
    }

    /// Returns the display currency.
    #[must_use]
    pub const fn currency(&self) -> Currency {
        self.snapshot.currency
    }

    /// Sets the display currency.
    pub fn set_currency(&mut self, currency: Currency) {
        self.dirty |= self.snapshot.currency != currency;
        self.snapshot.currency = currency;
    }

    /// Returns the dark mode preference.
    #[must_use]
    pub const fn dark_mode(&self) -> bool {
        self.snapshot.dark_mode
    }

    /// Sets the dark mode preference.
    pub fn set_dark_mode(&mut self, dark_mode: bool) {
        self.dirty |= self.snapshot.dark_mode != dark_mode;
        self.snapshot.dark_mode = dark_mode;
    }
}

impl From<SessionSnapshot> for Session {
    fn from(snapshot: SessionSnapshot) -> Self {
        Self::from_snapshot(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tripcost_estimate::Estimator;
    use tripcost_types::{Destination, Month};

    fn estimate(days: u32) -> (TripConfiguration, EstimationResult) {
        let config = TripConfiguration::new(Destination::Dubai)
            .with_days(days)
            .with_month(Month::Jun);
        let estimate = Estimator::global().estimate(&config).unwrap();
        (config, estimate)
    }

    #[test]
    fn test_recent_searches_keep_newest_five() {
        let mut session = Session::new();
        for days in 1..=7 {
            let (config, result) = estimate(days);
            session.record_search(config, &result);
        }

        let days: Vec<_> = session
            .recent_searches()
            .iter()
            .map(|s| s.config.days)
            .collect();
        assert_eq!(days, [7, 6, 5, 4, 3]);
        assert!(session.is_dirty());

        session.clear_history();
        assert!(session.recent_searches().is_empty());
    }

    #[test]
    fn test_save_and_remove_trip() {
        let mut session = Session::new();
        let (config, result) = estimate(5);
        let first = session.save_trip(config, result.clone());
        let second = session.save_trip(config, result);

        assert_eq!(session.saved_trips()[0].id, second);
        assert_eq!(session.saved_trips().len(), 2);

        let removed = session.remove_trip(first).unwrap();
        assert_eq!(removed.id, first);
        assert_eq!(session.saved_trips().len(), 1);
        assert!(session.remove_trip(first).is_none());
    }

    #[test]
    fn test_find_trip_by_prefix() {
        let mut session = Session::new();
        let (config, result) = estimate(5);
        let id = session.save_trip(config, result);

        let short = &id.simple().to_string()[..8];
        assert_eq!(session.find_trip(short).unwrap().id, id);
        assert_eq!(session.find_trip(&id.to_string()).unwrap().id, id);
        assert!(session.find_trip("zzzz").is_none());
    }

    #[test]
    fn test_find_trip_rejects_empty_id() {
        let mut session = Session::new();
        let (config, result) = estimate(5);
        session.save_trip(config, result);

        assert!(session.find_trip("").is_none());
        assert!(session.find_trip("   ").is_none());
    }

    #[test]
    fn test_preferences_mark_dirty_only_on_change() {
        let mut session = Session::new();
        session.set_currency(Currency::Aed);
        session.set_dark_mode(false);
        assert!(!session.is_dirty());

        session.set_currency(Currency::Gbp);
        assert!(session.is_dirty());
        assert_eq!(session.currency(), Currency::Gbp);
    }
}
