//! Saved trip commands (list, remove).

use anyhow::{Context, Result, bail};
use inquire::Select;
use tripcost_lib::{Currency, SavedTrip, Session};

use crate::display;

/// Print every saved trip, newest first.
pub(crate) fn list_trips(session: &Session, currency: Currency) {
    let trips = session.saved_trips();
    if trips.is_empty() {
        println!("No saved trips.");
        return;
    }

    println!(
        "{:<10} {:<17} {:>14} {:>14}  TRIP",
        "ID", "SAVED", "TOTAL", "PER PERSON"
    );
    println!("{}", "-".repeat(100));

    for trip in trips {
        println!("{}", trip_row(trip, currency));
    }

    println!("\nTotal: {} trip(s)", trips.len());
}

fn trip_row(trip: &SavedTrip, currency: Currency) -> String {
    format!(
        "{:<10} {:<17} {:>14} {:>14}  {}",
        trip.short_id(),
        trip.saved_at
            .with_timezone(&chrono::Local)
            .format("%Y-%m-%d %H:%M")
            .to_string(),
        display::amount(trip.estimate.total as f64, currency),
        display::amount(trip.estimate.per_person as f64, currency),
        trip.config
    )
}

/// Remove a saved trip by ID or ID prefix, prompting when none is given.
pub(crate) fn remove_trip(session: &mut Session, id: Option<&str>) -> Result<()> {
    let trip = match id {
        Some(id) => session
            .find_trip(id)
            .cloned()
            .with_context(|| format!("No saved trip matches '{id}'"))?,
        None => prompt_trip_selection(session)?,
    };

    session.remove_trip(trip.id);
    println!("Removed trip {}.", trip.short_id());
    Ok(())
}

/// Prompt the user to pick one of the saved trips.
fn prompt_trip_selection(session: &Session) -> Result<SavedTrip> {
    let trips = session.saved_trips().to_vec();
    if trips.is_empty() {
        bail!("No saved trips to remove.");
    }

    Select::new("Select a trip to remove:", trips)
        .prompt()
        .context("Trip selection cancelled")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tripcost_lib::prelude::*;

    #[test]
    fn test_trip_row_uses_given_currency() {
        let config = TripConfiguration::new(Destination::Dubai).with_month(Month::Jun);
        let estimate = Estimator::global().estimate(&config).unwrap();
        let trip = SavedTrip::new(config, estimate);

        let row = trip_row(&trip, Currency::Usd);
        assert!(row.starts_with(&trip.short_id()));
        assert!(row.contains("$3,289"));
    }

    #[test]
    fn test_remove_rejects_empty_id() {
        let mut session = Session::new();
        let config = TripConfiguration::new(Destination::Dubai).with_month(Month::Jun);
        let estimate = Estimator::global().estimate(&config).unwrap();
        session.save_trip(config, estimate);

        assert!(remove_trip(&mut session, Some("")).is_err());
        assert_eq!(session.saved_trips().len(), 1);
    }
}
