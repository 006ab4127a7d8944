//! Info command implementation.
//!
//! This module handles displaying the reference prices for a destination,
//! including seasonal multipliers for every month.

use anyhow::{Context, Result};
use tripcost_lib::prelude::*;

use crate::display::Output;

/// Show the seasons, rate tables and activities of a destination.
pub(crate) fn show_info(destination: Destination, currency: Currency) -> Result<()> {
    let database = CostDatabase::global();
    let info = database
        .destination(destination)
        .with_context(|| format!("Unknown destination: {destination}"))?;
    let output = Output {
        format: OutputFormat::Text,
        currency,
    };

    // Basic info
    println!("Destination: {}", info.name);
    println!("ID:          {}", destination.as_str());
    println!("Country:     {}", info.country);
    println!("Currency:    {}", info.currency);

    println!("\nSeasons:");
    println!("{:<12} {:<8} {:>10}", "MONTH", "SEASON", "MULTIPLIER");
    println!("{}", "-".repeat(32));
    for &month in Month::all() {
        let season = info.season_of(month);
        println!(
            "{:<12} {:<8} {:>10.2}",
            month.name(),
            season.as_str(),
            info.multipliers.for_season(season)
        );
    }

    println!("\nHotels (per night):");
    for &hotel in HotelType::all() {
        let band = database.hotel_rate(hotel, destination)?;
        println!("  {:<10} {}", hotel.as_str(), output.band(&band));
    }

    println!("\nDaily expenses (per person):");
    for &tier in BudgetTier::all() {
        let band = database.daily_rate(destination, tier)?;
        println!("  {:<10} {}", tier.as_str(), output.band(&band));
    }

    if destination.has_flights() {
        println!("\nFlights (round trip):");
        for &class in FlightClass::all() {
            for &distance in FlightDistance::all() {
                let band = database.flight_rate(class, destination, distance)?;
                println!(
                    "  {:<18} {}",
                    format!("{class} {distance}"),
                    output.band(&band)
                );
            }
        }
    }

    let activities = database.activities(destination)?;
    println!("\nActivities:");
    for activity in activities {
        println!(
            "  {:<24} {:<14} {:>12}",
            activity.name,
            activity.category,
            output.amount(f64::from(activity.cost))
        );
    }
    println!(
        "\nAverage activity cost: {}",
        output.amount(database.average_activity_cost(destination)?)
    );

    Ok(())
}
