//! Destinations command implementation.

use tripcost_lib::prelude::*;

/// List every destination with its seasons.
pub(crate) fn list_destinations() {
    let database = CostDatabase::global();

    println!(
        "{:<15} {:<14} {:<10} {:<8} {:<24} {:<16}",
        "ID", "NAME", "COUNTRY", "CURRENCY", "PEAK SEASON", "OFF SEASON"
    );
    println!("{}", "-".repeat(90));

    for (destination, info) in database.destinations() {
        let months = |months: &[Month]| {
            months
                .iter()
                .map(Month::code)
                .collect::<Vec<_>>()
                .join(",")
        };
        println!(
            "{:<15} {:<14} {:<10} {:<8} {:<24} {:<16}",
            destination.as_str(),
            info.name,
            info.country,
            info.currency.code(),
            months(&info.peak_season),
            months(&info.off_season)
        );
    }

    println!("\nTotal: {} destinations", database.len());
}
