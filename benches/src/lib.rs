//! Shared fixtures for the tripcost benchmarks.

use tripcost_lib::prelude::*;

/// A named trip used as benchmark input.
#[derive(Debug, Clone, Copy)]
pub struct BenchmarkTrip {
    /// Label shown in the benchmark report.
    pub name: &'static str,
    /// The configuration to price.
    pub config: TripConfiguration,
}

/// Returns representative trips, from a short local stay to a long-haul
/// group trip.
#[must_use]
pub fn benchmark_trips() -> Vec<BenchmarkTrip> {
    vec![
        BenchmarkTrip {
            name: "dubai-weekend",
            config: TripConfiguration::new(Destination::Dubai)
                .with_days(2)
                .with_travelers(2)
                .with_month(Month::Jun),
        },
        BenchmarkTrip {
            name: "abudhabi-family",
            config: TripConfiguration::new(Destination::AbuDhabi)
                .with_days(7)
                .with_travelers(4)
                .with_hotel(HotelType::FiveStar)
                .with_month(Month::Dec),
        },
        BenchmarkTrip {
            name: "international-group",
            config: TripConfiguration::new(Destination::International)
                .with_days(21)
                .with_travelers(12)
                .with_hotel(HotelType::Luxury)
                .with_flight(FlightClass::First, FlightDistance::Long)
                .with_activities(6)
                .with_month(Month::Jul),
        },
    ]
}

/// Returns every configuration over the enum domains with a fixed trip
/// shape.
#[must_use]
pub fn configuration_grid() -> Vec<TripConfiguration> {
    let mut grid = Vec::new();
    for &destination in Destination::all() {
        for &hotel in HotelType::all() {
            for &class in FlightClass::all() {
                for &distance in FlightDistance::all() {
                    for &month in Month::all() {
                        grid.push(
                            TripConfiguration::new(destination)
                                .with_hotel(hotel)
                                .with_flight(class, distance)
                                .with_month(month),
                        );
                    }
                }
            }
        }
    }
    grid
}
