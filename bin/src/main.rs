//! tripcost CLI - Travel budget estimator for Dubai, Abu Dhabi and beyond.

use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tripcost_lib::prelude::*;

mod commands;
mod display;
mod settings;

use settings::Settings;

#[derive(Parser)]
#[command(name = "tripcost")]
#[command(about = "Travel budget estimator for Dubai, Abu Dhabi and international trips", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

/// Trip settings shared by `estimate` and `compare`.
#[derive(Args)]
struct TripArgs {
    /// Trip length in days (1-30)
    #[arg(short, long, default_value = "5")]
    days: u32,

    /// Number of travelers (1-20)
    #[arg(short, long, default_value = "2")]
    travelers: u32,

    /// Hotel class (budget, 3star, 4star, 5star, luxury)
    #[arg(long, default_value = "4star")]
    hotel: HotelType,

    /// Flight cabin class, international trips only (economy, business, first)
    #[arg(long, default_value = "economy")]
    flight_class: FlightClass,

    /// Flight haul length, international trips only (short, medium, long)
    #[arg(long, default_value = "medium")]
    flight_distance: FlightDistance,

    /// Paid activities per day (0-10)
    #[arg(short, long, default_value = "3")]
    activities: u32,

    /// Month of travel (jan-dec or full name). Defaults to the current month.
    #[arg(short, long)]
    month: Option<Month>,

    /// Daily spending tier (budget, mid, luxury)
    #[arg(long, default_value = "mid")]
    budget: BudgetTier,

    /// Request travel insurance
    #[arg(long)]
    insurance: bool,

    /// Request visa fees
    #[arg(long)]
    visa: bool,

    /// Output format (text, json, csv)
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Display currency (AED, USD, EUR, GBP, INR)
    #[arg(short, long)]
    currency: Option<Currency>,
}

impl TripArgs {
    /// Builds the configuration for a destination.
    fn config(&self, destination: Destination) -> TripConfiguration {
        TripConfiguration::new(destination)
            .with_days(self.days)
            .with_travelers(self.travelers)
            .with_hotel(self.hotel)
            .with_flight(self.flight_class, self.flight_distance)
            .with_activities(self.activities)
            .with_month(self.month.unwrap_or_else(Month::current))
            .with_budget_tier(self.budget)
            .with_extras(self.insurance, self.visa)
    }

    /// Resolves the output options against the settings and session.
    fn output(&self, settings: &Settings, session: &Session) -> display::Output {
        display::Output {
            format: self.format.unwrap_or(settings.display.format),
            currency: display::resolve_currency(self.currency, settings.display.currency, session),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate the cost of a trip
    Estimate {
        /// Destination (dubai, abudhabi, international)
        #[arg(default_value = "dubai")]
        destination: Destination,

        #[command(flatten)]
        trip: TripArgs,

        /// Save the estimate to your trips
        #[arg(long)]
        save: bool,
    },

    /// Compare the same trip at two destinations
    Compare {
        /// First destination
        first: Destination,

        /// Second destination
        second: Destination,

        #[command(flatten)]
        trip: TripArgs,
    },

    /// Show the most expensive activities at a destination
    Activities {
        /// Destination identifier
        destination: Destination,

        /// Number of activities to show
        #[arg(short, long, default_value = "3")]
        limit: usize,
    },

    /// Convert an amount between currencies
    Convert {
        /// Amount to convert
        amount: f64,

        /// Source currency
        from: Currency,

        /// Target currency
        to: Currency,
    },

    /// List available destinations
    Destinations,

    /// Show reference prices for a destination
    Info {
        /// Destination identifier
        destination: Destination,

        /// Display currency (AED, USD, EUR, GBP, INR)
        #[arg(short, long)]
        currency: Option<Currency>,
    },

    /// Show recent searches
    History {
        /// Forget all recent searches
        #[arg(long)]
        clear: bool,
    },

    /// Manage saved trips
    Trips {
        #[command(subcommand)]
        action: TripsAction,
    },

    /// Show or change preferences
    Settings {
        /// Set the display currency
        #[arg(long)]
        currency: Option<Currency>,

        /// Set the dark mode preference
        #[arg(long)]
        dark_mode: Option<bool>,
    },
}

/// Actions for managing saved trips.
#[derive(Subcommand)]
enum TripsAction {
    /// List saved trips
    List,

    /// Remove a saved trip
    Remove {
        /// Trip ID or ID prefix. Prompts when omitted.
        id: Option<String>,
    },
}

/// Installs the stderr log subscriber. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let settings = Settings::load(cli.config.as_deref())?;
    let store = settings.session_store();
    let mut session = store
        .load()
        .context("Failed to load session")?
        .map(Session::from_snapshot)
        .unwrap_or_default();

    match command {
        Commands::Estimate {
            destination,
            trip,
            save,
        } => {
            let output = trip.output(&settings, &session);
            commands::estimate::estimate(
                &settings,
                &mut session,
                &trip.config(destination),
                &output,
                save,
            )?;
        }
        Commands::Compare {
            first,
            second,
            trip,
        } => commands::compare::compare(
            &settings,
            first,
            second,
            &trip.config(first),
            &trip.output(&settings, &session),
        )?,
        Commands::Activities { destination, limit } => {
            commands::activities::show_activities(destination, limit)?;
        }
        Commands::Convert { amount, from, to } => commands::convert::convert(amount, from, to),
        Commands::Destinations => commands::destinations::list_destinations(),
        Commands::Info {
            destination,
            currency,
        } => {
            let currency = display::resolve_currency(currency, settings.display.currency, &session);
            commands::info::show_info(destination, currency)?;
        }
        Commands::History { clear } => {
            let currency = display::resolve_currency(None, settings.display.currency, &session);
            commands::history::history(&mut session, currency, clear);
        }
        Commands::Trips { action } => match action {
            TripsAction::List => {
                let currency = display::resolve_currency(None, settings.display.currency, &session);
                commands::trips::list_trips(&session, currency);
            }
            TripsAction::Remove { id } => {
                commands::trips::remove_trip(&mut session, id.as_deref())?;
            }
        },
        Commands::Settings {
            currency,
            dark_mode,
        } => commands::settings::settings(&mut session, currency, dark_mode),
    }

    if session.is_dirty() {
        store
            .save(session.snapshot())
            .with_context(|| format!("Failed to save session to {}", store.path().display()))?;
    }

    Ok(())
}
