//! Trip cost estimation logic.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tripcost_data::{Activity, CostDatabase, Season, average_cost};
use tripcost_types::{BudgetTier, ConfigurationError, Destination, Month, TripConfiguration};

use crate::advice;
use crate::{ComparisonResult, CostBreakdown, DataCoverage, EstimationResult};

/// Tax applied to the subtotal.
pub const TAX_RATE: f64 = 0.05;

/// Insurance surcharge on the pre-tax cost, when extras are applied.
pub const INSURANCE_RATE: f64 = 0.05;

/// Visa fee per traveler, when extras are applied.
pub const VISA_FEE_PER_TRAVELER: f64 = 500.0;

/// Static estimator instance.
static ESTIMATOR: OnceLock<Estimator<'static>> = OnceLock::new();

/// Switches for behaviour that departs from the reference pricing.
///
/// Both are off by default, which reproduces the reference figures exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorOptions {
    /// Price daily expenses at the caller's budget tier instead of the tier
    /// implied by the hotel class.
    pub honor_budget_tier: bool,
    /// Charge the insurance and visa extras the configuration asks for.
    pub apply_extras: bool,
}

/// Trip cost estimator.
#[derive(Debug, Clone, Copy)]
pub struct Estimator<'db> {
    database: &'db CostDatabase,
    options: EstimatorOptions,
}

impl Estimator<'static> {
    /// Returns the global estimator over the bundled database with default
    /// options.
    #[must_use]
    pub fn global() -> &'static Self {
        ESTIMATOR.get_or_init(|| Self::new(CostDatabase::global(), EstimatorOptions::default()))
    }

    /// Creates an estimator over the bundled database.
    #[must_use]
    pub fn with_options(options: EstimatorOptions) -> Self {
        Self::new(CostDatabase::global(), options)
    }
}

impl<'db> Estimator<'db> {
    /// Creates an estimator over the given database.
    #[must_use]
    pub const fn new(database: &'db CostDatabase, options: EstimatorOptions) -> Self {
        Self { database, options }
    }

    /// Returns the database prices are read from.
    #[must_use]
    pub const fn database(&self) -> &'db CostDatabase {
        self.database
    }

    /// Returns the estimator options.
    #[must_use]
    pub const fn options(&self) -> EstimatorOptions {
        self.options
    }

    /// Resolves the season and price multiplier for a month at a destination.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::MissingEntry`] if the destination is not
    /// in the database.
    pub fn seasonal_adjustment(
        &self,
        destination: Destination,
        month: Month,
    ) -> Result<(Season, f64), ConfigurationError> {
        let info = self.database.destination(destination)?;
        let season = info.season_of(month);
        Ok((season, info.multipliers.for_season(season)))
    }

    /// Returns the price multiplier for a month at a destination.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::MissingEntry`] if the destination is not
    /// in the database.
    pub fn seasonal_multiplier(
        &self,
        destination: Destination,
        month: Month,
    ) -> Result<f64, ConfigurationError> {
        Ok(self.database.destination(destination)?.multiplier_for(month))
    }

    /// Returns the tier daily expenses are priced at.
    #[must_use]
    pub const fn daily_tier(&self, config: &TripConfiguration) -> BudgetTier {
        if self.options.honor_budget_tier {
            config.budget_tier
        } else {
            config.hotel_type.implied_tier()
        }
    }

    /// Prices a trip.
    ///
    /// The result is deterministic: the same configuration always yields the
    /// same figures.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] if a numeric field is out of range or
    /// the database cannot resolve a lookup. Nothing is produced in that case.
    pub fn estimate(&self, config: &TripConfiguration) -> Result<EstimationResult, ConfigurationError> {
        config.validate()?;

        let destination = config.destination;
        let info = self.database.destination(destination)?;
        let (season, multiplier) = self.seasonal_adjustment(destination, config.month)?;

        let days = f64::from(config.days);
        let travelers = f64::from(config.travelers);

        let hotel_band = self.database.hotel_rate(config.hotel_type, destination)?;
        let hotel = hotel_band.avg * multiplier * days * travelers;

        // One round trip per traveler, regardless of trip length
        let flight_band =
            self.database
                .flight_rate(config.flight_class, destination, config.flight_distance)?;
        let flights = flight_band.avg * multiplier * travelers;

        let tier = self.daily_tier(config);
        let daily_band = self.database.daily_rate(destination, tier)?;
        let daily = daily_band.avg * days * travelers;

        let catalog = self.database.activities(destination)?;
        let activities = average_cost(catalog) * f64::from(config.activities_per_day) * travelers;

        let base = hotel + flights + daily + activities;
        let (insurance, visa) = self.extras(config, base);

        let subtotal = base + insurance + visa;
        let tax = subtotal * TAX_RATE;
        let total = subtotal + tax;
        let per_person = total / travelers;
        let daily_budget = per_person / days;

        let coverage = DataCoverage {
            hotel_rate: true,
            daily_rate: true,
            activity_catalog: !catalog.is_empty(),
            seasonal_multiplier: multiplier > 0.0,
        };

        tracing::debug!(
            %destination,
            month = %config.month,
            %season,
            multiplier,
            %tier,
            total,
            "estimated trip"
        );

        Ok(EstimationResult {
            destination,
            destination_name: info.name.clone(),
            resolved_month: config.month,
            season,
            seasonal_multiplier: multiplier,
            total: round_amount(total),
            per_person: round_amount(per_person),
            daily_budget: round_amount(daily_budget),
            breakdown: CostBreakdown {
                hotel: round_amount(hotel),
                flights: round_amount(flights),
                daily: round_amount(daily),
                activities: round_amount(activities),
                insurance: round_amount(insurance),
                visa: round_amount(visa),
                tax: round_amount(tax),
            },
            recommendations: vec![advice::recommend(per_person, config.days)],
            warnings: advice::warnings(per_person, destination, config.days),
            confidence_score: coverage.score(),
        })
    }

    /// Prices the same trip at two destinations.
    ///
    /// Every field except the destination is taken from `config`. On equal
    /// totals the first destination is reported as cheaper.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] if either estimate fails.
    pub fn compare(
        &self,
        first: Destination,
        second: Destination,
        config: &TripConfiguration,
    ) -> Result<ComparisonResult, ConfigurationError> {
        let first = self.estimate(&config.for_destination(first))?;
        let second = self.estimate(&config.for_destination(second))?;
        Ok(ComparisonResult::new(first, second))
    }

    /// Returns the `limit` most expensive activities at a destination.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::MissingEntry`] if the destination has no
    /// catalog.
    pub fn top_activities(
        &self,
        destination: Destination,
        limit: usize,
    ) -> Result<Vec<Activity>, ConfigurationError> {
        self.database.top_activities(destination, limit)
    }

    /// Returns the insurance and visa charges for a trip.
    fn extras(&self, config: &TripConfiguration, base: f64) -> (f64, f64) {
        if !self.options.apply_extras {
            return (0.0, 0.0);
        }
        let insurance = if config.include_insurance {
            base * INSURANCE_RATE
        } else {
            0.0
        };
        let visa = if config.include_visa {
            VISA_FEE_PER_TRAVELER * f64::from(config.travelers)
        } else {
            0.0
        };
        (insurance, visa)
    }
}

impl Default for Estimator<'static> {
    fn default() -> Self {
        *Self::global()
    }
}

/// Rounds half away from zero to a whole, non-negative amount.
fn round_amount(amount: f64) -> u64 {
    amount.round().max(0.0) as u64
}
