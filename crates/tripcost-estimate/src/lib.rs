//! Trip cost estimation for the tripcost travel budget estimator.
//!
//! This crate prices a [`TripConfiguration`](tripcost_types::TripConfiguration)
//! against the reference tables in [`tripcost_data`]:
//!
//! - [`Estimator`] - Computes estimates and destination comparisons
//! - [`EstimationResult`] - Totals, breakdown, recommendations and warnings
//! - [`CostBreakdown`] - Cost per category
//! - [`ComparisonResult`] - The same trip priced at two destinations
//! - [`recommend`] / [`warnings`] - Budget advice for a per-person amount

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod advice;
mod compare;
mod confidence;
mod estimator;
mod result;

pub use advice::{
    BUDGET_DAILY_LIMIT, MID_DAILY_LIMIT, PREMIUM_DAILY_LIMIT, recommend, warnings,
};
pub use compare::ComparisonResult;
pub use confidence::DataCoverage;
pub use estimator::{
    Estimator, EstimatorOptions, INSURANCE_RATE, TAX_RATE, VISA_FEE_PER_TRAVELER,
};
pub use result::{
    CostBreakdown, EstimationResult, Recommendation, RecommendationTier, Severity, Warning,
};
