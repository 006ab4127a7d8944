//! Compare command implementation.

use anyhow::{Context, Result};
use tripcost_lib::prelude::*;

use crate::display::Output;
use crate::settings::Settings;

/// Price the same trip at two destinations and print both.
pub(crate) fn compare(
    settings: &Settings,
    first: Destination,
    second: Destination,
    config: &TripConfiguration,
    output: &Output,
) -> Result<()> {
    let comparison = Estimator::with_options(settings.estimate)
        .compare(first, second, config)
        .with_context(|| format!("Cannot compare {first} and {second}"))?;

    output.comparison(&comparison)
}
