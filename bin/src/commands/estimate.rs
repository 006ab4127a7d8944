//! Estimate command implementation.
//!
//! Prices a trip, records it in the recent searches and optionally saves it.

use anyhow::{Context, Result};
use tripcost_lib::prelude::*;

use crate::display::Output;
use crate::settings::Settings;

/// Estimate a trip and print the result.
pub(crate) fn estimate(
    settings: &Settings,
    session: &mut Session,
    config: &TripConfiguration,
    output: &Output,
    save: bool,
) -> Result<()> {
    let estimator = Estimator::with_options(settings.estimate);
    let estimate = estimator
        .estimate(config)
        .with_context(|| format!("Cannot estimate {config}"))?;

    output.estimate(&estimate)?;
    session.record_search(*config, &estimate);

    if save {
        let id = session.save_trip(*config, estimate);
        // Keep stdout parseable for json and csv
        eprintln!("Saved trip {}", &id.simple().to_string()[..8]);
    }

    Ok(())
}
