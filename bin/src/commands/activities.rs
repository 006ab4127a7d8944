//! Activities command implementation.

use anyhow::Result;
use tripcost_lib::prelude::*;

/// List the most expensive activities at a destination.
pub(crate) fn show_activities(destination: Destination, limit: usize) -> Result<()> {
    let activities = Estimator::global().top_activities(destination, limit)?;

    if activities.is_empty() {
        println!("No activities found.");
        return Ok(());
    }

    println!("{:<24} {:<14} {:>10}", "ACTIVITY", "CATEGORY", "COST (AED)");
    println!("{}", "-".repeat(50));

    for activity in &activities {
        println!(
            "{:<24} {:<14} {:>10}",
            activity.name, activity.category, activity.cost
        );
    }

    Ok(())
}
