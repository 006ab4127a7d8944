//! History command implementation.

use tripcost_lib::{Currency, RecentSearch, Session};

use crate::display;

/// Print the recent searches, or forget them.
pub(crate) fn history(session: &mut Session, currency: Currency, clear: bool) {
    if clear {
        session.clear_history();
        println!("Search history cleared.");
        return;
    }

    let searches = session.recent_searches();
    if searches.is_empty() {
        println!("No recent searches.");
        return;
    }

    println!("{:<17} {:>14} {:>14}  TRIP", "SEARCHED", "TOTAL", "PER PERSON");
    println!("{}", "-".repeat(90));

    for search in searches {
        println!("{}", search_row(search, currency));
    }
}

fn search_row(search: &RecentSearch, currency: Currency) -> String {
    format!(
        "{:<17} {:>14} {:>14}  {}",
        search
            .searched_at
            .with_timezone(&chrono::Local)
            .format("%Y-%m-%d %H:%M")
            .to_string(),
        display::amount(search.total as f64, currency),
        display::amount(search.per_person as f64, currency),
        search.config
    )
}
