//! Settings command implementation.

use tripcost_lib::prelude::*;

/// Update preferences, then print them.
pub(crate) fn settings(session: &mut Session, currency: Option<Currency>, dark_mode: Option<bool>) {
    if let Some(currency) = currency {
        session.set_currency(currency);
    }
    if let Some(dark_mode) = dark_mode {
        session.set_dark_mode(dark_mode);
    }

    println!("Currency:  {}", session.currency());
    println!("Dark mode: {}", if session.dark_mode() { "on" } else { "off" });
}
