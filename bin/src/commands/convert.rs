//! Convert command implementation.

use tripcost_lib::prelude::*;

/// Convert an amount between currencies with the fixed rate table.
pub(crate) fn convert(amount: f64, from: Currency, to: Currency) {
    let converted = ExchangeRates::global().convert(amount, from, to);
    println!("{amount:.2} {from} = {converted:.2} {to}");
}
