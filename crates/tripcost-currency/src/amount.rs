//! Amount rendering.

use tripcost_types::Currency;

/// Renders an amount rounded to whole units with the currency symbol and
/// comma thousands separators, e.g. `AED 12,180` or `$3,289`.
#[must_use]
pub fn format_amount(amount: f64, currency: Currency) -> String {
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}{}{grouped}", currency.symbol())
}
