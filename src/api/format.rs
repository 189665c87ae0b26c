//! # Display Formatting
//!
//! Brazilian Portuguese number formatting for cards.
//!
//! ```
//! use fare_compare::api::format::{format_cash, format_miles, PLACEHOLDER};
//!
//! assert_eq!(format_cash(Some(1234.56)), "R$ 1.234,56");
//! assert_eq!(format_miles(Some(44999.6)), "45.000 miles");
//! assert_eq!(format_miles(None), PLACEHOLDER);
//! assert_eq!(format_cash(Some(f64::NAN)), PLACEHOLDER);
//! ```

use rust_decimal::{Decimal, RoundingStrategy};

/// Shown for absent or non-finite values.
pub const PLACEHOLDER: &str = "—";

/// Formats a cash amount as BRL, e.g. `R$ 1.234,56`.
#[must_use]
pub fn format_cash(value: Option<f64>) -> String {
    let Some(amount) = value.filter(|v| v.is_finite()) else {
        return PLACEHOLDER.to_string();
    };
    let Ok(amount) = Decimal::try_from(amount) else {
        return PLACEHOLDER.to_string();
    };

    let amount = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if amount.is_sign_negative() && !amount.is_zero() {
        "-"
    } else {
        ""
    };
    let plain = format!("{:.2}", amount.abs());
    let (units, cents) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    format!("{sign}R$ {},{cents}", group_thousands(units))
}

/// Formats a miles amount rounded to the nearest integer, e.g. `45.000 miles`.
#[must_use]
pub fn format_miles(value: Option<f64>) -> String {
    let Some(miles) = value.filter(|v| v.is_finite()) else {
        return PLACEHOLDER.to_string();
    };

    let rounded = miles.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());

    format!("{sign}{} miles", group_thousands(&digits))
}

/// Inserts `.` between groups of three digits.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}
