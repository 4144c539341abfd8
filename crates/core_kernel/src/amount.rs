//! Amounts with precise decimal arithmetic
//!
//! Ledger values are plain `rust_decimal::Decimal` amounts in the rental's
//! currency. This module owns the parsing rules for user-entered amounts and
//! the two-place display format used by receipt rows.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of decimal places shown for every ledger amount
pub const DISPLAY_DECIMAL_PLACES: u32 = 2;

/// Currency codes following ISO 4217
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    EUR,
    USD,
    GBP,
    CHF,
}

impl Currency {
    /// Returns the currency symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::EUR => "€",
            Currency::USD => "$",
            Currency::GBP => "£",
            Currency::CHF => "CHF",
        }
    }

    /// Returns the ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::EUR => "EUR",
            Currency::USD => "USD",
            Currency::GBP => "GBP",
            Currency::CHF => "CHF",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Errors that can occur while reading an amount
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AmountError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Negative amount not allowed: {0}")]
    Negative(Decimal),
}

/// Normalizes user input: surrounding whitespace is dropped and a comma
/// decimal separator is accepted.
fn normalize(input: &str) -> String {
    input.trim().replace(',', ".")
}

/// Parses an amount, rejecting anything that is not a number
///
/// A blank input is an error here; callers that tolerate missing input use
/// [`parse_lenient`].
pub fn parse_strict(input: &str) -> Result<Decimal, AmountError> {
    let normalized = normalize(input);
    Decimal::from_str(&normalized).map_err(|_| AmountError::InvalidAmount(input.to_string()))
}

/// Parses an amount the way a form field coerces it
///
/// The leading number is read and anything after it ignored (`"12abc"` is
/// 12, `"1e3"` is 1000). Blank input, input with no leading number and
/// results outside the `Decimal` range are zero.
pub fn parse_lenient(input: &str) -> Decimal {
    if let Ok(amount) = parse_strict(input) {
        return amount;
    }
    let normalized = normalize(input);
    leading_number(&normalized).unwrap_or(Decimal::ZERO)
}

/// Largest exponent magnitude that can still produce a representable value
const MAX_EXPONENT: u64 = 56;

fn leading_number(input: &str) -> Option<Decimal> {
    let bytes = input.as_bytes();
    let digits_from = |mut at: usize| {
        while at < bytes.len() && bytes[at].is_ascii_digit() {
            at += 1;
        }
        at
    };

    let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let mut end = digits_from(sign);
    let integer_digits = end - sign;
    let mut fraction_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        let fraction_end = digits_from(end + 1);
        fraction_digits = fraction_end - end - 1;
        end = fraction_end;
    }
    if integer_digits + fraction_digits == 0 {
        return None;
    }

    let mantissa = Decimal::from_str(input[..end].trim_end_matches('.')).ok()?;

    let mut exponent: i64 = 0;
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let exponent_sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exponent_start = end + 1 + exponent_sign;
        let exponent_end = digits_from(exponent_start);
        if exponent_end > exponent_start {
            exponent = input[end + 1..exponent_end].parse().ok()?;
        }
    }
    if exponent.unsigned_abs() > MAX_EXPONENT {
        return None;
    }

    let mut value = mantissa;
    for _ in 0..exponent.unsigned_abs() {
        value = if exponent > 0 {
            value.checked_mul(Decimal::TEN)?
        } else {
            value.checked_div(Decimal::TEN)?
        };
    }
    Some(value)
}

/// Parses an amount that must not be negative
pub fn parse_non_negative(input: &str) -> Result<Decimal, AmountError> {
    let amount = parse_lenient(input);
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(AmountError::Negative(amount));
    }
    Ok(amount)
}

/// Formats an amount with two decimal places (`"0.00"`, `"850.00"`)
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp(DISPLAY_DECIMAL_PLACES);
    // -0 would otherwise render as "-0.00"
    let rounded = if rounded.is_zero() { Decimal::ZERO } else { rounded };
    format!("{:.2}", rounded)
}
