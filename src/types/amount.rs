//! Money amount helpers
//!
//! All money is held as [`Decimal`] and displayed with two fractional digits.

use super::error::BankError;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Number of fractional digits used when displaying amounts
pub const DISPLAY_SCALE: u32 = 2;

/// Format an amount with exactly two fractional digits
///
/// Values with more precision are rounded half away from zero before
/// formatting, so `10.005` renders as `10.01`.
pub fn format_amount(amount: Decimal) -> String {
    let rounded =
        amount.round_dp_with_strategy(DISPLAY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}

/// Parse an amount typed by the operator
///
/// Leading and trailing whitespace is ignored. A comma is accepted as the
/// decimal separator.
///
/// # Errors
///
/// Returns `BankError::MalformedInput` if the text is not a decimal number.
pub fn parse_amount(raw: &str) -> Result<Decimal, BankError> {
    let normalized = raw.trim().replace(',', ".");
    Decimal::from_str(&normalized).map_err(|_| BankError::malformed_input("amount", raw.trim()))
}
