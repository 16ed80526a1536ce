//! Parsing and formatting of user-entered currency amounts.
//!
//! Text comes straight from an input field, one keystroke at a time, so the
//! parser distinguishes three outcomes: nothing usable yet (empty or a bare
//! leading point), a value, or text that can never become a value.

use crate::{Error, Result};
use quicktip_types::NumericInputMode;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Fractional digits shown for every amount.
pub const DISPLAY_SCALE: u32 = 2;

/// Parsed custom tip field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomTipEntry {
    /// Empty, or starts with a point and has no leading digit
    Incomplete,
    Amount(Decimal),
}

impl CustomTipEntry {
    #[must_use]
    pub fn amount(self) -> Option<Decimal> {
        match self {
            Self::Incomplete => None,
            Self::Amount(value) => Some(value),
        }
    }
}

/// Parse price text. Returns `Ok(None)` while the field holds no usable value.
///
/// # Errors
///
/// Returns an input error if the text can never parse as a non-negative
/// amount in `mode`.
pub fn parse_price(text: &str, mode: NumericInputMode) -> Result<Option<Decimal>> {
    parse_amount(text, mode)
}

/// Parse custom tip text.
///
/// # Errors
///
/// Same conditions as [`parse_price`].
pub fn parse_custom_tip(text: &str, mode: NumericInputMode) -> Result<CustomTipEntry> {
    Ok(parse_amount(text, mode)?.map_or(CustomTipEntry::Incomplete, CustomTipEntry::Amount))
}

fn is_incomplete(text: &str) -> bool {
    text.is_empty() || text.starts_with('.')
}

fn parse_amount(text: &str, mode: NumericInputMode) -> Result<Option<Decimal>> {
    let trimmed = text.trim();
    if is_incomplete(trimmed) {
        return Ok(None);
    }
    if trimmed.starts_with('-') {
        return Err(Error::NegativeAmount(trimmed.to_string()));
    }
    if !mode.allows_fraction() && trimmed.contains('.') {
        return Err(Error::FractionNotAllowed(trimmed.to_string()));
    }

    // "20." is a price being typed, not a malformed one
    let number = trimmed.strip_suffix('.').unwrap_or(trimmed);
    let well_formed = trimmed.matches('.').count() <= 1
        && number.chars().all(|c| c.is_ascii_digit() || c == '.');
    if !well_formed {
        return Err(Error::MalformedNumber(trimmed.to_string()));
    }

    Decimal::from_str(number)
        .map(Some)
        .map_err(|_| Error::MalformedNumber(trimmed.to_string()))
}

/// Round to display precision, half away from zero.
#[must_use]
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DISPLAY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Format with exactly two fractional digits.
///
/// # Errors
///
/// Returns [`Error::Overflow`] when the value is too large to carry two
/// fractional digits in a `Decimal`.
pub fn format_amount(value: Decimal) -> Result<String> {
    let mut rounded = round2(value);
    rounded.rescale(DISPLAY_SCALE);
    // rescale keeps fewer digits instead of failing near the top of the range
    if rounded.scale() != DISPLAY_SCALE {
        return Err(Error::Overflow);
    }
    Ok(rounded.to_string())
}
