//! Tip and total arithmetic.
//!
//! Both entry points are pure: the caller threads the current price and tip
//! input in on every edit and renders the returned strings.

use crate::amount::{CustomTipEntry, format_amount, parse_custom_tip};
use crate::{Error, Result};
use quicktip_types::{CalculationResult, NumericInputMode, TipMode, ZERO_AMOUNT};
use rust_decimal::Decimal;

fn ensure_non_negative(value: Decimal) -> Result<()> {
    if value < Decimal::ZERO {
        return Err(Error::NegativeAmount(value.to_string()));
    }
    Ok(())
}

/// Tip as a percentage of price.
///
/// An absent price yields `0.00` for both amounts. The total is computed from
/// the unrounded tip so it always equals `round2(price * (1 + percent / 100))`.
///
/// # Errors
///
/// Returns [`Error::NegativeAmount`] for a negative price or percent and
/// [`Error::Overflow`] when the result does not fit in a `Decimal`.
pub fn compute_fixed_tip(price: Option<Decimal>, percent: Decimal) -> Result<CalculationResult> {
    let Some(price) = price else {
        return Ok(CalculationResult::zero());
    };
    ensure_non_negative(price)?;
    ensure_non_negative(percent)?;

    let tip = price
        .checked_mul(percent)
        .and_then(|scaled| scaled.checked_div(Decimal::ONE_HUNDRED))
        .ok_or(Error::Overflow)?;
    let total = price.checked_add(tip).ok_or(Error::Overflow)?;

    Ok(CalculationResult::new(
        format_amount(tip)?,
        format_amount(total)?,
    ))
}

/// Tip entered as an absolute amount.
///
/// Empty text, or text starting with a bare point, is an incomplete entry:
/// the tip shows `0.00` and the total falls back to the price alone.
///
/// # Errors
///
/// Returns an input error when `custom_tip_text` is malformed for `mode`,
/// [`Error::NegativeAmount`] for a negative price and [`Error::Overflow`]
/// when the sum does not fit in a `Decimal`.
pub fn compute_custom_tip(
    price: Option<Decimal>,
    custom_tip_text: &str,
    mode: NumericInputMode,
) -> Result<CalculationResult> {
    let Some(price) = price else {
        return Ok(CalculationResult::zero());
    };
    ensure_non_negative(price)?;

    match parse_custom_tip(custom_tip_text, mode)? {
        CustomTipEntry::Incomplete => Ok(CalculationResult::new(
            ZERO_AMOUNT,
            format_amount(price)?,
        )),
        CustomTipEntry::Amount(tip) => custom_result(price, tip),
    }
}

/// Calculate for an already-resolved tip mode.
///
/// # Errors
///
/// Same conditions as [`compute_fixed_tip`].
pub fn compute_for_mode(price: Option<Decimal>, mode: TipMode) -> Result<CalculationResult> {
    match mode {
        TipMode::Fixed { percent } => compute_fixed_tip(price, percent),
        TipMode::Custom { amount } => {
            let Some(price) = price else {
                return Ok(CalculationResult::zero());
            };
            ensure_non_negative(price)?;
            ensure_non_negative(amount)?;
            custom_result(price, amount)
        }
    }
}

fn custom_result(price: Decimal, tip: Decimal) -> Result<CalculationResult> {
    let total = price.checked_add(tip).ok_or(Error::Overflow)?;
    Ok(CalculationResult::new(
        format_amount(tip)?,
        format_amount(total)?,
    ))
}
