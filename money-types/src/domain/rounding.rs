//! The single rounding rule shared by every amount construction path.
//!
//! A value is formatted to the currency's minor unit digits with
//! round-half-to-even, and the minor unit integer is then parsed back out of
//! that same string. The formatted string is the rounding authority, so the
//! two representations can never disagree.

use rust_decimal::{Decimal, RoundingStrategy};

use super::Currency;
use crate::error::MoneyError;

/// Canonical pair of representations for one rounded value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Rounded {
    pub basic_unit_value: String,
    pub minor_unit_value: i64,
}

/// Rounds `value` to the currency's precision and derives both representations.
pub(crate) fn round_to_currency(value: Decimal, currency: &Currency) -> Result<Rounded, MoneyError> {
    let digits = u32::from(currency.minor_unit_digits());
    let mut rounded = value.round_dp_with_strategy(digits, RoundingStrategy::MidpointNearestEven);
    rounded.rescale(digits);
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }

    let basic_unit_value = rounded.to_string();
    let minor_unit_value = basic_unit_value
        .replacen('.', "", 1)
        .parse::<i64>()
        .map_err(|_| MoneyError::OutOfRange(currency.code()))?;

    Ok(Rounded {
        basic_unit_value,
        minor_unit_value,
    })
}

/// Converts a floating point intermediate to a decimal using its exact binary value.
pub(crate) fn decimal_from_f64(value: f64, currency: &Currency) -> Result<Decimal, MoneyError> {
    if !value.is_finite() {
        return Err(MoneyError::OutOfRange(currency.code()));
    }
    Decimal::from_f64_retain(value).ok_or(MoneyError::OutOfRange(currency.code()))
}

/// The exact basic unit value of `minor` minor units.
pub(crate) fn decimal_from_minor(minor: i64, currency: &Currency) -> Decimal {
    Decimal::new(minor, u32::from(currency.minor_unit_digits()))
}
