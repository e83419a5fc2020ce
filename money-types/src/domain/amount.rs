//! Monetary amount bound to a single currency.

use rust_decimal::Decimal;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::currency::{Currency, CurrencyCode, normalize_code};
use super::rounding::{Rounded, decimal_from_f64, decimal_from_minor, round_to_currency};
use crate::error::MoneyError;
use crate::registry::CurrencyRegistry;

/// A monetary amount in one currency.
///
/// Both representations are always kept consistent:
/// - `basic_unit_value` is the decimal string in the currency's basic unit,
///   formatted with exactly `minor_unit_digits` fraction digits (`"12.50"`).
/// - `minor_unit_value` is that same string with the point removed (`1250`).
///
/// Addition and subtraction work on the integer and are exact. Multiplication,
/// division and currency conversion go through an `f64` intermediate and are
/// re-rounded half-to-even at the currency's precision.
#[derive(Debug, Clone, Serialize)]
pub struct Amount {
    currency: Currency,
    #[serde(rename = "value")]
    basic_unit_value: String,
    #[serde(rename = "minor_units")]
    minor_unit_value: i64,
}

impl Amount {
    /// Creates a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::from_minor_units(currency, 0)
    }

    /// Parses a basic unit decimal string (`"1.5"`, `"-3"`, `" 2.00 "`) and
    /// rounds it to the currency's precision.
    pub(crate) fn from_basic_unit_str(currency: Currency, value: &str) -> Result<Self, MoneyError> {
        let trimmed = value.trim();
        if !is_decimal_literal(trimmed) {
            return Err(MoneyError::InvalidAmount(trimmed.to_string()));
        }
        let parsed = Decimal::from_str(trimmed)
            .map_err(|_| MoneyError::InvalidAmount(trimmed.to_string()))?;
        Self::from_decimal(currency, parsed)
    }

    /// Builds an amount from an integer count of minor units.
    pub(crate) fn from_minor_units(currency: Currency, minor: i64) -> Self {
        let basic_unit_value = decimal_from_minor(minor, &currency).to_string();
        Self {
            currency,
            basic_unit_value,
            minor_unit_value: minor,
        }
    }

    fn from_decimal(currency: Currency, value: Decimal) -> Result<Self, MoneyError> {
        let Rounded {
            basic_unit_value,
            minor_unit_value,
        } = round_to_currency(value, &currency)?;
        Ok(Self {
            currency,
            basic_unit_value,
            minor_unit_value,
        })
    }

    fn from_f64(currency: Currency, value: f64) -> Result<Self, MoneyError> {
        let decimal = decimal_from_f64(value, &currency)?;
        Self::from_decimal(currency, decimal)
    }

    /// Returns the currency of this amount.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the currency code of this amount.
    pub fn currency_code(&self) -> CurrencyCode {
        self.currency.code()
    }

    /// Returns the value in the currency's basic unit (e.g. `"1.50"` dollars).
    pub fn basic_unit_value(&self) -> &str {
        &self.basic_unit_value
    }

    /// Returns the value in the currency's minor unit (e.g. `150` cents).
    pub fn minor_unit_value(&self) -> i64 {
        self.minor_unit_value
    }

    pub fn is_zero(&self) -> bool {
        self.minor_unit_value == 0
    }

    pub fn is_negative(&self) -> bool {
        self.minor_unit_value < 0
    }

    fn basic_unit_f64(&self) -> Result<f64, MoneyError> {
        self.basic_unit_value
            .parse::<f64>()
            .map_err(|_| MoneyError::InvalidAmount(self.basic_unit_value.clone()))
    }

    fn ensure_same_currency(&self, other: &Amount) -> Result<(), MoneyError> {
        if self.currency.code() != other.currency.code() {
            return Err(MoneyError::CurrencyMismatch {
                expected: self.currency.code(),
                got: other.currency.code(),
            });
        }
        Ok(())
    }

    /// Returns `self + other`. Exact; fails if the currencies differ.
    pub fn add(&self, other: &Amount) -> Result<Amount, MoneyError> {
        self.ensure_same_currency(other)?;
        let total = self
            .minor_unit_value
            .checked_add(other.minor_unit_value)
            .ok_or(MoneyError::OutOfRange(self.currency.code()))?;
        Ok(Amount::from_minor_units(self.currency, total))
    }

    /// Returns `self - other`. Exact; the result may be negative.
    pub fn subtract(&self, other: &Amount) -> Result<Amount, MoneyError> {
        self.ensure_same_currency(other)?;
        let total = self
            .minor_unit_value
            .checked_sub(other.minor_unit_value)
            .ok_or(MoneyError::OutOfRange(self.currency.code()))?;
        Ok(Amount::from_minor_units(self.currency, total))
    }

    /// Returns `-self`.
    pub fn negate(&self) -> Result<Amount, MoneyError> {
        let negated = self
            .minor_unit_value
            .checked_neg()
            .ok_or(MoneyError::OutOfRange(self.currency.code()))?;
        Ok(Amount::from_minor_units(self.currency, negated))
    }

    /// Returns `self * factor`, rounded half-to-even.
    ///
    /// Only fails when the result is not finite or does not fit the minor
    /// unit integer.
    pub fn multiply(&self, factor: f64) -> Result<Amount, MoneyError> {
        let value = self.basic_unit_f64()? * factor;
        Amount::from_f64(self.currency, value)
    }

    /// Returns `self / factor`, rounded half-to-even.
    pub fn divide(&self, factor: f64) -> Result<Amount, MoneyError> {
        if factor == 0.0 {
            return Err(MoneyError::DivideByZero);
        }
        let value = self.basic_unit_f64()? / factor;
        Amount::from_f64(self.currency, value)
    }

    /// Converts this amount into `target_code` at `rate` target units per
    /// basic unit of this amount's currency.
    ///
    /// Converting to the amount's own currency returns it unchanged and
    /// ignores `rate`, even when it is zero.
    pub fn convert_currency(
        &self,
        registry: &CurrencyRegistry,
        target_code: &str,
        rate: f64,
    ) -> Result<Amount, MoneyError> {
        if normalize_code(target_code) == self.currency.code().as_str() {
            return Ok(self.clone());
        }
        if rate == 0.0 {
            return Err(MoneyError::InvalidRate);
        }
        let target = registry.lookup(target_code)?;
        let value = self.basic_unit_f64()? * rate;
        Amount::from_f64(target, value)
    }

    /// Returns true if both amounts have the same currency code and minor unit value.
    pub fn equals(&self, other: &Amount) -> bool {
        self.currency.code() == other.currency.code()
            && self.minor_unit_value == other.minor_unit_value
    }

    /// Returns true if `self > other`; fails if the currencies differ.
    pub fn greater_than(&self, other: &Amount) -> Result<bool, MoneyError> {
        self.ensure_same_currency(other)?;
        Ok(self.minor_unit_value > other.minor_unit_value)
    }

    /// Sums same-currency amounts, starting from zero in `currency`.
    pub fn sum<'a, I>(currency: Currency, amounts: I) -> Result<Amount, MoneyError>
    where
        I: IntoIterator<Item = &'a Amount>,
    {
        amounts
            .into_iter()
            .try_fold(Amount::zero(currency), |acc, amount| acc.add(amount))
    }
}

/// Optional sign, ASCII digits, optional `.` fraction. At least one digit.
fn is_decimal_literal(s: &str) -> bool {
    let unsigned = s
        .strip_prefix('-')
        .or_else(|| s.strip_prefix('+'))
        .unwrap_or(s);
    let (int, frac) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    !(int.is_empty() && frac.is_empty()) && all_digits(int) && all_digits(frac)
}

impl PartialEq for Amount {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for Amount {}

/// Amounts in different currencies are unordered.
impl PartialOrd for Amount {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.currency.code() != other.currency.code() {
            return None;
        }
        Some(self.minor_unit_value.cmp(&other.minor_unit_value))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.currency.code(), self.basic_unit_value)
    }
}
