//! Currency descriptors and ISO-4217 style currency codes.

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::MoneyError;

/// Largest supported number of minor unit digits.
///
/// `10^18` is the largest power of ten that fits in the `i64` minor unit value.
pub const MAX_MINOR_UNIT_DIGITS: u8 = 18;

/// Trims and uppercases a raw currency code without validating it.
pub fn normalize_code(raw: &str) -> String {
    raw.trim().to_ascii_uppercase()
}

/// A validated three-letter alphabetic currency code (e.g. `USD`).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CurrencyCode([u8; 3]);

impl CurrencyCode {
    /// Normalizes (trim + uppercase) and validates a raw code.
    pub fn parse(raw: &str) -> Result<Self, MoneyError> {
        let normalized = normalize_code(raw);
        match normalized.as_bytes() {
            &[a, b, c] if [a, b, c].iter().all(u8::is_ascii_uppercase) => Ok(Self([a, b, c])),
            _ => Err(MoneyError::InvalidCode(normalized)),
        }
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII uppercase letters are ever stored.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl FromStr for CurrencyCode {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CurrencyCode({})", self.as_str())
    }
}

impl Serialize for CurrencyCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// An immutable currency descriptor.
///
/// Instances are handed out by [`CurrencyRegistry`](crate::CurrencyRegistry),
/// which guarantees a single definition per code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Currency {
    code: CurrencyCode,
    minor_unit_digits: u8,
}

impl Currency {
    pub(crate) fn new(code: CurrencyCode, minor_unit_digits: u8) -> Self {
        Self {
            code,
            minor_unit_digits,
        }
    }

    /// Returns the three-letter code.
    pub fn code(&self) -> CurrencyCode {
        self.code
    }

    /// Returns the number of decimal places of the minor unit.
    pub fn minor_unit_digits(&self) -> u8 {
        self.minor_unit_digits
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}
