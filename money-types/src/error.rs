//! Error types for currency and amount operations.

use crate::domain::CurrencyCode;

/// Domain-level errors raised by the registry and by `Amount` operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoneyError {
    #[error("Invalid currency code {0:?}: expected three alphabetic characters")]
    InvalidCode(String),

    #[error("Unknown currency: {0}")]
    UnknownCurrency(CurrencyCode),

    #[error("Invalid amount {0:?}: not a decimal number")]
    InvalidAmount(String),

    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch {
        expected: CurrencyCode,
        got: CurrencyCode,
    },

    #[error("Cannot divide an amount by zero")]
    DivideByZero,

    #[error("Exchange rate cannot be zero")]
    InvalidRate,

    #[error("Unsupported minor unit precision: {digits} digits (max {max})")]
    UnsupportedPrecision { digits: u8, max: u8 },

    #[error("Amount out of range for {0}")]
    OutOfRange(CurrencyCode),
}
