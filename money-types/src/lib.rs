//! # Money Types
//!
//! Currencies, monetary amounts and the currency registry.
//! This crate has ZERO IO dependencies - only value types, the rounding
//! discipline, and the port trait for bulk currency sources.
//!
//! ## Layout
//!
//! - `domain/` - `Currency`, `CurrencyCode` and `Amount`
//! - `registry` - `CurrencyRegistry`, the single source of truth for currencies
//! - `ports/` - Trait definitions that currency list adapters implement
//! - `error` - Domain error types
//!
//! ## Example
//!
//! ```
//! use money_types::CurrencyRegistry;
//!
//! let registry = CurrencyRegistry::new();
//! registry.register("USD", 2).unwrap();
//! registry.register("CNY", 2).unwrap();
//!
//! let a = registry.amount_from_basic_unit("USD", "1.567").unwrap();
//! let b = registry.amount_from_basic_unit("USD", "0.43").unwrap();
//! assert_eq!(a.add(&b).unwrap().to_string(), "USD 2.00");
//!
//! let cny = registry
//!     .amount_from_basic_unit("USD", "2")
//!     .unwrap()
//!     .convert_currency(&registry, "CNY", 6.789)
//!     .unwrap();
//! assert_eq!(cny.to_string(), "CNY 13.58");
//! ```

pub mod domain;
pub mod error;
pub mod ports;
pub mod registry;

#[cfg(test)]
mod registry_tests;

// Re-export commonly used types
pub use domain::{Amount, Currency, CurrencyCode, MAX_MINOR_UNIT_DIGITS};
pub use error::MoneyError;
pub use ports::{CurrencyEntry, CurrencyListSource, CurrencySourceError};
pub use registry::CurrencyRegistry;
