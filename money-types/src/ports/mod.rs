//! Port traits (interfaces for adapters).
//!
//! These are the contracts that adapters must implement.
//! The registry depends on these traits, not concrete implementations.

mod currency_source;

pub use currency_source::{CurrencyEntry, CurrencyListSource, CurrencySourceError, NO_MINOR_UNIT};
