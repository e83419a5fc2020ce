//! Domain models: currencies and amounts.

pub mod amount;
pub mod currency;
mod rounding;

pub use amount::Amount;
pub use currency::{Currency, CurrencyCode, MAX_MINOR_UNIT_DIGITS, normalize_code};
