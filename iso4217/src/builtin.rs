//! Compiled-in currency table for offline use.
//!
//! The table is declared with the `define_currencies!` macro, which generates
//! the entry list and the [`BuiltinSource`] that feeds it to a registry.
//!
//! # Adding a New Currency
//! Add a line to the `define_currencies!` invocation below:
//! ```ignore
//! define_currencies! {
//!     // ... existing currencies ...
//!     THB => "2",
//! }
//! ```

use money_types::{CurrencyEntry, CurrencyListSource, CurrencySourceError};

/// Declares the built-in currency table.
///
/// # Syntax
/// ```ignore
/// define_currencies! {
///     CODE => "minor_units",
/// }
/// ```
macro_rules! define_currencies {
    (
        $(
            $code:ident => $minor:literal
        ),* $(,)?
    ) => {
        /// `(code, minor units)` pairs, in ISO-4217 list notation.
        pub const BUILTIN_CURRENCIES: &[(&str, &str)] = &[
            $((stringify!($code), $minor)),*
        ];
    };
}

// ─────────────────────────────────────────────────────────────────────────────
// CURRENCY DEFINITIONS
// ─────────────────────────────────────────────────────────────────────────────

define_currencies! {
    AUD => "2",
    BHD => "3",
    BRL => "2",
    CAD => "2",
    CHF => "2",
    CLF => "4",
    CNY => "2",
    CZK => "2",
    DKK => "2",
    EUR => "2",
    GBP => "2",
    HKD => "2",
    HUF => "2",
    IDR => "2",
    INR => "2",
    ISK => "0",
    JOD => "3",
    JPY => "0",
    KRW => "0",
    KWD => "3",
    MXN => "2",
    NOK => "2",
    NZD => "2",
    OMR => "3",
    PLN => "2",
    SEK => "2",
    SGD => "2",
    TND => "3",
    TRY => "2",
    USD => "2",
    UYW => "4",
    VND => "0",
    XAG => "N.A.",
    XAU => "N.A.",
    ZAR => "2",
}

/// Currency source serving [`BUILTIN_CURRENCIES`].
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinSource;

impl BuiltinSource {
    /// The built-in table as registry entries.
    pub fn entries() -> Vec<CurrencyEntry> {
        BUILTIN_CURRENCIES
            .iter()
            .map(|&(code, minor)| CurrencyEntry::new(code, minor))
            .collect()
    }
}

#[async_trait::async_trait]
impl CurrencyListSource for BuiltinSource {
    fn name(&self) -> &str {
        "builtin"
    }

    async fn fetch(&self) -> Result<Vec<CurrencyEntry>, CurrencySourceError> {
        Ok(Self::entries())
    }
}
