//! Currency registry.
//!
//! The registry owns the canonical set of currencies. It is meant to be built
//! once at startup and shared (`Arc<CurrencyRegistry>`) with every call site
//! that needs to create amounts or convert between currencies.

use dashmap::DashMap;
use tokio::sync::OnceCell;

use crate::domain::{Amount, Currency, CurrencyCode, MAX_MINOR_UNIT_DIGITS};
use crate::error::MoneyError;
use crate::ports::{CurrencyEntry, CurrencyListSource, CurrencySourceError};

/// Concurrency-safe mapping from currency code to [`Currency`].
///
/// Registration is idempotent: once a code is registered its definition never
/// changes, and concurrent registrations of the same code agree on a single
/// definition.
#[derive(Debug, Default)]
pub struct CurrencyRegistry {
    currencies: DashMap<CurrencyCode, Currency>,
    /// Number of entries registered by the first successful bulk population.
    populated: OnceCell<usize>,
}

impl CurrencyRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a currency, or returns the existing definition for `code`.
    ///
    /// When the code is already registered `minor_unit_digits` is ignored.
    pub fn register(&self, code: &str, minor_unit_digits: u8) -> Result<Currency, MoneyError> {
        let code = CurrencyCode::parse(code)?;

        // Fast path: no write lock on already registered codes.
        if let Some(existing) = self.currencies.get(&code) {
            return Ok(*existing);
        }

        if minor_unit_digits > MAX_MINOR_UNIT_DIGITS {
            return Err(MoneyError::UnsupportedPrecision {
                digits: minor_unit_digits,
                max: MAX_MINOR_UNIT_DIGITS,
            });
        }

        // Slow path: the shard lock is held across check and insert.
        let currency = *self.currencies.entry(code).or_insert_with(|| {
            tracing::debug!(%code, minor_unit_digits, "registered currency");
            Currency::new(code, minor_unit_digits)
        });
        Ok(currency)
    }

    /// Looks up a registered currency.
    pub fn lookup(&self, code: &str) -> Result<Currency, MoneyError> {
        let code = CurrencyCode::parse(code)?;
        self.currencies
            .get(&code)
            .map(|entry| *entry)
            .ok_or(MoneyError::UnknownCurrency(code))
    }

    /// Returns true if `code` is a valid, registered currency code.
    pub fn contains(&self, code: &str) -> bool {
        self.lookup(code).is_ok()
    }

    /// Number of registered currencies.
    pub fn len(&self) -> usize {
        self.currencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.currencies.is_empty()
    }

    /// All registered currencies, sorted by code.
    pub fn currencies(&self) -> Vec<Currency> {
        let mut all: Vec<Currency> = self.currencies.iter().map(|entry| *entry).collect();
        all.sort_by_key(Currency::code);
        all
    }

    /// Creates an amount from a basic unit decimal string (e.g. `"1.50"` dollars).
    pub fn amount_from_basic_unit(&self, code: &str, value: &str) -> Result<Amount, MoneyError> {
        let currency = self.lookup(code)?;
        Amount::from_basic_unit_str(currency, value)
    }

    /// Creates an amount from a minor unit integer (e.g. `150` cents).
    pub fn amount_from_minor_unit(&self, code: &str, value: i64) -> Result<Amount, MoneyError> {
        let currency = self.lookup(code)?;
        Ok(Amount::from_minor_units(currency, value))
    }

    /// Registers every well-formed entry and returns how many were accepted.
    ///
    /// Malformed entries and codes that are already registered are skipped;
    /// a bad entry never aborts the rest of the list.
    pub fn register_entries<I>(&self, entries: I) -> usize
    where
        I: IntoIterator<Item = CurrencyEntry>,
    {
        let mut registered = 0;
        for entry in entries {
            let Some(digits) = entry.minor_unit_digits() else {
                tracing::debug!(code = %entry.code, minor_units = %entry.minor_units, "skipping entry with malformed minor units");
                continue;
            };
            let was_known = self.contains(&entry.code);
            match self.register(&entry.code, digits) {
                Ok(_) if !was_known => registered += 1,
                Ok(_) => {}
                Err(e) => tracing::debug!(code = %entry.code, error = %e, "skipping currency entry"),
            }
        }
        registered
    }

    /// Populates the registry from `source` exactly once.
    ///
    /// The first caller fetches and registers the list; concurrent callers
    /// wait for it to finish. If that attempt fails the error is returned and
    /// a later call may try again. Returns the number of currencies added by
    /// the successful population.
    pub async fn populate_once<S>(&self, source: &S) -> Result<usize, CurrencySourceError>
    where
        S: CurrencyListSource + ?Sized,
    {
        let added = self
            .populated
            .get_or_try_init(|| async {
                let entries = source.fetch().await.inspect_err(|e| {
                    tracing::warn!(source = source.name(), error = %e, "currency population failed");
                })?;
                let total = entries.len();
                let added = self.register_entries(entries);
                tracing::info!(
                    source = source.name(),
                    entries = total,
                    added,
                    "populated currency registry"
                );
                Ok::<_, CurrencySourceError>(added)
            })
            .await?;
        Ok(*added)
    }

    /// Returns true once a bulk population has completed successfully.
    pub fn is_populated(&self) -> bool {
        self.populated.initialized()
    }
}
