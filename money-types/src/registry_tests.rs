//! CurrencyRegistry unit tests.

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use async_trait::async_trait;

    use crate::{
        CurrencyEntry, CurrencyListSource, CurrencyRegistry, CurrencySourceError,
        MAX_MINOR_UNIT_DIGITS, MoneyError,
    };

    /// In-memory currency source that counts fetches and can be told to fail.
    pub struct MockSource {
        entries: Vec<CurrencyEntry>,
        fetches: AtomicUsize,
        failures_left: AtomicUsize,
        delay: Duration,
    }

    impl MockSource {
        pub fn new(entries: Vec<CurrencyEntry>) -> Self {
            Self {
                entries,
                fetches: AtomicUsize::new(0),
                failures_left: AtomicUsize::new(0),
                delay: Duration::ZERO,
            }
        }

        pub fn failing_first(self, failures: usize) -> Self {
            self.failures_left.store(failures, Ordering::SeqCst);
            self
        }

        pub fn with_delay(mut self, delay: Duration) -> Self {
            self.delay = delay;
            self
        }

        pub fn fetches(&self) -> usize {
            self.fetches.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl CurrencyListSource for MockSource {
        fn name(&self) -> &str {
            "mock"
        }

        async fn fetch(&self) -> Result<Vec<CurrencyEntry>, CurrencySourceError> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            let failing = self
                .failures_left
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
                .is_ok();
            if failing {
                return Err(CurrencySourceError::Unavailable("mock outage".into()));
            }
            Ok(self.entries.clone())
        }
    }

    fn iso_entries() -> Vec<CurrencyEntry> {
        vec![
            CurrencyEntry::new("USD", "2"),
            CurrencyEntry::new("EUR", "2"),
            CurrencyEntry::new("JPY", "0"),
            CurrencyEntry::new("XAU", "N.A."),
            // Same currency listed for several countries.
            CurrencyEntry::new("USD", "2"),
            // Malformed rows.
            CurrencyEntry::new("", ""),
            CurrencyEntry::new("EURO", "2"),
            CurrencyEntry::new("BHD", "three"),
        ]
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Register / Lookup
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_register_normalizes_code() {
        let registry = CurrencyRegistry::new();
        let currency = registry.register("  usd ", 2).unwrap();
        assert_eq!(currency.code().as_str(), "USD");
        assert_eq!(currency.minor_unit_digits(), 2);
        assert_eq!(registry.lookup("Usd").unwrap(), currency);
    }

    #[test]
    fn test_register_is_idempotent() {
        let registry = CurrencyRegistry::new();
        let first = registry.register("USD", 2).unwrap();
        let second = registry.register("usd", 4).unwrap();
        assert_eq!(first, second);
        assert_eq!(second.minor_unit_digits(), 2);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_register_invalid_code() {
        let registry = CurrencyRegistry::new();
        for code in ["", "US", "USDD", "U$D", "12A"] {
            assert!(
                matches!(registry.register(code, 2), Err(MoneyError::InvalidCode(_))),
                "{code:?}"
            );
        }
        assert!(registry.is_empty());
    }

    #[test]
    fn test_register_unsupported_precision() {
        let registry = CurrencyRegistry::new();
        assert!(matches!(
            registry.register("ABC", MAX_MINOR_UNIT_DIGITS + 1),
            Err(MoneyError::UnsupportedPrecision { digits: 19, max: 18 })
        ));
        assert!(registry.is_empty());
        assert!(registry.register("ABC", MAX_MINOR_UNIT_DIGITS).is_ok());
    }

    #[test]
    fn test_lookup_errors() {
        let registry = CurrencyRegistry::new();
        registry.register("USD", 2).unwrap();
        assert!(matches!(
            registry.lookup("US1"),
            Err(MoneyError::InvalidCode(c)) if c == "US1"
        ));
        assert!(matches!(
            registry.lookup(" eur "),
            Err(MoneyError::UnknownCurrency(c)) if c.as_str() == "EUR"
        ));
    }

    #[test]
    fn test_failed_calls_leave_registry_usable() {
        let registry = CurrencyRegistry::new();
        registry.register("USD", 2).unwrap();
        let _ = registry.register("??", 2);
        let _ = registry.amount_from_basic_unit("USD", "not a number");
        let _ = registry.amount_from_basic_unit("EUR", "1");
        assert_eq!(registry.len(), 1);
        assert!(!registry.contains("EUR"));
        assert_eq!(
            registry.amount_from_basic_unit("USD", "1").unwrap().to_string(),
            "USD 1.00"
        );
    }

    #[test]
    fn test_currencies_sorted() {
        let registry = CurrencyRegistry::new();
        for code in ["USD", "CNY", "EUR"] {
            registry.register(code, 2).unwrap();
        }
        let codes: Vec<String> = registry
            .currencies()
            .iter()
            .map(|c| c.code().to_string())
            .collect();
        assert_eq!(codes, ["CNY", "EUR", "USD"]);
    }

    #[test]
    fn test_existing_amounts_keep_their_currency_copy() {
        let registry = CurrencyRegistry::new();
        registry.register("USD", 2).unwrap();
        let amount = registry.amount_from_basic_unit("USD", "1").unwrap();

        let again = registry.register("usd", 4).unwrap();
        assert_eq!(again.minor_unit_digits(), 2);
        assert_eq!(amount.currency(), registry.lookup("USD").unwrap());
        assert_eq!(amount.currency().minor_unit_digits(), 2);
        assert_eq!(amount.basic_unit_value(), "1.00");
        assert_eq!(amount.minor_unit_value(), 100);

        let later = registry.amount_from_basic_unit("USD", "1").unwrap();
        assert_eq!(later, amount);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Bulk population
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_register_entries_skips_bad_rows() {
        let registry = CurrencyRegistry::new();
        let added = registry.register_entries(iso_entries());
        assert_eq!(added, 4);
        assert_eq!(registry.lookup("XAU").unwrap().minor_unit_digits(), 0);
        assert_eq!(registry.lookup("JPY").unwrap().minor_unit_digits(), 0);
        assert!(!registry.contains("BHD"));
    }

    #[test]
    fn test_register_entries_keeps_existing_definitions() {
        let registry = CurrencyRegistry::new();
        registry.register("USD", 3).unwrap();
        let added = registry.register_entries(iso_entries());
        assert_eq!(added, 3);
        assert_eq!(registry.lookup("USD").unwrap().minor_unit_digits(), 3);
    }

    #[tokio::test]
    async fn test_populate_once_runs_a_single_fetch() {
        let registry = CurrencyRegistry::new();
        let source = MockSource::new(iso_entries());

        assert!(!registry.is_populated());
        assert_eq!(registry.populate_once(&source).await.unwrap(), 4);
        assert_eq!(registry.populate_once(&source).await.unwrap(), 4);
        assert!(registry.is_populated());
        assert_eq!(source.fetches(), 1);
        assert_eq!(registry.len(), 4);
    }

    #[tokio::test]
    async fn test_populate_once_retries_after_failure() {
        let registry = CurrencyRegistry::new();
        let source = MockSource::new(iso_entries()).failing_first(1);

        let err = registry.populate_once(&source).await.unwrap_err();
        assert!(matches!(err, CurrencySourceError::Unavailable(_)));
        assert!(!registry.is_populated());
        assert!(registry.is_empty());

        assert_eq!(registry.populate_once(&source).await.unwrap(), 4);
        assert_eq!(source.fetches(), 2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_populate_fetches_once() {
        let registry = Arc::new(CurrencyRegistry::new());
        let source = Arc::new(MockSource::new(iso_entries()).with_delay(Duration::from_millis(50)));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = Arc::clone(&registry);
                let source = Arc::clone(&source);
                tokio::spawn(async move { registry.populate_once(source.as_ref()).await })
            })
            .collect();

        for handle in handles {
            // Every caller observes the completed population.
            assert_eq!(handle.await.unwrap().unwrap(), 4);
        }
        assert_eq!(source.fetches(), 1);
        assert!(registry.contains("EUR"));
    }
}
