//! Currency list source port.
//!
//! This trait defines the interface for bulk currency providers used to
//! populate a registry. Implementations can be HTTP fetchers, local files,
//! compiled-in tables, mocks, etc.

/// Sentinel used by ISO-4217 lists for currencies without a minor unit.
pub const NO_MINOR_UNIT: &str = "N.A.";

/// Error type for currency list sources.
#[derive(Debug, thiserror::Error)]
pub enum CurrencySourceError {
    #[error("Currency source unavailable: {0}")]
    Unavailable(String),

    #[error("Malformed currency list: {0}")]
    Malformed(String),
}

/// One raw entry of a currency list, as published.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyEntry {
    /// Currency code, not yet normalized or validated.
    pub code: String,
    /// Minor unit digits as a decimal digit string, or `"N.A."`.
    pub minor_units: String,
}

impl CurrencyEntry {
    pub fn new(code: impl Into<String>, minor_units: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            minor_units: minor_units.into(),
        }
    }

    /// Returns the minor unit digit count, or `None` if the field is malformed.
    pub fn minor_unit_digits(&self) -> Option<u8> {
        let raw = self.minor_units.trim();
        if raw == NO_MINOR_UNIT {
            return Some(0);
        }
        raw.parse().ok()
    }
}

/// Port trait for currency list providers.
#[async_trait::async_trait]
pub trait CurrencyListSource: Send + Sync {
    /// Short human readable name for logs.
    fn name(&self) -> &str;

    /// Fetches and parses the full currency list.
    async fn fetch(&self) -> Result<Vec<CurrencyEntry>, CurrencySourceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minor_unit_digits() {
        assert_eq!(CurrencyEntry::new("USD", "2").minor_unit_digits(), Some(2));
        assert_eq!(CurrencyEntry::new("XAU", "N.A.").minor_unit_digits(), Some(0));
        assert_eq!(CurrencyEntry::new("KWD", " 3 ").minor_unit_digits(), Some(3));
    }

    #[test]
    fn test_malformed_minor_units() {
        assert_eq!(CurrencyEntry::new("USD", "").minor_unit_digits(), None);
        assert_eq!(CurrencyEntry::new("USD", "two").minor_unit_digits(), None);
        assert_eq!(CurrencyEntry::new("USD", "-1").minor_unit_digits(), None);
    }
}
