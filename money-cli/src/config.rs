//! Currency source selection.
//!
//! Values arrive from CLI flags, which fall back to `MONEY_CURRENCY_SOURCE`
//! and `MONEY_ISO4217_URL` in the environment.

use std::path::PathBuf;

use iso4217::{BuiltinSource, DEFAULT_ISO4217_URL, HttpSource, XmlFileSource};
use money_types::CurrencyListSource;

/// Where the registry's currency list comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceKind {
    Builtin,
    Online,
    File(PathBuf),
}

impl SourceKind {
    /// Parses `builtin`, `online`, or treats anything else as a file path.
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        match raw.trim() {
            "" => anyhow::bail!("currency source cannot be empty"),
            s if s.eq_ignore_ascii_case("builtin") => Ok(Self::Builtin),
            s if s.eq_ignore_ascii_case("online") => Ok(Self::Online),
            s => Ok(Self::File(PathBuf::from(s))),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub source: SourceKind,
    pub iso4217_url: String,
}

impl Config {
    pub fn new(source: &str, iso4217_url: impl Into<String>) -> anyhow::Result<Self> {
        Ok(Self {
            source: SourceKind::parse(source)?,
            iso4217_url: iso4217_url.into(),
        })
    }

    /// Builds the configured currency list source.
    pub fn currency_source(&self) -> Box<dyn CurrencyListSource> {
        match &self.source {
            SourceKind::Builtin => Box::new(BuiltinSource),
            SourceKind::Online => Box::new(HttpSource::new(&self.iso4217_url)),
            SourceKind::File(path) => Box::new(XmlFileSource::new(path)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_kind_parse() {
        assert_eq!(SourceKind::parse("builtin").unwrap(), SourceKind::Builtin);
        assert_eq!(SourceKind::parse(" ONLINE ").unwrap(), SourceKind::Online);
        assert_eq!(
            SourceKind::parse("./list-one.xml").unwrap(),
            SourceKind::File(PathBuf::from("./list-one.xml"))
        );
        assert!(SourceKind::parse("  ").is_err());
    }

    #[test]
    fn test_currency_source_names() {
        let config = Config::new("builtin", DEFAULT_ISO4217_URL).unwrap();
        assert_eq!(config.currency_source().name(), "builtin");

        let config = Config::new("online", "http://localhost:8080/list.xml").unwrap();
        assert_eq!(config.currency_source().name(), "http://localhost:8080/list.xml");

        let config = Config::new("/tmp/list-one.xml", DEFAULT_ISO4217_URL).unwrap();
        assert_eq!(config.currency_source().name(), "file:/tmp/list-one.xml");
    }
}
