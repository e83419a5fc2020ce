//! Currency list sources for populating a [`CurrencyRegistry`].
//!
//! Every source implements the `CurrencyListSource` port from `money-types`:
//!
//! - [`HttpSource`] - the published ISO-4217 XML list, fetched with `reqwest`
//! - [`XmlFileSource`] - the same XML document read from disk
//! - [`BuiltinSource`] - a compiled-in table of common currencies
//!
//! # Example
//! ```
//! use iso4217::BuiltinSource;
//! use money_types::CurrencyRegistry;
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let registry = CurrencyRegistry::new();
//! registry.populate_once(&BuiltinSource).await.unwrap();
//!
//! let price = registry.amount_from_basic_unit("EUR", "9.999").unwrap();
//! assert_eq!(price.to_string(), "EUR 10.00");
//! # });
//! ```
//!
//! [`CurrencyRegistry`]: money_types::CurrencyRegistry

pub mod builtin;
pub mod http;
pub mod xml;

pub use builtin::{BUILTIN_CURRENCIES, BuiltinSource};
pub use http::{DEFAULT_ISO4217_URL, HttpSource};
pub use xml::{XmlFileSource, parse_document};
