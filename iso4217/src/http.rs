//! Online ISO-4217 list fetched over HTTP.

use money_types::{CurrencyEntry, CurrencyListSource, CurrencySourceError};
use reqwest::Client;

use crate::xml::parse_document;

/// Published location of the ISO-4217 "list one" (current currencies) XML.
pub const DEFAULT_ISO4217_URL: &str =
    "https://www.six-group.com/dam/download/financial-information/data-center/iso-currrency/lists/list-one.xml";

/// Currency source backed by the published ISO-4217 XML list.
pub struct HttpSource {
    url: String,
    http: Client,
}

impl Default for HttpSource {
    fn default() -> Self {
        Self::new(DEFAULT_ISO4217_URL)
    }
}

impl HttpSource {
    /// Creates a source for the given URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into().trim().to_string(),
            http: Client::new(),
        }
    }

    /// Uses a preconfigured HTTP client (timeouts, proxies, ...).
    pub fn with_client(mut self, http: Client) -> Self {
        self.http = http;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait::async_trait]
impl CurrencyListSource for HttpSource {
    fn name(&self) -> &str {
        &self.url
    }

    async fn fetch(&self) -> Result<Vec<CurrencyEntry>, CurrencySourceError> {
        tracing::debug!(url = %self.url, "fetching ISO-4217 list");

        let resp = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|e| CurrencySourceError::Unavailable(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(CurrencySourceError::Unavailable(format!(
                "{} returned HTTP {}",
                self.url,
                status.as_u16()
            )));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| CurrencySourceError::Unavailable(e.to_string()))?;
        parse_document(&body)
    }
}
