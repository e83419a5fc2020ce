//! ISO-4217 "list one" XML document.
//!
//! Only the two fields the registry needs are read from each `CcyNtry`:
//!
//! ```xml
//! <ISO_4217 Pblshd="2024-06-25">
//!   <CcyTbl>
//!     <CcyNtry>
//!       <CtryNm>UNITED STATES OF AMERICA (THE)</CtryNm>
//!       <CcyNm>US Dollar</CcyNm>
//!       <Ccy>USD</Ccy>
//!       <CcyNbr>840</CcyNbr>
//!       <CcyMnrUnts>2</CcyMnrUnts>
//!     </CcyNtry>
//!   </CcyTbl>
//! </ISO_4217>
//! ```

use std::path::{Path, PathBuf};

use money_types::{CurrencyEntry, CurrencyListSource, CurrencySourceError};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Iso4217Document {
    #[serde(rename = "CcyTbl")]
    table: CurrencyTable,
}

#[derive(Debug, Deserialize)]
struct CurrencyTable {
    #[serde(rename = "CcyNtry", default)]
    entries: Vec<XmlEntry>,
}

#[derive(Debug, Deserialize)]
struct XmlEntry {
    #[serde(rename = "Ccy")]
    code: Option<String>,
    #[serde(rename = "CcyMnrUnts")]
    minor_units: Option<String>,
}

/// Parses an ISO-4217 XML document into raw currency entries.
///
/// Entries without a `Ccy` element (territories with no universal currency)
/// are dropped; a missing `CcyMnrUnts` is passed on as an empty string and
/// rejected later by the registry.
pub fn parse_document(xml: &str) -> Result<Vec<CurrencyEntry>, CurrencySourceError> {
    let document: Iso4217Document = quick_xml::de::from_str(xml)
        .map_err(|e| CurrencySourceError::Malformed(e.to_string()))?;

    Ok(document
        .table
        .entries
        .into_iter()
        .filter_map(|entry| {
            let code = entry.code?;
            Some(CurrencyEntry::new(code, entry.minor_units.unwrap_or_default()))
        })
        .collect())
}

/// Reads an ISO-4217 XML document from the local filesystem.
#[derive(Debug, Clone)]
pub struct XmlFileSource {
    path: PathBuf,
    name: String,
}

impl XmlFileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let name = format!("file:{}", path.display());
        Self { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait::async_trait]
impl CurrencyListSource for XmlFileSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch(&self) -> Result<Vec<CurrencyEntry>, CurrencySourceError> {
        let xml = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| CurrencySourceError::Unavailable(format!("{}: {}", self.path.display(), e)))?;
        parse_document(&xml)
    }
}
