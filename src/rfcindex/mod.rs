//! The RFC Editor's index of published RFCs and document series.
//!
//! `rfc-index.xml` is one document listing every RFC, every number that was
//! never issued, and the BCP, STD and FYI series. [`RfcIndex`] loads it with
//! a single GET (no pagination, retry or caching) and keeps each kind of
//! entry in a map keyed by `doc-id`.
//!
//! ```no_run
//! use ietfdata_core::rfcindex::RfcIndex;
//!
//! # async fn example() {
//! let index = RfcIndex::fetch().await;
//! if let Some(rfc) = index.rfc.get("RFC3550") {
//!     println!("{} ({} {})", rfc.title, rfc.month, rfc.year);
//! }
//! # }
//! ```

mod entry;
mod error;
mod xml;

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::datatracker::http_client::{ClientSettings, build_client};

pub use entry::{BcpEntry, FyiEntry, RfcEntry, RfcFormat, RfcNotIssuedEntry, StdEntry};
pub use error::RfcIndexError;
pub use xml::NAMESPACE;

/// Where the RFC Editor publishes the index.
pub const DEFAULT_INDEX_URL: &str = "https://www.rfc-editor.org/rfc-index.xml";

/// The parsed RFC index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RfcIndex {
    pub rfc: BTreeMap<String, RfcEntry>,
    pub rfc_not_issued: BTreeMap<String, RfcNotIssuedEntry>,
    pub bcp: BTreeMap<String, BcpEntry>,
    pub std: BTreeMap<String, StdEntry>,
    pub fyi: BTreeMap<String, FyiEntry>,
}

/// Any one entry of the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum IndexEntry<'a> {
    Rfc(&'a RfcEntry),
    RfcNotIssued(&'a RfcNotIssuedEntry),
    Bcp(&'a BcpEntry),
    Std(&'a StdEntry),
    Fyi(&'a FyiEntry),
}

impl RfcIndex {
    /// Fetches the index from [`DEFAULT_INDEX_URL`].
    ///
    /// Never fails: problems are logged and an empty index is returned.
    pub async fn fetch() -> Self {
        Self::fetch_from(DEFAULT_INDEX_URL).await
    }

    /// Fetches the index from `url`, logging any failure and returning an
    /// empty index in its place.
    pub async fn fetch_from(url: &str) -> Self {
        match Self::try_fetch_from(url).await {
            Ok(index) => index,
            Err(error) => {
                warn!(%url, %error, "cannot fetch RFC index");
                Self::default()
            }
        }
    }

    /// Fetches and parses the index from `url`.
    ///
    /// # Errors
    ///
    /// Returns [`RfcIndexError`] for transport failures, non-200 responses
    /// and documents that do not parse.
    #[instrument]
    pub async fn try_fetch_from(url: &str) -> Result<Self, RfcIndexError> {
        let client = build_client(&ClientSettings::default())
            .map_err(|e| RfcIndexError::client_build(e.to_string()))?;
        let response = client
            .get(url)
            .send()
            .await
            .map_err(|e| RfcIndexError::network(url, e))?;
        let status = response.status();
        if !status.is_success() {
            return Err(RfcIndexError::http_status(url, status.as_u16()));
        }
        let body = response
            .text()
            .await
            .map_err(|e| RfcIndexError::network(url, e))?;
        debug!(bytes = body.len(), "downloaded RFC index");

        let index = Self::parse(&body)?;
        info!(
            rfcs = index.rfc.len(),
            bcps = index.bcp.len(),
            stds = index.std.len(),
            "loaded RFC index"
        );
        Ok(index)
    }

    /// Parses the text of `rfc-index.xml`.
    ///
    /// # Errors
    ///
    /// Returns [`RfcIndexError`] if the text is not well-formed XML, the root
    /// is not an `<rfc-index>` in [`NAMESPACE`], or an entry lacks a required
    /// child. Unknown elements are skipped.
    pub fn parse(xml_text: &str) -> Result<Self, RfcIndexError> {
        let root = xml::parse(xml_text)?;
        if root.tag() != Some("rfc-index") {
            return Err(RfcIndexError::structure(format!(
                "root element is not <rfc-index> in namespace {NAMESPACE}"
            )));
        }

        let mut index = Self::default();
        for child in root.children() {
            match child.tag() {
                Some("rfc-entry") => {
                    let entry = RfcEntry::from_element(child)?;
                    index.rfc.insert(entry.doc_id.clone(), entry);
                }
                Some("rfc-not-issued-entry") => {
                    let entry = RfcNotIssuedEntry::from_element(child)?;
                    index.rfc_not_issued.insert(entry.doc_id.clone(), entry);
                }
                Some("bcp-entry") => {
                    let entry = BcpEntry::from_element(child)?;
                    index.bcp.insert(entry.doc_id.clone(), entry);
                }
                Some("std-entry") => {
                    let entry = StdEntry::from_element(child)?;
                    index.std.insert(entry.doc_id.clone(), entry);
                }
                Some("fyi-entry") => {
                    let entry = FyiEntry::from_element(child)?;
                    index.fyi.insert(entry.doc_id.clone(), entry);
                }
                _ => child.skip("rfc-index"),
            }
        }
        Ok(index)
    }

    /// Looks `doc_id` up in every map. Matching ignores ASCII case, so
    /// `rfc3550` finds `RFC3550`.
    #[must_use]
    pub fn entry(&self, doc_id: &str) -> Option<IndexEntry<'_>> {
        let key = doc_id.to_ascii_uppercase();
        self.rfc
            .get(&key)
            .map(IndexEntry::Rfc)
            .or_else(|| self.rfc_not_issued.get(&key).map(IndexEntry::RfcNotIssued))
            .or_else(|| self.bcp.get(&key).map(IndexEntry::Bcp))
            .or_else(|| self.std.get(&key).map(IndexEntry::Std))
            .or_else(|| self.fyi.get(&key).map(IndexEntry::Fyi))
    }

    /// Total number of entries of every kind.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rfc.len() + self.rfc_not_issued.len() + self.bcp.len() + self.std.len() + self.fyi.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rfc-index xmlns="http://www.rfc-editor.org/rfc-index"
           xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
  <bcp-entry>
    <doc-id>BCP0014</doc-id>
    <is-also><doc-id>RFC2119</doc-id><doc-id>RFC8174</doc-id></is-also>
  </bcp-entry>
  <fyi-entry><doc-id>FYI0001</doc-id><is-also><doc-id>RFC1150</doc-id></is-also></fyi-entry>
  <rfc-entry>
    <doc-id>RFC2119</doc-id>
    <title>Key words for use in RFCs to Indicate Requirement Levels</title>
    <author><name>S. Bradner</name></author>
    <date><month>March</month><year>1997</year></date>
    <format><file-format>ASCII</file-format><char-count>4723</char-count><page-count>3</page-count></format>
    <keywords><kw>Standards-Track</kw><kw>documents</kw></keywords>
    <abstract><p>In many standards track documents several words are used to signify the requirements in the specification.</p></abstract>
    <is-also><doc-id>BCP0014</doc-id></is-also>
    <updated-by><doc-id>RFC8174</doc-id></updated-by>
    <current-status>BEST CURRENT PRACTICE</current-status>
    <publication-status>BEST CURRENT PRACTICE</publication-status>
    <stream>IETF</stream>
    <errata-url>https://www.rfc-editor.org/errata/rfc2119</errata-url>
    <doi>10.17487/RFC2119</doi>
  </rfc-entry>
  <rfc-not-issued-entry><doc-id>RFC0026</doc-id></rfc-not-issued-entry>
  <std-entry><doc-id>STD0001</doc-id><title>[STD number 1 is retired.]</title></std-entry>
  <future-entry><doc-id>XYZ0001</doc-id></future-entry>
</rfc-index>"#;

    #[test]
    fn test_parse_sample() {
        let index = RfcIndex::parse(SAMPLE).unwrap();
        assert_eq!(index.rfc.len(), 1);
        assert_eq!(index.rfc_not_issued.len(), 1);
        assert_eq!(index.bcp["BCP0014"].is_also, vec!["RFC2119", "RFC8174"]);
        assert_eq!(index.std["STD0001"].title, "[STD number 1 is retired.]");
        assert_eq!(index.fyi["FYI0001"].is_also, vec!["RFC1150"]);
        assert_eq!(index.len(), 5);

        let rfc = &index.rfc["RFC2119"];
        assert_eq!(rfc.authors, vec!["S. Bradner"]);
        assert_eq!(rfc.current_status, "BEST CURRENT PRACTICE");
        assert_eq!(rfc.updated_by, vec!["RFC8174"]);
    }

    #[test]
    fn test_entry_lookup_ignores_case() {
        let index = RfcIndex::parse(SAMPLE).unwrap();
        assert!(matches!(index.entry("rfc2119"), Some(IndexEntry::Rfc(_))));
        assert!(matches!(index.entry("BCP0014"), Some(IndexEntry::Bcp(_))));
        assert!(matches!(index.entry("rfc0026"), Some(IndexEntry::RfcNotIssued(_))));
        assert!(index.entry("RFC9999").is_none());
    }

    #[test]
    fn test_entry_serializes_without_tag() {
        let index = RfcIndex::parse(SAMPLE).unwrap();
        let json = serde_json::to_value(index.entry("BCP0014").unwrap()).unwrap();
        assert_eq!(json["doc_id"], "BCP0014");
    }

    #[test]
    fn test_wrong_root_is_rejected() {
        let err = RfcIndex::parse(r#"<rfc-index><rfc-entry/></rfc-index>"#).unwrap_err();
        assert!(matches!(err, RfcIndexError::Structure { .. }));
    }

    #[test]
    fn test_empty_index() {
        let index =
            RfcIndex::parse(r#"<rfc-index xmlns="http://www.rfc-editor.org/rfc-index"/>"#).unwrap();
        assert!(index.is_empty());
    }

    #[test]
    fn test_entry_error_propagates() {
        let xml = r#"<rfc-index xmlns="http://www.rfc-editor.org/rfc-index">
                       <bcp-entry><is-also/></bcp-entry></rfc-index>"#;
        let err = RfcIndex::parse(xml).unwrap_err();
        assert_eq!(err.to_string(), "bcp-entry has no <doc-id>");
    }
}
