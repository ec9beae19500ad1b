//! Error types for fetching and parsing the RFC index.

use thiserror::Error;

/// Errors that can occur while loading `rfc-index.xml`.
#[derive(Debug, Error)]
pub enum RfcIndexError {
    /// Transport-level failure.
    #[error("network error fetching {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with something other than 200.
    #[error("HTTP {status} fetching {url}")]
    HttpStatus { url: String, status: u16 },

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {reason}")]
    ClientBuild { reason: String },

    /// The document is not well-formed XML.
    #[error("malformed RFC index XML: {source}")]
    Xml {
        #[source]
        source: quick_xml::Error,
    },

    /// Well-formed XML that is not shaped like an RFC index.
    #[error("unexpected RFC index structure: {reason}")]
    Structure { reason: String },

    /// An entry lacks a child element it cannot do without.
    #[error("{entry} has no <{element}>")]
    MissingElement {
        /// The entry, named by its doc-id when known.
        entry: String,
        element: &'static str,
    },

    /// A numeric element holds something that is not a number.
    #[error("{entry}: <{element}> is not a number: '{value}'")]
    InvalidNumber {
        entry: String,
        element: &'static str,
        value: String,
    },
}

impl RfcIndexError {
    pub fn network(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Network {
            url: url.into(),
            source,
        }
    }

    pub fn http_status(url: impl Into<String>, status: u16) -> Self {
        Self::HttpStatus {
            url: url.into(),
            status,
        }
    }

    pub fn client_build(reason: impl Into<String>) -> Self {
        Self::ClientBuild {
            reason: reason.into(),
        }
    }

    pub fn xml(source: quick_xml::Error) -> Self {
        Self::Xml { source }
    }

    pub fn structure(reason: impl Into<String>) -> Self {
        Self::Structure {
            reason: reason.into(),
        }
    }

    pub fn missing(entry: impl Into<String>, element: &'static str) -> Self {
        Self::MissingElement {
            entry: entry.into(),
            element,
        }
    }

    pub fn invalid_number(
        entry: impl Into<String>,
        element: &'static str,
        value: impl Into<String>,
    ) -> Self {
        Self::InvalidNumber {
            entry: entry.into(),
            element,
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_element_names_entry_and_element() {
        let err = RfcIndexError::missing("RFC3550", "title");
        assert_eq!(err.to_string(), "RFC3550 has no <title>");
    }

    #[test]
    fn test_invalid_number_message() {
        let err = RfcIndexError::invalid_number("RFC1149", "year", "nineteen-ninety");
        let msg = err.to_string();
        assert!(msg.contains("RFC1149"));
        assert!(msg.contains("<year>"));
        assert!(msg.contains("nineteen-ninety"));
    }
}
