//! Error types for Datatracker retrieval.
//!
//! A missing resource is not an error: single-record fetches return
//! `Ok(None)` on HTTP 404. Everything else the engine cannot recover from
//! locally surfaces here, with enough context to say what was being fetched
//! and how far the session had got.

use std::path::PathBuf;

use thiserror::Error;

use crate::uri::UriError;

/// Errors that can occur while talking to the Datatracker.
#[derive(Debug, Error)]
pub enum DatatrackerError {
    /// An identifier failed prefix validation.
    #[error(transparent)]
    Uri(#[from] UriError),

    /// The server answered with a status the engine does not handle.
    #[error("HTTP {status} fetching {url} (request {requests} of this session)")]
    HttpStatus {
        /// Full request URL, including query string.
        url: String,
        /// The HTTP status code.
        status: u16,
        /// Requests sent by this engine so far.
        requests: u64,
    },

    /// A page kept failing with HTTP 500 until the backoff limit was reached.
    #[error(
        "HTTP {status} fetching {url}: giving up after {attempts} attempts (request {requests} of this session)"
    )]
    RetriesExhausted {
        /// Full request URL, including query string.
        url: String,
        /// The last HTTP status code seen.
        status: u16,
        /// Attempts made for this page.
        attempts: u32,
        /// Requests sent by this engine so far.
        requests: u64,
    },

    /// Transport-level failure (DNS, connection refused, TLS, timeout).
    #[error("network error fetching {url}: {source}")]
    Network {
        /// The URL being fetched.
        url: String,
        /// The underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// A 200 response whose body is not the expected JSON.
    #[error("invalid response body from {url}: {source}")]
    InvalidResponse {
        /// The URL being fetched.
        url: String,
        /// The JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// A JSON object that does not match the record schema.
    #[error("cannot decode {kind}: {source}")]
    Decode {
        /// Record kind being decoded.
        kind: &'static str,
        /// The serde error, naming the offending field.
        #[source]
        source: serde_json::Error,
    },

    /// Reading or writing the on-disk cache failed.
    #[error("cache I/O error at {path}: {source}")]
    Cache {
        /// The cache file or directory.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// A caller-supplied argument violates a precondition.
    #[error("invalid {argument}: {reason}")]
    InvalidArgument {
        /// Which argument was rejected.
        argument: &'static str,
        /// What is wrong with it.
        reason: String,
    },

    /// A lookup that must match at most one record matched several.
    #[error("{what} '{name}' matched {matches} records, expected at most one")]
    AmbiguousLookup {
        /// What was being looked up, e.g. `RFC alias`.
        what: &'static str,
        /// The name that was looked up.
        name: String,
        /// How many records matched.
        matches: usize,
    },

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {reason}")]
    ClientBuild {
        /// Why construction failed.
        reason: String,
    },
}

impl DatatrackerError {
    /// Creates an unexpected-status error.
    pub fn http_status(url: impl Into<String>, status: u16, requests: u64) -> Self {
        Self::HttpStatus {
            url: url.into(),
            status,
            requests,
        }
    }

    /// Creates a retries-exhausted error.
    pub fn retries_exhausted(
        url: impl Into<String>,
        status: u16,
        attempts: u32,
        requests: u64,
    ) -> Self {
        Self::RetriesExhausted {
            url: url.into(),
            status,
            attempts,
            requests,
        }
    }

    /// Creates a network error from a reqwest error.
    pub fn network(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Network {
            url: url.into(),
            source,
        }
    }

    /// Creates an invalid-response error.
    pub fn invalid_response(url: impl Into<String>, source: serde_json::Error) -> Self {
        Self::InvalidResponse {
            url: url.into(),
            source,
        }
    }

    /// Creates a decode error for the given record kind.
    pub fn decode(kind: &'static str, source: serde_json::Error) -> Self {
        Self::Decode { kind, source }
    }

    /// Creates a cache IO error.
    pub fn cache(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Cache {
            path: path.into(),
            source,
        }
    }

    /// Creates an invalid-argument error.
    pub fn invalid_argument(argument: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument,
            reason: reason.into(),
        }
    }

    /// Creates an ambiguous-lookup error.
    pub fn ambiguous(what: &'static str, name: impl Into<String>, matches: usize) -> Self {
        Self::AmbiguousLookup {
            what,
            name: name.into(),
            matches,
        }
    }

    /// Creates a client-construction error.
    pub fn client_build(reason: impl Into<String>) -> Self {
        Self::ClientBuild {
            reason: reason.into(),
        }
    }

    /// Whether this is a protocol-level failure of the Datatracker session
    /// (unexpected status, retries exhausted, transport or body failure).
    ///
    /// Callers that want to distinguish "the service is misbehaving" from
    /// "the request or data was wrong" branch on this.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::HttpStatus { .. }
                | Self::RetriesExhausted { .. }
                | Self::Network { .. }
                | Self::InvalidResponse { .. }
        )
    }
}

// No From<reqwest::Error> / From<std::io::Error>: every variant needs the URL
// or path that the source error does not carry.
