//! Typed access to IETF data
//!
//! This library wraps the IETF Datatracker REST API and the RFC Editor's
//! `rfc-index.xml` behind typed records and identifiers.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`uri`] - Typed resource identifiers, one per Datatracker resource kind
//! - [`records`] - Records decoded from Datatracker JSON
//! - [`datatracker`] - Retrieval engine: caching, pagination, retry, connection cycling
//! - [`catalog`] - Endpoint-specific accessors and their filters
//! - [`rfcindex`] - Parser and fetcher for the RFC index

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;
pub mod datatracker;
pub mod records;
pub mod rfcindex;
pub mod uri;
mod user_agent;

// Re-export commonly used types
pub use catalog::{
    DocumentEventFilter, DocumentFilter, EmailFilter, GroupFilter, MeetingFilter, PeopleFilter,
    SubmissionFilter,
};
pub use datatracker::{
    BackoffPolicy, DataTracker, DataTrackerConfig, DatatrackerError, RecordStream, RetryDecision,
};
pub use records::{Document, Group, Meeting, Person, Resource};
pub use rfcindex::{RfcEntry, RfcIndex, RfcIndexError};
pub use uri::{QueryParams, ResourceUri, Uri, UriError};
