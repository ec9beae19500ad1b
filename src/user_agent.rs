//! The User-Agent every request from this crate carries.
//!
//! Identifies the library and where to report problems, so operators of the
//! Datatracker and the RFC Editor site can tell its traffic apart (RFC 9308).

/// Project URL for User-Agent identification.
const PROJECT_UA_URL: &str = "https://github.com/glasgow-ipl/ietfdata";

/// Default User-Agent: `ietfdata-rs/<version> (+<project url>)`.
#[must_use]
pub(crate) fn default_user_agent() -> String {
    let version = env!("CARGO_PKG_VERSION");
    format!("ietfdata-rs/{version} (+{PROJECT_UA_URL})")
}
