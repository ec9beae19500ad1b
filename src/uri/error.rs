//! Error types for identifier construction.

use thiserror::Error;

/// Errors raised while constructing a typed identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UriError {
    /// The path does not belong to the resource kind being constructed.
    #[error("invalid {kind} path '{path}': expected prefix {expected}")]
    InvalidPrefix {
        /// Identifier type name, e.g. `DocumentUri`.
        kind: &'static str,
        /// The rejected path.
        path: String,
        /// Accepted prefixes, joined with " or ".
        expected: String,
    },
}

impl UriError {
    /// Creates an invalid-prefix error.
    pub fn invalid_prefix(kind: &'static str, path: impl Into<String>, prefixes: &[&str]) -> Self {
        Self::InvalidPrefix {
            kind,
            path: path.into(),
            expected: prefixes.join(" or "),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_prefix_lists_all_prefixes() {
        let err = UriError::invalid_prefix(
            "PersonUri",
            "/api/v1/doc/document/",
            &["/api/v1/person/person/", "/api/v1/person/historicalperson/"],
        );
        let msg = err.to_string();
        assert!(msg.contains("/api/v1/person/person/ or /api/v1/person/historicalperson/"));
    }
}
