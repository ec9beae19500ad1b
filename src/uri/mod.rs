//! Typed resource identifiers for Datatracker API endpoints.
//!
//! Every resource kind served by the Datatracker lives under a fixed path
//! prefix (for example `/api/v1/person/person/`). Each kind gets its own
//! identifier type, so a [`PersonUri`] can never be handed to a function that
//! expects a [`DocumentUri`]. The prefix is checked once, at construction.
//!
//! ```
//! use ietfdata_core::uri::{DocumentUri, PersonUri};
//!
//! let doc = DocumentUri::new("/api/v1/doc/document/draft-ietf-avt-rtp-new/").unwrap();
//! assert_eq!(doc.last_segment(), Some("draft-ietf-avt-rtp-new"));
//!
//! assert!(PersonUri::new("/api/v1/doc/document/rfc3550/").is_err());
//! ```
//!
//! Query parameters can be added to an identifier, but its path cannot be
//! swapped for one outside the kind's prefix:
//!
//! ```compile_fail
//! use ietfdata_core::uri::{PersonUri, Uri};
//!
//! let mut person = PersonUri::collection();
//! *person = Uri::parse_reference("/api/v1/doc/document/rfc3550/");
//! ```

mod error;
mod kinds;

use std::collections::BTreeMap;
use std::fmt;

pub use error::UriError;
pub use kinds::*;

/// An untyped endpoint path plus query parameters.
///
/// Parameters are kept sorted by name so that equality and the rendered
/// query string do not depend on insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Uri {
    path: String,
    params: BTreeMap<String, String>,
}

impl Uri {
    /// Builds a `Uri` without any prefix validation.
    pub(crate) fn unchecked(path: String, params: BTreeMap<String, String>) -> Self {
        Self { path, params }
    }

    /// Splits a server-provided reference such as a Tastypie `next` link
    /// (`/api/v1/person/person/?limit=100&offset=100`) into path and parameters.
    #[must_use]
    pub fn parse_reference(reference: &str) -> Self {
        match reference.split_once('?') {
            Some((path, query)) => {
                let params = url::form_urlencoded::parse(query.as_bytes())
                    .map(|(key, value)| (key.into_owned(), value.into_owned()))
                    .collect();
                Self::unchecked(path.to_string(), params)
            }
            None => Self::unchecked(reference.to_string(), BTreeMap::new()),
        }
    }

    /// The endpoint path, always starting with `/api/v1/`.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Query parameters sent with the request.
    #[must_use]
    pub fn params(&self) -> &BTreeMap<String, String> {
        &self.params
    }

    /// Sets (or replaces) one query parameter.
    pub fn set_param(&mut self, name: impl Into<String>, value: impl ToString) {
        self.params.insert(name.into(), value.to_string());
    }

    /// Sets a query parameter only when a value is present.
    pub fn set_opt_param<V: ToString>(&mut self, name: impl Into<String>, value: Option<V>) {
        if let Some(value) = value {
            self.set_param(name, value);
        }
    }

    /// The final non-empty path segment: the slug or numeric id of a single resource.
    #[must_use]
    pub fn last_segment(&self) -> Option<&str> {
        self.path.split('/').filter(|segment| !segment.is_empty()).next_back()
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)?;
        for (index, (name, value)) in self.params.iter().enumerate() {
            let separator = if index == 0 { '?' } else { '&' };
            write!(f, "{separator}{name}={value}")?;
        }
        Ok(())
    }
}

/// Anything that carries mutable query parameters.
///
/// Typed identifiers implement this without exposing their path, so a
/// filter can add parameters but can never move an identifier out of its
/// prefix.
pub trait QueryParams {
    fn set_param(&mut self, name: impl Into<String>, value: impl ToString);

    fn set_opt_param<V: ToString>(&mut self, name: impl Into<String>, value: Option<V>) {
        if let Some(value) = value {
            self.set_param(name, value);
        }
    }
}

impl QueryParams for Uri {
    fn set_param(&mut self, name: impl Into<String>, value: impl ToString) {
        Uri::set_param(self, name, value);
    }
}

/// Behaviour shared by every typed identifier.
pub trait ResourceUri: Clone + fmt::Debug + Send + Sync {
    /// Human-readable kind name used in errors and logs.
    const KIND: &'static str;

    /// Accepted path prefixes for this kind.
    const PREFIXES: &'static [&'static str];

    /// Borrows the underlying path and parameters.
    fn as_uri(&self) -> &Uri;

    /// Consumes the identifier, returning the underlying path and parameters.
    fn into_uri(self) -> Uri;
}

/// Checks `path` against the prefixes declared by `U`.
pub(crate) fn check_prefix<U: ResourceUri>(path: &str) -> Result<(), UriError> {
    if U::PREFIXES.iter().any(|prefix| path.starts_with(prefix)) {
        Ok(())
    } else {
        Err(UriError::invalid_prefix(U::KIND, path, U::PREFIXES))
    }
}

/// Declares a typed identifier with its accepted path prefixes.
macro_rules! resource_uri {
    ($(#[$meta:meta])* $name:ident => [$($prefix:literal),+ $(,)?]) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name($crate::uri::Uri);

        impl $name {
            /// Creates an identifier with no query parameters.
            ///
            /// # Errors
            ///
            /// Returns [`UriError::InvalidPrefix`](crate::uri::UriError::InvalidPrefix)
            /// if `path` does not start with one of this kind's prefixes.
            pub fn new(path: impl Into<String>) -> Result<Self, $crate::uri::UriError> {
                Self::with_params(path, std::collections::BTreeMap::new())
            }

            /// Creates an identifier with the given query parameters.
            ///
            /// # Errors
            ///
            /// Returns [`UriError::InvalidPrefix`](crate::uri::UriError::InvalidPrefix)
            /// if `path` does not start with one of this kind's prefixes.
            pub fn with_params(
                path: impl Into<String>,
                params: std::collections::BTreeMap<String, String>,
            ) -> Result<Self, $crate::uri::UriError> {
                let path = path.into();
                $crate::uri::check_prefix::<Self>(&path)?;
                Ok(Self($crate::uri::Uri::unchecked(path, params)))
            }

            /// The collection endpoint of this kind (its first prefix), with no parameters.
            #[must_use]
            pub fn collection() -> Self {
                let prefixes = <Self as $crate::uri::ResourceUri>::PREFIXES;
                Self($crate::uri::Uri::unchecked(
                    prefixes[0].to_string(),
                    std::collections::BTreeMap::new(),
                ))
            }

            /// Sets (or replaces) one query parameter. The path stays fixed.
            pub fn set_param(&mut self, name: impl Into<String>, value: impl ToString) {
                self.0.set_param(name, value);
            }

            /// Sets a query parameter only when a value is present.
            pub fn set_opt_param<V: ToString>(&mut self, name: impl Into<String>, value: Option<V>) {
                self.0.set_opt_param(name, value);
            }
        }

        impl $crate::uri::ResourceUri for $name {
            const KIND: &'static str = stringify!($name);
            const PREFIXES: &'static [&'static str] = &[$($prefix),+];

            fn as_uri(&self) -> &$crate::uri::Uri {
                &self.0
            }

            fn into_uri(self) -> $crate::uri::Uri {
                self.0
            }
        }

        impl std::ops::Deref for $name {
            type Target = $crate::uri::Uri;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl $crate::uri::QueryParams for $name {
            fn set_param(&mut self, name: impl Into<String>, value: impl ToString) {
                self.0.set_param(name, value);
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.0, f)
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.0.path())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let path = <String as serde::Deserialize>::deserialize(deserializer)?;
                Self::new(path).map_err(serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use resource_uri;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_uri_accepts_matching_prefix() {
        let uri = PersonUri::new("/api/v1/person/person/20209/").unwrap();
        assert_eq!(uri.path(), "/api/v1/person/person/20209/");
        assert!(uri.params().is_empty());
    }

    #[test]
    fn test_typed_uri_rejects_wrong_prefix() {
        let err = DocumentUri::new("/api/v1/group/group/1/").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("DocumentUri"), "kind missing in: {msg}");
        assert!(msg.contains("/api/v1/group/group/1/"), "path missing in: {msg}");
    }

    #[test]
    fn test_typed_uri_with_multiple_prefixes() {
        assert!(PersonUri::new("/api/v1/person/historicalperson/").is_ok());
        assert!(EmailUri::new("/api/v1/person/historicalemail/").is_ok());
        assert!(EmailUri::new("/api/v1/person/alias/").is_err());
    }

    #[test]
    fn test_typed_uri_round_trips_params() {
        let mut params = BTreeMap::new();
        params.insert("acronym".to_string(), "quic".to_string());
        let uri = GroupUri::with_params("/api/v1/group/group/", params.clone()).unwrap();
        assert_eq!(uri.params(), &params);
    }

    #[test]
    fn test_equality_ignores_param_insertion_order() {
        let mut a = PersonUri::new("/api/v1/person/person/").unwrap();
        a.set_param("time__gte", "2019-01-01T00:00:00");
        a.set_param("name__contains", "Perkins");

        let mut b = PersonUri::new("/api/v1/person/person/").unwrap();
        b.set_param("name__contains", "Perkins");
        b.set_param("time__gte", "2019-01-01T00:00:00");

        assert_eq!(a, b);
    }

    #[test]
    fn test_equality_distinguishes_params() {
        let a = PersonUri::new("/api/v1/person/person/").unwrap();
        let mut b = a.clone();
        b.set_param("limit", 100);
        assert_ne!(a, b);
    }

    #[test]
    fn test_params_on_typed_uri_keep_path_and_prefix() {
        fn narrow(uri: &mut impl QueryParams) {
            uri.set_param("limit", 100);
            uri.set_opt_param("name__contains", Some("Perkins"));
        }

        let mut person = PersonUri::collection();
        narrow(&mut person);
        assert_eq!(person.path(), "/api/v1/person/person/");
        assert_eq!(person.params().len(), 2);
        assert!(PersonUri::new(person.path()).is_ok());
    }

    #[test]
    fn test_set_opt_param_skips_none() {
        let mut uri = GroupUri::new("/api/v1/group/group/").unwrap();
        uri.set_opt_param("parent", None::<u64>);
        uri.set_opt_param("state", Some("active"));
        assert_eq!(uri.params().len(), 1);
        assert_eq!(uri.params().get("state").map(String::as_str), Some("active"));
    }

    #[test]
    fn test_collection_endpoints() {
        assert_eq!(GroupUri::collection().path(), "/api/v1/group/group/");
        assert_eq!(PersonUri::collection().path(), "/api/v1/person/person/");
        assert_eq!(PersonUri::historical().path(), "/api/v1/person/historicalperson/");
        assert_eq!(EmailUri::historical().path(), "/api/v1/person/historicalemail/");
        assert!(StreamUri::collection().params().is_empty());
    }

    #[test]
    fn test_last_segment() {
        let uri = DocumentTypeUri::new("/api/v1/name/doctypename/draft/").unwrap();
        assert_eq!(uri.last_segment(), Some("draft"));
        let collection = DocumentTypeUri::new("/api/v1/name/doctypename/").unwrap();
        assert_eq!(collection.last_segment(), Some("doctypename"));
    }

    #[test]
    fn test_parse_reference_splits_query() {
        let uri = Uri::parse_reference("/api/v1/person/person/?limit=100&offset=200&name__contains=a%20b");
        assert_eq!(uri.path(), "/api/v1/person/person/");
        assert_eq!(uri.params().get("offset").map(String::as_str), Some("200"));
        assert_eq!(uri.params().get("name__contains").map(String::as_str), Some("a b"));
    }

    #[test]
    fn test_parse_reference_without_query() {
        let uri = Uri::parse_reference("/api/v1/doc/document/rfc3550/");
        assert_eq!(uri.path(), "/api/v1/doc/document/rfc3550/");
        assert!(uri.params().is_empty());
    }

    #[test]
    fn test_display_renders_sorted_query() {
        let mut uri = MeetingUri::new("/api/v1/meeting/meeting/").unwrap();
        uri.set_param("type", "ietf");
        uri.set_param("date__gte", "2020-01-01");
        assert_eq!(
            uri.to_string(),
            "/api/v1/meeting/meeting/?date__gte=2020-01-01&type=ietf"
        );
    }

    #[test]
    fn test_deserialize_validates_prefix() {
        let ok: GroupUri = serde_json::from_str("\"/api/v1/group/group/1234/\"").unwrap();
        assert_eq!(ok.last_segment(), Some("1234"));

        let bad = serde_json::from_str::<GroupUri>("\"/api/v1/person/person/1/\"");
        assert!(bad.is_err());
    }

    #[test]
    fn test_serialize_emits_path() {
        let uri = StreamUri::new("/api/v1/name/streamname/ietf/").unwrap();
        assert_eq!(
            serde_json::to_string(&uri).unwrap(),
            "\"/api/v1/name/streamname/ietf/\""
        );
    }
}
