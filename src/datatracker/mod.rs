//! The Datatracker retrieval engine.
//!
//! [`DataTracker`] turns typed identifiers into typed records. It owns one
//! HTTP client, a request counter, and an optional on-disk cache. Single
//! records come back as `Option<R>` (`None` on HTTP 404); collections come
//! back as a lazy [`RecordStream`] that follows the server's `next` links one
//! page at a time.
//!
//! The catalog of endpoint-specific accessors (`person`, `documents`,
//! `group_from_acronym`, ...) lives in [`crate::catalog`] as further `impl`
//! blocks on [`DataTracker`].
//!
//! # Example
//!
//! ```no_run
//! use futures_util::TryStreamExt;
//! use ietfdata_core::datatracker::DataTracker;
//! use ietfdata_core::uri::PersonUri;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let dt = DataTracker::new(None)?;
//!
//! let person = dt.person(&PersonUri::new("/api/v1/person/person/20209/")?).await?;
//! println!("{:?}", person.map(|p| p.name));
//!
//! let mut streams = dt.streams();
//! while let Some(stream) = streams.try_next().await? {
//!     println!("{}", stream.name);
//! }
//! # Ok(())
//! # }
//! ```

mod cache;
mod connection;
mod error;
pub mod http_client;
pub mod retry;

use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::time::Duration;

use futures_util::StreamExt;
use futures_util::stream::{self, BoxStream};
use reqwest::StatusCode;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};
use url::Url;

use crate::records::Resource;
use crate::uri::{ResourceUri, Uri};

use cache::Cache;
use connection::ConnectionManager;
pub use connection::CYCLE_EVERY;
pub use error::DatatrackerError;
use http_client::ClientSettings;
pub use retry::{BackoffPolicy, RetryDecision};

/// Production Datatracker origin.
pub const DEFAULT_BASE_URL: &str = "https://datatracker.ietf.org";

/// Page size requested for every collection fetch.
pub const PAGE_SIZE: u32 = 100;

/// A lazily fetched sequence of records.
///
/// Pages are requested only when the consumer polls past the records already
/// buffered; dropping the stream stops all further requests.
pub type RecordStream<'a, R> = BoxStream<'a, Result<R, DatatrackerError>>;

/// Engine configuration.
#[derive(Debug, Clone)]
pub struct DataTrackerConfig {
    /// Origin to send requests to, e.g. `https://datatracker.ietf.org`.
    pub base_url: String,
    /// Root of the on-disk cache; `None` disables caching.
    pub cache_dir: Option<PathBuf>,
    /// Backoff for collection pages that fail with HTTP 500.
    pub backoff: BackoffPolicy,
    pub connect_timeout: Duration,
    pub read_timeout: Duration,
}

impl Default for DataTrackerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            cache_dir: None,
            backoff: BackoffPolicy::default(),
            connect_timeout: http_client::DEFAULT_CONNECT_TIMEOUT,
            read_timeout: http_client::DEFAULT_READ_TIMEOUT,
        }
    }
}

/// A typed client for the IETF Datatracker.
#[derive(Debug)]
pub struct DataTracker {
    base_url: Url,
    cache: Option<Cache>,
    backoff: BackoffPolicy,
    connections: ConnectionManager,
}

/// One `{ meta, objects }` page of a collection.
#[derive(Debug, Deserialize)]
struct Envelope {
    meta: EnvelopeMeta,
    objects: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct EnvelopeMeta {
    next: Option<String>,
}

/// Cursor over a collection: the page still to fetch and the objects not yet yielded.
struct PageCursor {
    next: Option<Uri>,
    pending: VecDeque<Value>,
}

/// A response to one GET, with the context needed to report on it.
struct Fetched {
    url: String,
    request: u64,
    response: reqwest::Response,
}

impl Fetched {
    fn status(&self) -> StatusCode {
        self.response.status()
    }

    async fn json<T: DeserializeOwned>(self) -> Result<T, DatatrackerError> {
        let Self { url, response, .. } = self;
        let body = response
            .bytes()
            .await
            .map_err(|e| DatatrackerError::network(url.as_str(), e))?;
        serde_json::from_slice(&body).map_err(|e| DatatrackerError::invalid_response(url, e))
    }
}

impl DataTracker {
    /// Connects to the production Datatracker, optionally caching under `cache_dir`.
    ///
    /// # Errors
    ///
    /// Returns [`DatatrackerError::ClientBuild`] if the HTTP client cannot be built.
    pub fn new(cache_dir: Option<PathBuf>) -> Result<Self, DatatrackerError> {
        Self::with_config(DataTrackerConfig {
            cache_dir,
            ..DataTrackerConfig::default()
        })
    }

    /// Builds an engine from explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`DatatrackerError::InvalidArgument`] for an unparseable base
    /// URL and [`DatatrackerError::ClientBuild`] if the HTTP client cannot be built.
    pub fn with_config(config: DataTrackerConfig) -> Result<Self, DatatrackerError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| DatatrackerError::invalid_argument("base URL", format!("{}: {e}", config.base_url)))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(DatatrackerError::invalid_argument(
                "base URL",
                format!("{}: scheme must be http or https", config.base_url),
            ));
        }

        let settings = ClientSettings {
            connect_timeout: config.connect_timeout,
            read_timeout: config.read_timeout,
            ..ClientSettings::default()
        };
        let connections = ConnectionManager::new(settings)?;

        if let Some(dir) = &config.cache_dir {
            info!(cache_dir = %dir.display(), "caching Datatracker responses");
        }
        Ok(Self {
            base_url,
            cache: config.cache_dir.map(Cache::new),
            backoff: config.backoff,
            connections,
        })
    }

    /// Requests sent so far. Cache hits are not counted.
    #[must_use]
    pub fn request_count(&self) -> u64 {
        self.connections.requests()
    }

    /// How many times the HTTP client has been replaced.
    #[must_use]
    pub fn connection_cycles(&self) -> u64 {
        self.connections.cycles()
    }

    #[must_use]
    pub fn cache_dir(&self) -> Option<&Path> {
        self.cache.as_ref().map(Cache::root)
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetches one record.
    ///
    /// A cached copy is returned without touching the network. Otherwise the
    /// record is fetched, cached, and decoded. HTTP 404 yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Any status other than 200 or 404 is returned as
    /// [`DatatrackerError::HttpStatus`] without retrying. Transport, body,
    /// decode and cache failures are returned as their own variants.
    #[instrument(skip_all, fields(kind = R::KIND, uri = %uri.as_uri()))]
    pub async fn retrieve<R: Resource>(&self, uri: &R::Uri) -> Result<Option<R>, DatatrackerError> {
        let uri = uri.as_uri();
        if let Some(cache) = &self.cache
            && let Some(value) = cache.load(uri).await?
        {
            debug!("served from cache");
            return decode::<R>(&value).map(Some);
        }

        let fetched = self.get(uri).await?;
        match fetched.status() {
            StatusCode::OK => {
                let value: Value = fetched.json().await?;
                if let Some(cache) = &self.cache {
                    cache.store(uri, &value).await?;
                }
                decode::<R>(&value).map(Some)
            }
            StatusCode::NOT_FOUND => {
                debug!("not found");
                Ok(None)
            }
            status => Err(DatatrackerError::http_status(
                fetched.url,
                status.as_u16(),
                fetched.request,
            )),
        }
    }

    /// Fetches every record of a collection, following `next` links.
    ///
    /// `limit` is forced to [`PAGE_SIZE`]. Each record is cached under its own
    /// `resource_uri` as it is yielded. A page answered with HTTP 500 is
    /// retried under the engine's [`BackoffPolicy`], cycling the connection
    /// before each retry.
    pub fn retrieve_multi<R: Resource>(&self, uri: R::Uri) -> RecordStream<'_, R> {
        let mut first = uri.into_uri();
        first.set_param("limit", PAGE_SIZE);
        debug!(kind = R::KIND, uri = %first, "starting collection fetch");

        let cursor = PageCursor {
            next: Some(first),
            pending: VecDeque::new(),
        };
        stream::try_unfold(cursor, move |cursor| self.next_record::<R>(cursor)).boxed()
    }

    async fn next_record<R: Resource>(
        &self,
        mut cursor: PageCursor,
    ) -> Result<Option<(R, PageCursor)>, DatatrackerError> {
        loop {
            if let Some(value) = cursor.pending.pop_front() {
                let record = self.accept::<R>(value).await?;
                return Ok(Some((record, cursor)));
            }
            let Some(page) = cursor.next.take() else {
                return Ok(None);
            };
            let envelope = self.fetch_page(&page).await?;
            cursor.pending = envelope.objects.into();
            cursor.next = envelope
                .meta
                .next
                .as_deref()
                .map(Uri::parse_reference);
        }
    }

    /// Decodes one collection object and caches it under its own identifier.
    async fn accept<R: Resource>(&self, value: Value) -> Result<R, DatatrackerError> {
        let record = decode::<R>(&value)?;
        if let Some(cache) = &self.cache {
            cache.store(record.resource_uri().as_uri(), &value).await?;
        }
        Ok(record)
    }

    #[instrument(skip(self), fields(uri = %uri))]
    async fn fetch_page(&self, uri: &Uri) -> Result<Envelope, DatatrackerError> {
        let mut attempt = 0;
        loop {
            attempt += 1;
            let fetched = self.get(uri).await?;
            match fetched.status() {
                StatusCode::OK => return fetched.json().await,
                StatusCode::INTERNAL_SERVER_ERROR => match self.backoff.should_retry(attempt) {
                    RetryDecision::Retry { delay, .. } => {
                        warn!(
                            url = %fetched.url,
                            attempt,
                            delay_ms = delay.as_millis(),
                            "server error, retrying page"
                        );
                        self.connections.cycle()?;
                        tokio::time::sleep(delay).await;
                    }
                    RetryDecision::DoNotRetry { reason } => {
                        warn!(url = %fetched.url, attempt, %reason, "giving up on page");
                        return Err(DatatrackerError::retries_exhausted(
                            fetched.url,
                            StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
                            attempt,
                            self.request_count(),
                        ));
                    }
                },
                status => {
                    return Err(DatatrackerError::http_status(
                        fetched.url,
                        status.as_u16(),
                        fetched.request,
                    ));
                }
            }
        }
    }

    /// Sends one GET for `uri`.
    async fn get(&self, uri: &Uri) -> Result<Fetched, DatatrackerError> {
        let url = self.request_url(uri)?;
        let ticket = self.connections.acquire()?;
        debug!(%url, request = ticket.request, "GET");

        let response = ticket
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| DatatrackerError::network(url.as_str(), e))?;
        Ok(Fetched {
            url: url.into(),
            request: ticket.request,
            response,
        })
    }

    fn request_url(&self, uri: &Uri) -> Result<Url, DatatrackerError> {
        let mut url = self
            .base_url
            .join(uri.path())
            .map_err(|e| DatatrackerError::invalid_argument("resource path", format!("{}: {e}", uri.path())))?;
        if !uri.params().is_empty() {
            url.query_pairs_mut().extend_pairs(uri.params());
        }
        Ok(url)
    }
}

fn decode<R: Resource>(value: &Value) -> Result<R, DatatrackerError> {
    R::deserialize(value).map_err(|e| DatatrackerError::decode(R::KIND, e))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::uri::PersonUri;

    #[test]
    fn test_default_config() {
        let config = DataTrackerConfig::default();
        assert_eq!(config.base_url, "https://datatracker.ietf.org");
        assert!(config.cache_dir.is_none());
        assert_eq!(config.backoff, BackoffPolicy::default());
    }

    #[test]
    fn test_with_config_rejects_bad_base_url() {
        let result = DataTracker::with_config(DataTrackerConfig {
            base_url: "not a url".to_string(),
            ..DataTrackerConfig::default()
        });
        assert!(matches!(result, Err(DatatrackerError::InvalidArgument { .. })));

        let result = DataTracker::with_config(DataTrackerConfig {
            base_url: "ftp://datatracker.ietf.org".to_string(),
            ..DataTrackerConfig::default()
        });
        assert!(matches!(result, Err(DatatrackerError::InvalidArgument { .. })));
    }

    #[test]
    fn test_request_url_appends_sorted_query() {
        let dt = DataTracker::new(None).unwrap();
        let mut uri = PersonUri::new("/api/v1/person/person/").unwrap();
        uri.set_param("name__contains", "Colin Perkins");
        uri.set_param("limit", 100);
        let url = dt.request_url(uri.as_uri()).unwrap();
        assert_eq!(
            url.as_str(),
            "https://datatracker.ietf.org/api/v1/person/person/?limit=100&name__contains=Colin+Perkins"
        );
    }

    #[test]
    fn test_request_url_without_params_has_no_query() {
        let dt = DataTracker::new(None).unwrap();
        let uri = PersonUri::new("/api/v1/person/person/20209/").unwrap();
        let url = dt.request_url(uri.as_uri()).unwrap();
        assert_eq!(url.query(), None);
    }

    #[test]
    fn test_fresh_engine_has_sent_nothing() {
        let dt = DataTracker::new(Some(PathBuf::from("/tmp/ietfdata-cache"))).unwrap();
        assert_eq!(dt.request_count(), 0);
        assert_eq!(dt.connection_cycles(), 0);
        assert_eq!(dt.cache_dir(), Some(Path::new("/tmp/ietfdata-cache")));
    }

    #[test]
    fn test_envelope_decodes_last_page() {
        let envelope: Envelope = serde_json::from_str(
            r#"{"meta": {"limit": 100, "next": null, "offset": 0, "total_count": 1}, "objects": [{}]}"#,
        )
        .unwrap();
        assert!(envelope.meta.next.is_none());
        assert_eq!(envelope.objects.len(), 1);
    }
}
