//! On-disk cache of raw Datatracker JSON objects.
//!
//! One file per resource path: `/api/v1/person/person/20209/` is stored at
//! `<root>/api/v1/person/person/20209.json`. Entries never expire. Query
//! parameters are not part of the key.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use serde_json::Value;
use tracing::{debug, trace, warn};

use super::DatatrackerError;
use crate::uri::Uri;

// Distinguishes temporary files written concurrently by one process.
static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// A cache rooted at one directory.
#[derive(Debug, Clone)]
pub(crate) struct Cache {
    root: PathBuf,
}

impl Cache {
    pub(crate) fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub(crate) fn root(&self) -> &Path {
        &self.root
    }

    /// File that holds the entry for `uri`, or `None` if the path cannot be
    /// mapped safely (empty, `.`/`..` or empty segments).
    pub(crate) fn path_for(&self, uri: &Uri) -> Option<PathBuf> {
        let trimmed = uri.path().strip_prefix('/')?;
        let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);
        if trimmed.is_empty() {
            return None;
        }
        let safe = trimmed
            .split('/')
            .all(|segment| !segment.is_empty() && segment != "." && segment != "..");
        if !safe {
            return None;
        }
        Some(self.root.join(format!("{trimmed}.json")))
    }

    /// Reads the entry for `uri`.
    ///
    /// A missing entry is `Ok(None)`. An entry that is not valid JSON is
    /// logged and treated as missing, so the next successful fetch replaces it.
    pub(crate) async fn load(&self, uri: &Uri) -> Result<Option<Value>, DatatrackerError> {
        let Some(path) = self.path_for(uri) else {
            return Ok(None);
        };
        match tokio::fs::read(&path).await {
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(value) => {
                    trace!(path = %path.display(), "cache hit");
                    Ok(Some(value))
                }
                Err(error) => {
                    warn!(path = %path.display(), %error, "ignoring corrupt cache entry");
                    Ok(None)
                }
            },
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(error) => Err(DatatrackerError::cache(path, error)),
        }
    }

    /// Writes the entry for `uri`.
    ///
    /// The payload goes to a temporary sibling first and is renamed into
    /// place, so readers never see a half-written file.
    pub(crate) async fn store(&self, uri: &Uri, value: &Value) -> Result<(), DatatrackerError> {
        let Some(path) = self.path_for(uri) else {
            debug!(uri = %uri, "not caching unmappable path");
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| DatatrackerError::cache(parent, e))?;
        }

        let temp = temp_path(&path);
        tokio::fs::write(&temp, value.to_string())
            .await
            .map_err(|e| DatatrackerError::cache(&temp, e))?;
        if let Err(error) = tokio::fs::rename(&temp, &path).await {
            let _ = tokio::fs::remove_file(&temp).await;
            return Err(DatatrackerError::cache(&path, error));
        }
        trace!(path = %path.display(), "cached");
        Ok(())
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let mut name = path.as_os_str().to_owned();
    name.push(format!(".{}.{counter}.tmp", std::process::id()));
    PathBuf::from(name)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn uri(path: &str) -> Uri {
        Uri::parse_reference(path)
    }

    #[test]
    fn test_path_for_strips_slashes() {
        let cache = Cache::new("/cache");
        assert_eq!(
            cache.path_for(&uri("/api/v1/person/person/20209/")),
            Some(PathBuf::from("/cache/api/v1/person/person/20209.json"))
        );
    }

    #[test]
    fn test_path_for_ignores_params() {
        let cache = Cache::new("/cache");
        assert_eq!(
            cache.path_for(&uri("/api/v1/doc/document/?limit=100")),
            cache.path_for(&uri("/api/v1/doc/document/"))
        );
    }

    #[test]
    fn test_path_for_rejects_traversal_and_empty_segments() {
        let cache = Cache::new("/cache");
        assert_eq!(cache.path_for(&uri("/api/v1/../../etc/passwd/")), None);
        assert_eq!(cache.path_for(&uri("/api/v1//person/")), None);
        assert_eq!(cache.path_for(&uri("/")), None);
        assert_eq!(cache.path_for(&uri("api/v1/person/")), None);
    }

    #[test]
    fn test_path_for_keeps_email_segment() {
        let cache = Cache::new("/cache");
        assert_eq!(
            cache.path_for(&uri("/api/v1/person/email/csp@csperkins.org/")),
            Some(PathBuf::from("/cache/api/v1/person/email/csp@csperkins.org.json"))
        );
    }

    #[tokio::test]
    async fn test_store_then_load() {
        let dir = TempDir::new().unwrap();
        let cache = Cache::new(dir.path());
        let key = uri("/api/v1/name/streamname/ietf/");
        let value = json!({"slug": "ietf", "name": "IETF"});

        assert_eq!(cache.load(&key).await.unwrap(), None);
        cache.store(&key, &value).await.unwrap();
        assert_eq!(cache.load(&key).await.unwrap(), Some(value));

        let on_disk = dir.path().join("api/v1/name/streamname/ietf.json");
        assert!(on_disk.is_file());
    }

    #[tokio::test]
    async fn test_store_leaves_no_temp_files() {
        let dir = TempDir::new().unwrap();
        let cache = Cache::new(dir.path());
        cache
            .store(&uri("/api/v1/doc/document/rfc3550/"), &json!({"id": 1}))
            .await
            .unwrap();
        let entries: Vec<_> = std::fs::read_dir(dir.path().join("api/v1/doc/document"))
            .unwrap()
            .map(|entry| entry.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(entries, vec!["rfc3550.json".to_string()]);
    }

    #[tokio::test]
    async fn test_corrupt_entry_is_a_miss() {
        let dir = TempDir::new().unwrap();
        let cache = Cache::new(dir.path());
        let key = uri("/api/v1/doc/document/rfc3550/");
        let path = cache.path_for(&key).unwrap();
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, b"{ truncated").unwrap();

        assert_eq!(cache.load(&key).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_unmappable_path_is_not_stored() {
        let dir = TempDir::new().unwrap();
        let cache = Cache::new(dir.path());
        cache.store(&uri("/api/v1/../x/"), &json!({})).await.unwrap();
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
