//! HTTP client construction shared by the Datatracker engine and the RFC index fetcher.
//!
//! Centralises timeouts, user-agent and compression so that every request the
//! crate sends looks the same to the server.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::time::Duration;

use reqwest::{Client, ClientBuilder, Proxy};
use tracing::warn;

use super::DatatrackerError;
use crate::user_agent;

/// Default TCP connect timeout.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default whole-request timeout. Large collection pages can be slow to render server-side.
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(60);

/// Settings every client built by this crate shares.
#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub user_agent: String,
    pub connect_timeout: Duration,
    pub read_timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            user_agent: user_agent::default_user_agent(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            read_timeout: DEFAULT_READ_TIMEOUT,
        }
    }
}

/// Builds an HTTP client with the shared settings.
///
/// Some sandboxes panic while reqwest reads the platform proxy configuration.
/// In that case the client is rebuilt with proxies taken from the
/// environment only.
///
/// # Errors
///
/// Returns [`DatatrackerError::ClientBuild`] when client construction fails.
pub fn build_client(settings: &ClientSettings) -> Result<Client, DatatrackerError> {
    let built = guarded_build(|| configured(settings).build()).or_else(|panicked| {
        warn!(%panicked, "proxy discovery panicked, retrying with environment proxies");
        guarded_build(|| with_env_proxies(configured(settings).no_proxy()).build())
    });
    match built {
        Ok(Ok(client)) => Ok(client),
        Ok(Err(error)) => Err(DatatrackerError::client_build(error.to_string())),
        Err(panicked) => Err(DatatrackerError::client_build(panicked)),
    }
}

/// Runs `build`, turning a panic into a description of it.
fn guarded_build(
    build: impl FnOnce() -> reqwest::Result<Client>,
) -> Result<reqwest::Result<Client>, String> {
    catch_unwind(AssertUnwindSafe(build))
        .map_err(|_| "HTTP client construction panicked".to_string())
}

fn configured(settings: &ClientSettings) -> ClientBuilder {
    Client::builder()
        .user_agent(settings.user_agent.as_str())
        .connect_timeout(settings.connect_timeout)
        .timeout(settings.read_timeout)
        .gzip(true)
}

fn with_env_proxies(mut builder: ClientBuilder) -> ClientBuilder {
    if let Some(proxy) = proxy_from_env("https").and_then(|url| Proxy::https(url.as_str()).ok()) {
        builder = builder.proxy(proxy);
    }
    if let Some(proxy) = proxy_from_env("http").and_then(|url| Proxy::http(url.as_str()).ok()) {
        builder = builder.proxy(proxy);
    }
    builder
}

fn proxy_from_env(scheme: &str) -> Option<String> {
    let names: &[&str] = match scheme {
        "https" => &["HTTPS_PROXY", "https_proxy", "ALL_PROXY", "all_proxy"],
        "http" => &["HTTP_PROXY", "http_proxy", "ALL_PROXY", "all_proxy"],
        _ => return None,
    };
    names
        .iter()
        .filter_map(|name| std::env::var(name).ok())
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_use_crate_user_agent() {
        let settings = ClientSettings::default();
        assert!(settings.user_agent.starts_with("ietfdata-rs/"));
        assert_eq!(settings.connect_timeout, DEFAULT_CONNECT_TIMEOUT);
    }

    #[test]
    fn test_build_client_succeeds_with_defaults() {
        assert!(build_client(&ClientSettings::default()).is_ok());
    }

    #[test]
    fn test_unknown_scheme_has_no_proxy() {
        assert_eq!(proxy_from_env("ftp"), None);
    }
}
