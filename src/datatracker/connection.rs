//! Request accounting and connection cycling.
//!
//! Long crawls of the Datatracker hold a pooled connection open for a very
//! long time, and the server side is known to stall such connections. The
//! engine therefore counts every request it sends and throws away its HTTP
//! client (and with it every pooled connection) after each block of
//! [`CYCLE_EVERY`] requests, before the next one goes out. The client is also
//! rebuilt before retrying a page that failed with HTTP 500.
//!
//! Cache hits never reach this module, so they do not advance the count.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

use reqwest::Client;
use tracing::{debug, instrument};

use super::DatatrackerError;
use super::http_client::{ClientSettings, build_client};

/// Number of requests sent on one client before it is replaced.
pub const CYCLE_EVERY: u64 = 100;

/// Owns the engine's HTTP client and its request counter.
#[derive(Debug)]
pub(crate) struct ConnectionManager {
    settings: ClientSettings,
    client: Mutex<Client>,
    requests: AtomicU64,
    cycles: AtomicU64,
}

/// A client to send one request with, and that request's sequence number.
pub(crate) struct Ticket {
    pub client: Client,
    pub request: u64,
}

impl ConnectionManager {
    pub(crate) fn new(settings: ClientSettings) -> Result<Self, DatatrackerError> {
        let client = build_client(&settings)?;
        Ok(Self {
            settings,
            client: Mutex::new(client),
            requests: AtomicU64::new(0),
            cycles: AtomicU64::new(0),
        })
    }

    /// Accounts for one outgoing request.
    ///
    /// Request `100·k + 1` is sent on a freshly built client.
    #[instrument(level = "trace", skip(self))]
    pub(crate) fn acquire(&self) -> Result<Ticket, DatatrackerError> {
        let previous = self.requests.fetch_add(1, Ordering::SeqCst);
        if previous > 0 && previous % CYCLE_EVERY == 0 {
            debug!(requests = previous, "request limit for this connection reached");
            self.cycle()?;
        }
        Ok(Ticket {
            client: self.current(),
            request: previous + 1,
        })
    }

    /// Replaces the HTTP client, dropping its pooled connections.
    pub(crate) fn cycle(&self) -> Result<(), DatatrackerError> {
        let fresh = build_client(&self.settings)?;
        *self.client.lock().unwrap_or_else(PoisonError::into_inner) = fresh;
        let cycles = self.cycles.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(cycles, "connection cycled");
        Ok(())
    }

    pub(crate) fn requests(&self) -> u64 {
        self.requests.load(Ordering::SeqCst)
    }

    pub(crate) fn cycles(&self) -> u64 {
        self.cycles.load(Ordering::SeqCst)
    }

    // Client is reference-counted internally; the clone shares the pool.
    fn current(&self) -> Client {
        self.client
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
