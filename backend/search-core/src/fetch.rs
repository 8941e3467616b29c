//! HTTP execution with timeouts and typed failures.
//!
//! This is the only blocking point in the core; callers run it from a
//! tokio worker task, never the interactive context. Connection cleanup
//! on every exit path is handled by reqwest dropping the response.

use crate::error::fetch::FetchError;
use crate::query::RequestDescriptor;

use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;
use std::time::Duration;

use log::{debug, warn};
use reqwest::Client;

/// Raw catalog response: status plus undecoded body text. Transient;
/// discarded once parsed.
#[derive(Debug)]
pub struct RawResponse {
    pub status: HttpStatusCode,
    pub body: String,
}

/// Wrapper over a pooled reqwest client with the catalog timeouts applied.
#[derive(Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Build a client enforcing both the connect and the total request
    /// deadline.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if the underlying client cannot be
    /// constructed (TLS backend initialization).
    pub fn new(connect_timeout: Duration, read_timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(read_timeout)
            .build()?;

        Ok(Self { client })
    }

    /// Execute one request.
    ///
    /// Exactly status 200 counts as success; the body of any other status
    /// is dropped unread.
    ///
    /// # Errors
    ///
    /// * [`FetchError::Timeout`] - connect or read deadline exceeded
    /// * [`FetchError::Network`] - DNS, refused connection, interrupted body
    /// * [`FetchError::Status`] - catalog answered with a non-200 status
    pub async fn fetch(&self, request: &RequestDescriptor) -> Result<RawResponse, FetchError> {
        debug!("Fetching {request:?}");

        let response = self.client.get(request.url().clone()).send().await?;

        let status = HttpStatusCode::from(response.status().as_u16());
        if !status.is_ok() {
            warn!("Catalog returned HTTP {status}");
            return Err(FetchError::Status {
                code: status,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let body = response.text().await?;
        debug!("Fetched {} bytes", body.len());

        Ok(RawResponse { status, body })
    }
}
