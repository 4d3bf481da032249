//! JSON over HTTP
//!
//! [`JsonFetcher`] wraps a [`reqwest::Client`] configured with a request
//! timeout and exposes one operation: GET a URL with optional headers and
//! decode the body as JSON into a dynamic [`serde_json::Value`]. Compiled
//! only with the `net` feature (on by default).
//!
//! Construct one fetcher and reuse it; the underlying client pools
//! connections.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use thiserror::Error;
use tracing::debug;

/// Default request timeout when none is given.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors that can occur fetching JSON
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Invalid header '{0}'")]
    InvalidHeader(String),

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Server returned HTTP {0}")]
    Status(u16),

    #[error("Response body is not valid JSON: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Fetches JSON documents over HTTP.
///
/// # Example
/// ```no_run
/// use actionkit_core::net::JsonFetcher;
///
/// # async fn demo() -> Result<(), actionkit_core::net::FetchError> {
/// let fetcher = JsonFetcher::new()?;
/// let value = fetcher.fetch("https://api.example.com/status", &[]).await?;
/// println!("{value}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct JsonFetcher {
    client: Client,
}

impl JsonFetcher {
    /// Create a fetcher with the default 30-second timeout.
    pub fn new() -> Result<Self, FetchError> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a fetcher with a custom request timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// GET `url` and decode the response body as JSON.
    ///
    /// `headers` are `(name, value)` pairs sent verbatim with the request.
    /// Non-2xx responses are an error; the body is not read in that case.
    pub async fn fetch(
        &self,
        url: &str,
        headers: &[(String, String)],
    ) -> Result<serde_json::Value, FetchError> {
        let mut header_map = HeaderMap::new();
        for (name, value) in headers {
            let parsed_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| FetchError::InvalidHeader(name.clone()))?;
            let parsed_value = HeaderValue::from_str(value)
                .map_err(|_| FetchError::InvalidHeader(format!("{name}: {value}")))?;
            header_map.insert(parsed_name, parsed_value);
        }

        debug!(%url, "sending GET request");
        let response = self.client.get(url).headers(header_map).send().await?;

        let status = response.status();
        debug!(status = status.as_u16(), %url, "received response");
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        response.json().await.map_err(FetchError::Decode)
    }
}
