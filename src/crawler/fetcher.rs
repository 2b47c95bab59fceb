//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler, including:
//! - Building HTTP clients with proper user agent strings
//! - GET requests with a per-request timeout
//! - Error classification into `NetworkError`

use crate::config::UserAgentConfig;
use crate::NetworkError;
use async_trait::async_trait;
use reqwest::{redirect::Policy, Client};
use std::time::Duration;
use url::Url;

/// Maximum number of redirects followed for a single fetch
const MAX_REDIRECTS: usize = 10;

/// Retrieves page bodies for the coordinator
///
/// Implementations must honor `timeout`; the coordinator also enforces it
/// around each call.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches the document at `url`
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The document body of a successful response
    /// * `Err(NetworkError)` - Timeout, transport failure or non-success status
    async fn fetch(&self, url: &Url, timeout: Duration) -> Result<String, NetworkError>;
}

/// Builds an HTTP client configured for crawling
///
/// # Arguments
///
/// * `config` - User agent configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use word_ripple::config::UserAgentConfig;
/// use word_ripple::crawler::build_http_client;
///
/// let client = build_http_client(&UserAgentConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &UserAgentConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.header_value())
        .connect_timeout(Duration::from_secs(10))
        .redirect(Policy::limited(MAX_REDIRECTS))
        .gzip(true)
        .brotli(true)
        .build()
}

/// `PageFetcher` backed by a reqwest `Client`
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds a fetcher with a fresh client for the given user agent
    pub fn from_config(config: &UserAgentConfig) -> Result<Self, reqwest::Error> {
        Ok(Self::new(build_http_client(config)?))
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &Url, timeout: Duration) -> Result<String, NetworkError> {
        fetch_url(&self.client, url, timeout).await
    }
}

/// Fetches a URL and returns its body
///
/// # Error Classification
///
/// | Condition | Result |
/// |-----------|--------|
/// | 2xx | `Ok(body)` |
/// | Any other status | `NetworkError::Status` |
/// | Timeout (request or body) | `NetworkError::Timeout` |
/// | Connection refused / DNS / TLS | `NetworkError::Connect` |
/// | Anything else | `NetworkError::Transport` |
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
/// * `timeout` - Total time allowed for the request, body included
pub async fn fetch_url(client: &Client, url: &Url, timeout: Duration) -> Result<String, NetworkError> {
    let response = client
        .get(url.clone())
        .timeout(timeout)
        .send()
        .await
        .map_err(|e| classify_error(url, e, timeout))?;

    let status = response.status();
    if !status.is_success() {
        return Err(NetworkError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response
        .text()
        .await
        .map_err(|e| classify_error(url, e, timeout))
}

/// Maps a reqwest error onto the `NetworkError` taxonomy
fn classify_error(url: &Url, error: reqwest::Error, timeout: Duration) -> NetworkError {
    if error.is_timeout() {
        NetworkError::Timeout {
            url: url.to_string(),
            after: timeout,
        }
    } else if error.is_connect() {
        NetworkError::Connect {
            url: url.to_string(),
            message: error.to_string(),
        }
    } else if let Some(status) = error.status() {
        NetworkError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        }
    } else {
        NetworkError::Transport {
            url: url.to_string(),
            message: error.to_string(),
        }
    }
}
