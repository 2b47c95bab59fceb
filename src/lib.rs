//! Word-Ripple: a depth-bounded word search across a single site
//!
//! This crate crawls every same-origin page reachable from a seed URL (up to a
//! fixed link depth), fetches each page exactly once, and records whether the
//! page's visible text contains a target word.

pub mod config;
pub mod crawler;
pub mod output;
pub mod state;
pub mod url;

use std::time::Duration;
use thiserror::Error;

/// Main error type for Word-Ripple operations
#[derive(Debug, Error)]
pub enum RippleError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("URL error: {0}")]
    UrlError(#[from] UrlError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid search word: {0}")]
    InvalidWord(String),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Malformed URL: {0}")]
    Malformed(String),
}

/// Failure to retrieve a single page
///
/// These never abort a crawl: the task that hit one reports it to the
/// observer and stops without recording a result.
#[derive(Debug, Clone, Error)]
pub enum NetworkError {
    #[error("Request timeout for {url} after {after:?}")]
    Timeout { url: String, after: Duration },

    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Connection failed for {url}: {message}")]
    Connect { url: String, message: String },

    #[error("Request failed for {url}: {message}")]
    Transport { url: String, message: String },
}

impl NetworkError {
    /// The URL whose fetch failed
    pub fn url(&self) -> &str {
        match self {
            Self::Timeout { url, .. }
            | Self::Status { url, .. }
            | Self::Connect { url, .. }
            | Self::Transport { url, .. } => url,
        }
    }

    /// Returns true if the failure was a timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}

/// Result type alias for Word-Ripple operations
pub type Result<T> = std::result::Result<T, RippleError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{crawl, Coordinator, CrawlSettings};
pub use state::{CrawlResults, VisitRecord};
pub use url::{is_in_scope, normalize_link, parse_seed};
