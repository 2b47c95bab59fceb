//! Observability hooks for crawl progress
//!
//! The coordinator reports every page it starts fetching and every fetch
//! that fails. Observers are for operator visibility only; they cannot
//! influence the traversal.

use crate::NetworkError;
use url::Url;

/// Receives progress and failure events from a running crawl
///
/// Methods are called concurrently from many tasks and must not block.
pub trait CrawlObserver: Send + Sync {
    /// A page at `depth` was claimed and is about to be fetched
    fn on_visit(&self, url: &Url, depth: u32);

    /// Fetching `url` failed; the page will not appear in the results
    fn on_error(&self, url: &Url, error: &NetworkError);
}

/// Default observer that forwards events to `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl CrawlObserver for TracingObserver {
    fn on_visit(&self, url: &Url, depth: u32) {
        tracing::info!("Searching {} (depth {})", url, depth);
    }

    fn on_error(&self, url: &Url, error: &NetworkError) {
        tracing::warn!("Failed to fetch {}: {}", url, error);
    }
}
