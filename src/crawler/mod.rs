//! Crawler module for page fetching and word search
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching with a per-request timeout
//! - HTML text and link extraction
//! - Progress and failure reporting
//! - Overall crawl coordination and completion tracking

mod coordinator;
mod fetcher;
mod observer;
mod parser;

pub use coordinator::{Coordinator, CrawlSettings};
pub use fetcher::{build_http_client, fetch_url, HttpFetcher, PageFetcher};
pub use observer::{CrawlObserver, TracingObserver};
pub use parser::{parse_html, ContentExtractor, ExtractedPage, HtmlExtractor};

use crate::config::Config;
use crate::state::CrawlResults;
use crate::url::parse_seed;
use crate::RippleError;

/// Runs a complete crawl over HTTP with default settings
///
/// This is the simplest entry point. It will:
/// 1. Parse and validate the seed URL
/// 2. Build the HTTP client
/// 3. Crawl same-origin pages up to `max_depth`
/// 4. Return the completed result set
///
/// # Arguments
///
/// * `seed` - Absolute HTTP(S) URL to start from
/// * `word` - Word to search for, case-insensitively; must not be blank
/// * `max_depth` - Deepest link level fetched, counting the seed as 1
///
/// # Returns
///
/// * `Ok(CrawlResults)` - Crawl completed (individual fetch failures are not errors)
/// * `Err(RippleError)` - Invalid seed, word or depth, or the client could not be built
///
/// # Example
///
/// ```no_run
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let results = word_ripple::crawl("https://example.com", "rust", 3).await?;
/// for record in results.sorted() {
///     println!("{}: {}", record.url, record.matched);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn crawl(seed: &str, word: &str, max_depth: u32) -> Result<CrawlResults, RippleError> {
    let seed = parse_seed(seed)?;

    if word.trim().is_empty() {
        return Err(RippleError::InvalidWord(
            "search word cannot be empty".to_string(),
        ));
    }

    let mut config = Config::default();
    config.crawler.max_depth = max_depth;
    crate::config::validate(&config)?;

    let coordinator = Coordinator::new(&config)?;
    Ok(coordinator.crawl(&seed, word.trim()).await)
}
