//! Crawl summary data and output errors
//!
//! A `CrawlSummary` bundles the results of one run with the run metadata the
//! reports need (seed, word, depth, config hash, generation time).

use crate::output::stats::CrawlStatistics;
use crate::state::{CrawlResults, VisitRecord};
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Parameters a crawl was started with
#[derive(Debug, Clone)]
pub struct RunInfo {
    pub seed: String,
    pub word: String,
    pub max_depth: u32,
    /// SHA-256 of the configuration file, when one was used
    pub config_hash: Option<String>,
}

/// Everything needed to render a report of one crawl
#[derive(Debug, Clone)]
pub struct CrawlSummary {
    pub run: RunInfo,
    pub generated_at: DateTime<Utc>,
    pub statistics: CrawlStatistics,
    /// Records ordered by URL
    pub records: Vec<VisitRecord>,
}

impl CrawlSummary {
    pub fn new(run: RunInfo, results: &CrawlResults) -> Self {
        Self {
            run,
            generated_at: Utc::now(),
            statistics: CrawlStatistics::from_results(results),
            records: results.sorted().into_iter().cloned().collect(),
        }
    }

    /// URLs whose text contained the word, in URL order
    pub fn matched_urls(&self) -> impl Iterator<Item = &str> {
        self.records
            .iter()
            .filter(|record| record.matched)
            .map(|record| record.url.as_str())
    }
}
