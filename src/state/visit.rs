use std::collections::HashMap;
use std::time::Duration;

/// Outcome of fetching and searching a single page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitRecord {
    /// Canonical URL of the page
    pub url: String,

    /// Link depth the page was reached at (the seed is depth 1)
    pub depth: u32,

    /// Whether the page's visible text contains the target word
    pub matched: bool,
}

/// Completed result set of one crawl run
///
/// Holds exactly one record per URL that was fetched successfully. Pages
/// whose fetch failed are absent.
#[derive(Debug, Clone, Default)]
pub struct CrawlResults {
    records: HashMap<String, VisitRecord>,
    elapsed: Duration,
}

impl CrawlResults {
    pub(crate) fn new(records: HashMap<String, VisitRecord>, elapsed: Duration) -> Self {
        Self { records, elapsed }
    }

    /// Returns the match result for a URL, or `None` if it was not fetched
    pub fn get(&self, url: &str) -> Option<bool> {
        self.records.get(url).map(|record| record.matched)
    }

    /// Returns the full record for a URL
    pub fn record(&self, url: &str) -> Option<&VisitRecord> {
        self.records.get(url)
    }

    /// Returns true if the URL was fetched successfully
    pub fn contains(&self, url: &str) -> bool {
        self.records.contains_key(url)
    }

    /// Number of pages fetched successfully
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of pages whose text contained the word
    pub fn matched_count(&self) -> usize {
        self.records.values().filter(|record| record.matched).count()
    }

    /// Wall-clock duration of the crawl
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Iterates over records in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &VisitRecord> {
        self.records.values()
    }

    /// Records ordered by URL
    pub fn sorted(&self) -> Vec<&VisitRecord> {
        let mut records: Vec<_> = self.records.values().collect();
        records.sort_by(|a, b| a.url.cmp(&b.url));
        records
    }

    /// Plain URL to match-result mapping
    pub fn to_map(&self) -> HashMap<String, bool> {
        self.records
            .iter()
            .map(|(url, record)| (url.clone(), record.matched))
            .collect()
    }
}
