use crate::state::{CrawlResults, VisitRecord};
use std::collections::{HashMap, HashSet};
use std::time::Duration;

/// Shared mutable state of a crawl run
///
/// The visited set and the result map live in one struct so that a single
/// `Mutex<CrawlState>` guards both. Every method is O(1) and none of them
/// may be called while holding the guard across an `.await`.
#[derive(Debug, Default)]
pub struct CrawlState {
    visited: HashSet<String>,
    results: HashMap<String, VisitRecord>,
}

impl CrawlState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims a URL for fetching
    ///
    /// Returns true if the URL was not yet visited (and is now marked), false
    /// if another task already claimed it. Membership is never removed.
    pub fn mark_visited(&mut self, url: &str) -> bool {
        if self.visited.contains(url) {
            return false;
        }
        self.visited.insert(url.to_string())
    }

    /// Number of URLs claimed so far, including failed fetches
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Stores the outcome of a fetched page
    ///
    /// Records are write-once: a second record for the same URL is ignored
    /// and false is returned.
    pub fn record(&mut self, record: VisitRecord) -> bool {
        debug_assert!(self.visited.contains(&record.url));
        if self.results.contains_key(&record.url) {
            return false;
        }
        self.results.insert(record.url.clone(), record);
        true
    }

    /// Number of recorded results
    pub fn result_count(&self) -> usize {
        self.results.len()
    }

    /// Moves the recorded results out, leaving this state empty
    pub fn take_results(&mut self, elapsed: Duration) -> CrawlResults {
        self.visited.clear();
        CrawlResults::new(std::mem::take(&mut self.results), elapsed)
    }
}
