//! Statistics derived from a completed crawl
//!
//! This module provides functionality for summarizing a result set and
//! displaying the summary on the console.

use crate::state::CrawlResults;
use std::collections::BTreeMap;
use std::time::Duration;

/// Crawl statistics summary
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CrawlStatistics {
    /// Pages fetched successfully
    pub pages_fetched: u64,

    /// Pages whose text contained the word
    pub pages_matched: u64,

    /// Pages fetched per depth level
    pub depth_breakdown: BTreeMap<u32, u64>,

    /// Total wall-clock time of the crawl
    pub elapsed: Duration,
}

impl CrawlStatistics {
    /// Computes statistics from a result set
    pub fn from_results(results: &CrawlResults) -> Self {
        let mut depth_breakdown = BTreeMap::new();
        for record in results.iter() {
            *depth_breakdown.entry(record.depth).or_insert(0) += 1;
        }

        Self {
            pages_fetched: results.len() as u64,
            pages_matched: results.matched_count() as u64,
            depth_breakdown,
            elapsed: results.elapsed(),
        }
    }

    /// Percentage of fetched pages that matched
    pub fn match_rate(&self) -> f64 {
        if self.pages_fetched == 0 {
            0.0
        } else {
            (self.pages_matched as f64 / self.pages_fetched as f64) * 100.0
        }
    }
}

/// Prints statistics to stdout in a formatted manner
pub fn print_statistics(stats: &CrawlStatistics) {
    println!("=== Crawl Statistics ===\n");

    println!("Overview:");
    println!("  Pages fetched: {}", stats.pages_fetched);
    println!(
        "  Pages matched: {} ({:.1}%)",
        stats.pages_matched,
        stats.match_rate()
    );
    println!("  Elapsed: {:.2}s", stats.elapsed.as_secs_f64());
    println!();

    if !stats.depth_breakdown.is_empty() {
        println!("Pages by Depth:");
        for (depth, count) in &stats.depth_breakdown {
            println!("  {}: {}", depth, count);
        }
        println!();
    }
}
