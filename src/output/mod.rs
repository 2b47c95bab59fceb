//! Output module for rendering crawl results
//!
//! This module handles:
//! - The plain-text console report
//! - Markdown reports written to disk
//! - Statistics derived from a result set

mod markdown;
pub mod stats;
mod summary;

pub use markdown::{format_markdown_report, generate_markdown_report};
pub use stats::{print_statistics, CrawlStatistics};
pub use summary::{CrawlSummary, OutputError, OutputResult, RunInfo};

use crate::state::CrawlResults;

/// Renders the console report for a finished crawl
///
/// One line per fetched page in URL order, followed by the total elapsed
/// wall-clock time.
///
/// # Example
///
/// ```
/// use word_ripple::output::render_report;
/// use word_ripple::state::CrawlResults;
///
/// let report = render_report(&CrawlResults::default(), "rust");
/// assert!(report.contains("No pages were fetched"));
/// ```
pub fn render_report(results: &CrawlResults, word: &str) -> String {
    let mut report = String::from("Search results:\n");

    if results.is_empty() {
        report.push_str("  No pages were fetched\n");
    }

    for record in results.sorted() {
        let status = if record.matched {
            "matched"
        } else {
            "not matched"
        };
        report.push_str(&format!("{}: '{}' {}\n", record.url, word, status));
    }

    report.push_str(&format!(
        "\nElapsed time: {:.2} seconds\n",
        results.elapsed().as_secs_f64()
    ));
    report
}
