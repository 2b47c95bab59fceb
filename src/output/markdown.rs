//! Markdown report generation
//!
//! This module generates human-readable markdown reports of crawl results,
//! including run information, statistics and the per-page results table.

use crate::output::summary::{CrawlSummary, OutputResult};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes a markdown report for a crawl
///
/// # Arguments
///
/// * `summary` - The crawl summary data
/// * `output_path` - Path where the markdown file should be written
///
/// # Returns
///
/// * `Ok(())` - Successfully wrote markdown report
/// * `Err(OutputError)` - Failed to write report
pub fn generate_markdown_report(summary: &CrawlSummary, output_path: &Path) -> OutputResult<()> {
    let markdown = format_markdown_report(summary);

    let mut file = File::create(output_path)?;
    file.write_all(markdown.as_bytes())?;

    Ok(())
}

/// Formats a crawl summary as markdown
pub fn format_markdown_report(summary: &CrawlSummary) -> String {
    let mut md = String::new();
    let stats = &summary.statistics;

    md.push_str("# Word-Ripple Search Report\n\n");

    // Run metadata
    md.push_str("## Run Information\n\n");
    md.push_str(&format!("- **Seed URL**: {}\n", summary.run.seed));
    md.push_str(&format!("- **Search Word**: {}\n", summary.run.word));
    md.push_str(&format!("- **Max Depth**: {}\n", summary.run.max_depth));
    md.push_str(&format!(
        "- **Generated**: {}\n",
        summary.generated_at.to_rfc3339()
    ));
    md.push_str(&format!(
        "- **Duration**: {:.2} seconds\n",
        stats.elapsed.as_secs_f64()
    ));
    if let Some(hash) = &summary.run.config_hash {
        md.push_str(&format!("- **Config Hash**: {}\n", hash));
    }
    md.push('\n');

    // Overall statistics
    md.push_str("## Overall Statistics\n\n");
    md.push_str(&format!("- **Pages Fetched**: {}\n", stats.pages_fetched));
    md.push_str(&format!("- **Pages Matched**: {}\n", stats.pages_matched));
    md.push_str(&format!("- **Match Rate**: {:.2}%\n\n", stats.match_rate()));

    // Depth breakdown
    if !stats.depth_breakdown.is_empty() {
        md.push_str("## Depth Breakdown\n\n");
        md.push_str("| Depth | Pages |\n");
        md.push_str("|-------|-------|\n");
        for (depth, count) in &stats.depth_breakdown {
            md.push_str(&format!("| {} | {} |\n", depth, count));
        }
        md.push('\n');
    }

    // Per-page results
    md.push_str("## Results\n\n");
    if summary.records.is_empty() {
        md.push_str("No pages were fetched.\n");
    } else {
        md.push_str("| URL | Depth | Result |\n");
        md.push_str("|-----|-------|--------|\n");
        for record in &summary.records {
            md.push_str(&format!(
                "| {} | {} | {} |\n",
                record.url,
                record.depth,
                if record.matched { "matched" } else { "not matched" }
            ));
        }
    }

    md
}
