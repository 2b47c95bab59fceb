//! Word-Ripple main entry point
//!
//! This is the command-line interface for the Word-Ripple site search.

use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use word_ripple::config::{load_config_with_hash, validate, Config};
use word_ripple::crawler::Coordinator;
use word_ripple::output::{
    generate_markdown_report, print_statistics, render_report, CrawlSummary, RunInfo,
};
use word_ripple::url::parse_seed;
use word_ripple::RippleError;
use tracing_subscriber::EnvFilter;

/// Word-Ripple: search every page of a site for a word
///
/// Starting from the seed URL, Word-Ripple follows links that stay under the
/// seed's prefix up to the configured depth, fetches each page once and
/// reports whether its text contains the word.
#[derive(Parser, Debug)]
#[command(name = "word-ripple")]
#[command(version)]
#[command(about = "Searches a site for a word, following links to a fixed depth", long_about = None)]
struct Cli {
    /// Seed URL to start from (prompted for when omitted)
    #[arg(value_name = "SEED")]
    seed: Option<String>,

    /// Word to search for, case-insensitive (prompted for when omitted)
    #[arg(value_name = "WORD")]
    word: Option<String>,

    /// Maximum link depth, counting the seed page as 1
    #[arg(short, long)]
    depth: Option<u32>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Maximum number of simultaneous fetches (unbounded by default)
    #[arg(long, value_name = "N")]
    concurrency: Option<usize>,

    /// Write a markdown report to this path
    #[arg(long, value_name = "PATH")]
    report: Option<PathBuf>,

    /// Print statistics after the results
    #[arg(long)]
    stats: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let (config, config_hash) = load_configuration(&cli)?;

    let seed = match &cli.seed {
        Some(seed) => seed.clone(),
        None => prompt("Enter the seed URL (e.g. https://www.example.com): ")?,
    };
    let word = match &cli.word {
        Some(word) => word.clone(),
        None => prompt("Enter the word to search for: ")?,
    };

    let seed = match parse_seed(&seed) {
        Ok(seed) => seed,
        Err(e) => {
            tracing::error!("Invalid seed URL '{}': {}", seed, e);
            return Err(RippleError::from(e).into());
        }
    };

    let word = word.trim().to_string();
    if word.is_empty() {
        return Err(RippleError::InvalidWord("search word cannot be empty".to_string()).into());
    }

    let coordinator = Coordinator::new(&config)?;
    let results = coordinator.crawl(&seed, &word).await;

    println!();
    print!("{}", render_report(&results, &word));

    let summary = CrawlSummary::new(
        RunInfo {
            seed: seed.to_string(),
            word: word.clone(),
            max_depth: config.crawler.max_depth,
            config_hash,
        },
        &results,
    );

    if cli.stats {
        println!();
        print_statistics(&summary.statistics);
    }

    let report_path = cli
        .report
        .clone()
        .or_else(|| config.output.report_path.as_ref().map(PathBuf::from));
    if let Some(path) = report_path {
        generate_markdown_report(&summary, &path).map_err(RippleError::from)?;
        tracing::info!("Report written to: {}", path.display());
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("word_ripple=info,warn"),
            1 => EnvFilter::new("word_ripple=debug,info"),
            2 => EnvFilter::new("word_ripple=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_writer(io::stderr)
        .init();
}

/// Loads the config file (if any) and applies command-line overrides
fn load_configuration(cli: &Cli) -> Result<(Config, Option<String>), RippleError> {
    let (mut config, hash) = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path).map_err(|e| {
                tracing::error!("Failed to load configuration: {}", e);
                e
            })?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            (config, Some(hash))
        }
        None => (Config::default(), None),
    };

    if let Some(depth) = cli.depth {
        config.crawler.max_depth = depth;
    }
    if let Some(timeout) = cli.timeout {
        config.crawler.fetch_timeout_secs = timeout;
    }
    if let Some(limit) = cli.concurrency {
        config.crawler.max_concurrent_fetches = Some(limit);
    }

    validate(&config)?;
    Ok((config, hash))
}

/// Reads one line from stdin after printing `message`
fn prompt(message: &str) -> io::Result<String> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
