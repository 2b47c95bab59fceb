//! Configuration module for Word-Ripple
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. Every section has defaults, so an empty file (or no
//! file at all) yields a usable configuration.
//!
//! # Example
//!
//! ```no_run
//! use word_ripple::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("ripple.toml")).unwrap();
//! println!("Crawler will use max depth: {}", config.crawler.max_depth);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, CrawlerConfig, OutputConfig, UserAgentConfig, DEFAULT_FETCH_TIMEOUT_SECS,
    DEFAULT_MAX_DEPTH,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
pub use validation::validate;
