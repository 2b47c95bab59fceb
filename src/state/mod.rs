//! State module for tracking crawl progress
//!
//! This module provides the shared state mutated by crawl tasks and the
//! snapshot handed back once a crawl completes.
//!
//! # Components
//!
//! - `CrawlState`: the visited set and result map, kept behind a single guard
//! - `VisitRecord`: the outcome of one successfully fetched page
//! - `CrawlResults`: the immutable result set returned to the caller

mod crawl_state;
mod visit;

// Re-export main types
pub use crawl_state::CrawlState;
pub use visit::{CrawlResults, VisitRecord};
