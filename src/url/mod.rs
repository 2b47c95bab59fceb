//! URL handling module for Word-Ripple
//!
//! This module resolves discovered links into canonical URLs and decides
//! whether a canonical URL falls inside the crawl's scope.

mod normalize;
mod scope;

// Re-export main functions
pub use normalize::{normalize_link, parse_seed};
pub use scope::is_in_scope;
