//! Integration tests for the crawler
//!
//! `crawl_tests` drives the full HTTP path against wiremock servers.
//! `graph_tests` drives the coordinator with an in-memory link graph to
//! check the concurrency properties under controlled latency.

mod graph_tests;
