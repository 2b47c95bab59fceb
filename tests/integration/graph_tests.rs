//! Concurrency properties checked against an in-memory link graph

use crate::support::{sorted_urls, GraphFetcher, RecordingObserver};
use std::sync::Arc;
use std::time::Duration;
use url::Url;
use word_ripple::crawler::{Coordinator, CrawlSettings};

fn settings(max_depth: u32) -> CrawlSettings {
    CrawlSettings {
        max_depth,
        fetch_timeout: Duration::from_secs(5),
        max_concurrent_fetches: None,
    }
}

fn seed() -> Url {
    Url::parse("https://ex.com/").unwrap()
}

/// Root links to `hubs` pages; every hub links to every other hub and to
/// one shared target, so the target is discovered along `hubs` paths at once.
fn converging_graph(hubs: usize) -> GraphFetcher {
    let hub_paths: Vec<String> = (0..hubs).map(|i| format!("/hub{}", i)).collect();
    let mut hub_links: Vec<&str> = hub_paths.iter().map(String::as_str).collect();

    let mut graph = GraphFetcher::new().page("https://ex.com/", "root", &hub_links);
    hub_links.push("/target");
    for path in &hub_paths {
        graph = graph.page(&format!("https://ex.com{}", path), "hub", &hub_links);
    }
    graph.page("https://ex.com/target", "the needle", &["/", "/hub0"])
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_converging_paths_fetch_once() {
    for _ in 0..10 {
        let fetcher = Arc::new(converging_graph(20));
        let coordinator = Coordinator::with_fetcher(settings(4), fetcher.clone());

        let results = coordinator.crawl(&seed(), "needle").await;

        assert_eq!(fetcher.max_fetches_per_url(), 1);
        assert_eq!(fetcher.fetch_count("https://ex.com/target"), 1);
        assert_eq!(fetcher.total_fetches(), 22);
        assert_eq!(results.len(), 22);
        assert_eq!(results.get("https://ex.com/target"), Some(true));
        assert_eq!(results.record("https://ex.com/target").unwrap().depth, 3);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_completion_waits_for_deepest_tasks() {
    // Deeper pages are slower, so they finish long after the first
    // generation of tasks has returned.
    let fetcher = GraphFetcher::new()
        .page("https://ex.com/", "level one", &["/l2a", "/l2b"])
        .page_with_delay("https://ex.com/l2a", "level two", &["/l3a"], Duration::from_millis(20))
        .page_with_delay("https://ex.com/l2b", "level two", &["/l3b"], Duration::from_millis(20))
        .page_with_delay("https://ex.com/l3a", "level three", &["/l4a"], Duration::from_millis(80))
        .page_with_delay("https://ex.com/l3b", "level three", &["/l4b"], Duration::from_millis(80))
        .page_with_delay("https://ex.com/l4a", "deep word", &[], Duration::from_millis(200))
        .page_with_delay("https://ex.com/l4b", "deep", &[], Duration::from_millis(250));
    let coordinator = Coordinator::with_fetcher(settings(4), Arc::new(fetcher));

    let results = coordinator.crawl(&seed(), "word").await;

    assert_eq!(
        sorted_urls(&results),
        vec![
            "https://ex.com/",
            "https://ex.com/l2a",
            "https://ex.com/l2b",
            "https://ex.com/l3a",
            "https://ex.com/l3b",
            "https://ex.com/l4a",
            "https://ex.com/l4b",
        ]
    );
    assert_eq!(results.get("https://ex.com/l4a"), Some(true));
    assert_eq!(results.get("https://ex.com/l4b"), Some(false));
    assert!(results.elapsed() >= Duration::from_millis(350));
}

#[tokio::test]
async fn test_depth_bound_respected() {
    // A chain deeper than the limit
    let fetcher = GraphFetcher::new()
        .page("https://ex.com/", "", &["/1"])
        .page("https://ex.com/1", "", &["/2"])
        .page("https://ex.com/2", "", &["/3"])
        .page("https://ex.com/3", "", &["/4"])
        .page("https://ex.com/4", "", &[]);
    let fetcher = Arc::new(fetcher);
    let observer = Arc::new(RecordingObserver::default());
    let coordinator =
        Coordinator::with_fetcher(settings(3), fetcher.clone()).with_observer(observer.clone());

    let results = coordinator.crawl(&seed(), "x").await;

    assert_eq!(results.len(), 3);
    assert!(results.iter().all(|record| record.depth <= 3));
    assert_eq!(fetcher.fetch_count("https://ex.com/3"), 0);
    assert_eq!(observer.visit_depth("https://ex.com/2"), Some(3));
    assert_eq!(observer.visit_depth("https://ex.com/3"), None);
}

#[tokio::test]
async fn test_scope_containment_uses_seed_prefix() {
    let seed = Url::parse("https://ex.com/docs").unwrap();
    let fetcher = GraphFetcher::new()
        .page(
            "https://ex.com/docs",
            "index",
            &[
                "/docs/guide",
                "/docs-archive",
                "/blog",
                "https://other.com/docs",
                "http://ex.com/docs/insecure",
            ],
        )
        .page("https://ex.com/docs/guide", "guide", &[])
        .page("https://ex.com/docs-archive", "archive", &[])
        .page("https://ex.com/blog", "blog", &[]);
    let fetcher = Arc::new(fetcher);
    let coordinator = Coordinator::with_fetcher(settings(3), fetcher.clone());

    let results = coordinator.crawl(&seed, "guide").await;

    assert_eq!(
        sorted_urls(&results),
        vec![
            "https://ex.com/docs",
            "https://ex.com/docs-archive",
            "https://ex.com/docs/guide",
        ]
    );
    assert_eq!(fetcher.fetch_count("https://ex.com/blog"), 0);
    assert_eq!(fetcher.fetch_count("https://other.com/docs"), 0);
}

#[tokio::test]
async fn test_links_resolve_against_seed() {
    // "next" on /section/page resolves against the seed, not the page
    let fetcher = GraphFetcher::new()
        .page("https://ex.com/", "", &["/section/page"])
        .page("https://ex.com/section/page", "", &["next"])
        .page("https://ex.com/next", "found", &[])
        .page("https://ex.com/section/next", "found", &[]);
    let fetcher = Arc::new(fetcher);
    let coordinator = Coordinator::with_fetcher(settings(3), fetcher.clone());

    let results = coordinator.crawl(&seed(), "found").await;

    assert_eq!(results.get("https://ex.com/next"), Some(true));
    assert_eq!(fetcher.fetch_count("https://ex.com/section/next"), 0);
}

#[tokio::test]
async fn test_match_reflects_page_text() {
    let fetcher = GraphFetcher::new()
        .page("https://ex.com/", "Welcome to the RUST site", &["/a", "/b", "/c"])
        .page("https://ex.com/a", "rustaceans gather here", &[])
        .page("https://ex.com/b", "nothing relevant", &[])
        .page("https://ex.com/c", "<script>rust()</script> only code", &[]);
    let coordinator = Coordinator::with_fetcher(settings(2), Arc::new(fetcher));

    let results = coordinator.crawl(&seed(), "Rust").await;

    assert_eq!(results.get("https://ex.com/"), Some(true));
    assert_eq!(results.get("https://ex.com/a"), Some(true));
    assert_eq!(results.get("https://ex.com/b"), Some(false));
    assert_eq!(results.get("https://ex.com/c"), Some(false));
}

#[tokio::test]
async fn test_timeout_omits_page_and_completes() {
    let fetcher = GraphFetcher::new()
        .page("https://ex.com/", "home", &["/a", "/c"])
        .page_with_delay("https://ex.com/a", "slow", &["/b"], Duration::from_secs(30))
        .page("https://ex.com/b", "behind slow", &[])
        .page("https://ex.com/c", "fast", &[]);
    let fetcher = Arc::new(fetcher);
    let observer = Arc::new(RecordingObserver::default());
    let coordinator = Coordinator::with_fetcher(
        CrawlSettings {
            fetch_timeout: Duration::from_millis(100),
            ..settings(3)
        },
        fetcher.clone(),
    )
    .with_observer(observer.clone());

    let results = coordinator.crawl(&seed(), "fast").await;

    assert_eq!(
        sorted_urls(&results),
        vec!["https://ex.com/", "https://ex.com/c"]
    );
    assert_eq!(results.get("https://ex.com/c"), Some(true));
    assert_eq!(fetcher.fetch_count("https://ex.com/b"), 0);
    assert_eq!(observer.error_urls(), vec!["https://ex.com/a".to_string()]);
    // The timed-out fetch was abandoned, so nothing is left in flight
    assert_eq!(fetcher.in_flight(), 0);
    assert!(observer.errors.lock().unwrap()[0].1.contains("timeout"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_fetch_concurrency_bound() {
    let leaves: Vec<String> = (0..12).map(|i| format!("/leaf{}", i)).collect();
    let leaf_links: Vec<&str> = leaves.iter().map(String::as_str).collect();

    let build = || {
        let mut graph = GraphFetcher::new().page("https://ex.com/", "root", &leaf_links);
        for leaf in &leaves {
            graph = graph.page_with_delay(
                &format!("https://ex.com{}", leaf),
                "leaf",
                &[],
                Duration::from_millis(40),
            );
        }
        Arc::new(graph)
    };

    let bounded = build();
    let coordinator = Coordinator::with_fetcher(
        CrawlSettings {
            max_concurrent_fetches: Some(2),
            ..settings(2)
        },
        bounded.clone(),
    );
    let results = coordinator.crawl(&seed(), "leaf").await;
    assert_eq!(results.len(), 13);
    assert!(bounded.peak_in_flight() <= 2);

    let unbounded = build();
    let coordinator = Coordinator::with_fetcher(settings(2), unbounded.clone());
    let results = coordinator.crawl(&seed(), "leaf").await;
    assert_eq!(results.len(), 13);
    assert!(unbounded.peak_in_flight() > 2);
}
