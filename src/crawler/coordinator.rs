//! Crawler coordinator - main crawl orchestration logic
//!
//! This module contains the recursive fan-out traversal:
//! - One task per in-scope link, spawned onto a shared task group
//! - Depth limiting and once-only fetching through a single state guard
//! - Completion detection across every depth of the task tree

use crate::config::{Config, CrawlerConfig, DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_MAX_DEPTH};
use crate::crawler::fetcher::{HttpFetcher, PageFetcher};
use crate::crawler::observer::{CrawlObserver, TracingObserver};
use crate::crawler::parser::{ContentExtractor, HtmlExtractor};
use crate::state::{CrawlResults, CrawlState, VisitRecord};
use crate::url::{is_in_scope, normalize_link};
use crate::{NetworkError, RippleError};
use futures::future::BoxFuture;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;
use tokio_util::task::TaskTracker;
use url::Url;

/// Tunables of a single crawl
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlSettings {
    /// Deepest link level that is fetched; the seed is depth 1
    pub max_depth: u32,

    /// Time allowed for each fetch
    pub fetch_timeout: Duration,

    /// Upper bound on fetches in flight at once
    ///
    /// `None` and `Some(0)` both leave fetching unbounded. Values above
    /// `Semaphore::MAX_PERMITS` are clamped to it.
    pub max_concurrent_fetches: Option<usize>,
}

impl Default for CrawlSettings {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            fetch_timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
            max_concurrent_fetches: None,
        }
    }
}

impl From<&CrawlerConfig> for CrawlSettings {
    fn from(config: &CrawlerConfig) -> Self {
        Self {
            max_depth: config.max_depth,
            fetch_timeout: Duration::from_secs(config.fetch_timeout_secs),
            max_concurrent_fetches: config.max_concurrent_fetches,
        }
    }
}

/// Main crawler coordinator structure
///
/// A coordinator holds the collaborators and settings; each call to
/// [`Coordinator::crawl`] creates fresh shared state, so one coordinator can
/// run any number of independent crawls.
pub struct Coordinator {
    settings: CrawlSettings,
    fetcher: Arc<dyn PageFetcher>,
    extractor: Arc<dyn ContentExtractor>,
    observer: Arc<dyn CrawlObserver>,
}

impl Coordinator {
    /// Creates a coordinator that fetches over HTTP
    ///
    /// # Arguments
    ///
    /// * `config` - The crawler configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Successfully created coordinator
    /// * `Err(RippleError)` - Failed to build the HTTP client
    pub fn new(config: &Config) -> Result<Self, RippleError> {
        let fetcher = HttpFetcher::from_config(&config.user_agent)?;
        Ok(Self::with_fetcher(
            CrawlSettings::from(&config.crawler),
            Arc::new(fetcher),
        ))
    }

    /// Creates a coordinator around any `PageFetcher`
    ///
    /// Uses the HTML extractor and the tracing observer until replaced.
    pub fn with_fetcher(settings: CrawlSettings, fetcher: Arc<dyn PageFetcher>) -> Self {
        Self {
            settings,
            fetcher,
            extractor: Arc::new(HtmlExtractor),
            observer: Arc::new(TracingObserver),
        }
    }

    /// Replaces the content extractor
    pub fn with_extractor(mut self, extractor: Arc<dyn ContentExtractor>) -> Self {
        self.extractor = extractor;
        self
    }

    /// Replaces the observer receiving progress and failure events
    pub fn with_observer(mut self, observer: Arc<dyn CrawlObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn settings(&self) -> &CrawlSettings {
        &self.settings
    }

    /// Crawls everything reachable from `seed` and searches it for `word`
    ///
    /// Returns only after every task spawned during the run, at any depth,
    /// has finished. Fetch failures are reported to the observer and leave
    /// no entry in the results.
    ///
    /// # Arguments
    ///
    /// * `seed` - Starting URL; also the scope prefix and link resolution base
    /// * `word` - Word to look for, matched case-insensitively
    ///
    /// # Example
    ///
    /// ```no_run
    /// use word_ripple::config::Config;
    /// use word_ripple::crawler::Coordinator;
    /// use word_ripple::url::parse_seed;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let coordinator = Coordinator::new(&Config::default())?;
    /// let seed = parse_seed("https://example.com/")?;
    /// let results = coordinator.crawl(&seed, "rust").await;
    /// println!("{} pages, {} matched", results.len(), results.matched_count());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn crawl(&self, seed: &Url, word: &str) -> CrawlResults {
        let start_time = Instant::now();
        tracing::info!(
            "Starting crawl of {} for '{}' (max depth {})",
            seed,
            word,
            self.settings.max_depth
        );

        let run = Arc::new(CrawlRun {
            seed: seed.clone(),
            word: word.to_lowercase(),
            max_depth: self.settings.max_depth,
            fetch_timeout: self.settings.fetch_timeout,
            fetcher: Arc::clone(&self.fetcher),
            extractor: Arc::clone(&self.extractor),
            observer: Arc::clone(&self.observer),
            state: Mutex::new(CrawlState::new()),
            tasks: TaskTracker::new(),
            fetch_permits: fetch_permits(self.settings.max_concurrent_fetches),
        });

        spawn_visit(&run, seed.clone(), 1);

        // Children are tracked before their parent finishes, so the tracker
        // cannot drain while work remains.
        run.tasks.close();
        run.tasks.wait().await;

        let elapsed = start_time.elapsed();
        let mut state = run.lock_state();
        let failed = state.visited_count() - state.result_count();
        let results = state.take_results(elapsed);

        tracing::info!(
            "Crawl completed: {} pages fetched ({} matched, {} failed) in {:?}",
            results.len(),
            results.matched_count(),
            failed,
            elapsed
        );

        results
    }
}

/// Builds the fetch limiter; a zero limit would never grant a permit
fn fetch_permits(limit: Option<usize>) -> Option<Semaphore> {
    limit
        .filter(|&limit| limit > 0)
        .map(|limit| Semaphore::new(limit.min(Semaphore::MAX_PERMITS)))
}

/// Shared context of one crawl run
struct CrawlRun {
    seed: Url,
    word: String,
    max_depth: u32,
    fetch_timeout: Duration,
    fetcher: Arc<dyn PageFetcher>,
    extractor: Arc<dyn ContentExtractor>,
    observer: Arc<dyn CrawlObserver>,
    state: Mutex<CrawlState>,
    tasks: TaskTracker,
    fetch_permits: Option<Semaphore>,
}

impl CrawlRun {
    fn lock_state(&self) -> MutexGuard<'_, CrawlState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Atomically marks `url` visited; false if it already was
    fn claim(&self, url: &Url) -> bool {
        self.lock_state().mark_visited(url.as_str())
    }

    fn record(&self, record: VisitRecord) {
        if !self.lock_state().record(record) {
            tracing::warn!("Discarded a second result for an already recorded page");
        }
    }

    /// Fetches a page, bounded by the run's timeout and concurrency limit
    async fn fetch(&self, url: &Url) -> Result<String, NetworkError> {
        let _permit = match &self.fetch_permits {
            Some(permits) => permits.acquire().await.ok(),
            None => None,
        };

        match tokio::time::timeout(self.fetch_timeout, self.fetcher.fetch(url, self.fetch_timeout))
            .await
        {
            Ok(result) => result,
            Err(_) => Err(NetworkError::Timeout {
                url: url.to_string(),
                after: self.fetch_timeout,
            }),
        }
    }
}

/// Registers a task for `(url, depth)` on the run's task group
fn spawn_visit(run: &Arc<CrawlRun>, url: Url, depth: u32) {
    run.tasks.spawn(visit(Arc::clone(run), url, depth));
}

/// Processes one page: claim, fetch, match, record, fan out
fn visit(run: Arc<CrawlRun>, url: Url, depth: u32) -> BoxFuture<'static, ()> {
    Box::pin(async move {
        if depth > run.max_depth {
            tracing::trace!("Dropping {} at depth {}", url, depth);
            return;
        }

        if !run.claim(&url) {
            tracing::trace!("Already visited {}", url);
            return;
        }

        run.observer.on_visit(&url, depth);

        let body = match run.fetch(&url).await {
            Ok(body) => body,
            Err(e) => {
                run.observer.on_error(&url, &e);
                return;
            }
        };

        let page = run.extractor.extract(&body);
        let matched = page.contains_word(&run.word);
        run.record(VisitRecord {
            url: url.to_string(),
            depth,
            matched,
        });

        // Pages at the depth limit are recorded but not expanded
        if depth >= run.max_depth {
            return;
        }

        for link in &page.links {
            let resolved = match normalize_link(&run.seed, link) {
                Ok(resolved) => resolved,
                Err(e) => {
                    tracing::debug!("Skipping link {:?} on {}: {}", link, url, e);
                    continue;
                }
            };

            if is_in_scope(&run.seed, &resolved) {
                spawn_visit(&run, resolved, depth + 1);
            }
        }
    })
}
