//! Query-change orchestration

use crate::config::SearchSettings;
use crate::debounce::Debouncer;
use crate::history::HistorySource;
use crate::metrics::{MetricsSnapshot, SearchMetrics};
use crate::network::RemoteSearch;
use crate::results::SearchResult;
use crate::state::{results_change, search_error, search_start, search_success, Dispatch};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info, warn};

/// Drives suggestions for one search box
///
/// Every call to [`search`](Self::search) shows local history matches right
/// away and, when history cannot fill the list, schedules a debounced remote
/// lookup whose merged outcome is dispatched later.
pub struct SearchSession {
    history: Arc<dyn HistorySource>,
    remote: Arc<dyn RemoteSearch>,
    debouncer: Debouncer,
    /// Bumped on every query change; remote outcomes carry the value they started with
    generation: Arc<AtomicU64>,
    metrics: Arc<SearchMetrics>,
    max_results: usize,
    debounce: Duration,
    discard_stale: bool,
}

impl SearchSession {
    /// Create a session with default settings
    pub fn new(history: Arc<dyn HistorySource>, remote: Arc<dyn RemoteSearch>) -> Self {
        let defaults = SearchSettings::default();
        Self {
            history,
            remote,
            debouncer: Debouncer::new(),
            generation: Arc::new(AtomicU64::new(0)),
            metrics: Arc::new(SearchMetrics::new()),
            max_results: defaults.max_results,
            debounce: defaults.debounce(),
            discard_stale: defaults.discard_stale_responses,
        }
    }

    /// Apply search settings
    pub fn with_settings(mut self, settings: &SearchSettings) -> Self {
        self.max_results = settings.max_results;
        self.debounce = settings.debounce();
        self.discard_stale = settings.discard_stale_responses;
        self
    }

    /// Set the quiet period before a remote lookup
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Counters collected so far
    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    /// Handle a query change
    ///
    /// Never blocks. Must be called from within a tokio runtime when a remote
    /// lookup may be needed.
    pub fn search(&self, query: &str, dispatch: Arc<dyn Dispatch>) {
        if self.debouncer.cancel() {
            debug!("Superseded pending lookup");
            self.metrics.inc_superseded();
        }
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.metrics.inc_search();

        if query.is_empty() {
            let recent = capped(self.history.all(), self.max_results);
            debug!("Empty query, showing {} recent entries", recent.len());
            self.metrics.inc_local_only();
            dispatch.dispatch(results_change(recent));
            return;
        }

        let local = capped(self.history.search(query), self.max_results);
        debug!("{} history matches for '{}'", local.len(), query);
        dispatch.dispatch(results_change(local.clone()));

        if local.len() >= self.max_results {
            self.metrics.inc_local_only();
            return;
        }

        dispatch.dispatch(search_start());

        let remote = Arc::clone(&self.remote);
        let current = Arc::clone(&self.generation);
        let metrics = Arc::clone(&self.metrics);
        let max_results = self.max_results;
        let discard_stale = self.discard_stale;
        let query = query.to_string();

        self.debouncer.schedule(self.debounce, async move {
            info!("Searching remote for '{}'", query);
            let start = Instant::now();
            let outcome = remote.fetch(&query).await;
            metrics.record_remote(start.elapsed(), outcome.is_ok());

            if discard_stale && current.load(Ordering::SeqCst) != generation {
                warn!("Discarding stale response for '{}'", query);
                metrics.inc_stale_discarded();
                return;
            }

            let action = match outcome {
                Ok(results) => {
                    debug!("Remote returned {} results for '{}'", results.len(), query);
                    let mut merged = local;
                    merged.extend(results);
                    search_success(capped(merged, max_results))
                }
                Err(e) => {
                    warn!("Remote search for '{}' failed: {}", query, e);
                    search_error(e.to_string())
                }
            };
            dispatch.dispatch(action);
        });
    }

    /// Remember a picked result so it shows up first next time
    pub fn record_selection(&self, result: SearchResult) {
        debug!("Recording selection {}", result.id);
        self.history.record(result);
    }
}

fn capped(mut results: Vec<SearchResult>, max: usize) -> Vec<SearchResult> {
    results.truncate(max);
    results
}
