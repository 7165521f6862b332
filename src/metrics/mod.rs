//! Metrics collection module
//!
//! Counts how search sessions resolve queries: locally, remotely, or not at all.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;
use std::time::Duration;

/// Number of remote response times kept for the rolling average
const RESPONSE_TIME_WINDOW: usize = 100;

/// Per-session counters
pub struct SearchMetrics {
    /// Total query changes handled
    searches: AtomicU64,
    /// Queries answered from history alone
    local_only: AtomicU64,
    /// Remote lookups issued
    remote_requests: AtomicU64,
    /// Remote lookups that failed
    remote_failures: AtomicU64,
    /// Debounced lookups dropped before they were sent
    superseded: AtomicU64,
    /// Remote outcomes discarded because a newer query was issued
    stale_discarded: AtomicU64,
    /// Remote response times (rolling window in ms)
    response_times: RwLock<Vec<u64>>,
}

impl SearchMetrics {
    pub fn new() -> Self {
        Self {
            searches: AtomicU64::new(0),
            local_only: AtomicU64::new(0),
            remote_requests: AtomicU64::new(0),
            remote_failures: AtomicU64::new(0),
            superseded: AtomicU64::new(0),
            stale_discarded: AtomicU64::new(0),
            response_times: RwLock::new(Vec::new()),
        }
    }

    pub fn inc_search(&self) {
        self.searches.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_local_only(&self) {
        self.local_only.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_superseded(&self) {
        self.superseded.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_stale_discarded(&self) {
        self.stale_discarded.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a finished remote lookup
    pub fn record_remote(&self, elapsed: Duration, success: bool) {
        self.remote_requests.fetch_add(1, Ordering::Relaxed);
        if !success {
            self.remote_failures.fetch_add(1, Ordering::Relaxed);
        }

        let mut times = self.response_times.write().unwrap();
        if times.len() >= RESPONSE_TIME_WINDOW {
            times.remove(0);
        }
        times.push(elapsed.as_millis() as u64);
    }

    /// Average remote response time over the window
    pub fn avg_response_time(&self) -> Option<u64> {
        let times = self.response_times.read().unwrap();
        if times.is_empty() {
            None
        } else {
            Some(times.iter().sum::<u64>() / times.len() as u64)
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            searches: self.searches.load(Ordering::Relaxed),
            local_only: self.local_only.load(Ordering::Relaxed),
            remote_requests: self.remote_requests.load(Ordering::Relaxed),
            remote_failures: self.remote_failures.load(Ordering::Relaxed),
            superseded: self.superseded.load(Ordering::Relaxed),
            stale_discarded: self.stale_discarded.load(Ordering::Relaxed),
            avg_response_time: self.avg_response_time(),
        }
    }
}

impl Default for SearchMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Point-in-time copy of the counters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub searches: u64,
    pub local_only: u64,
    pub remote_requests: u64,
    pub remote_failures: u64,
    pub superseded: u64,
    pub stale_discarded: u64,
    pub avg_response_time: Option<u64>,
}
