//! Remote suggestion lookup
//!
//! The orchestrator only sees the `RemoteSearch` trait; `ApiClient` is the
//! HTTP implementation.

mod client;

pub use client::ApiClient;

use crate::error::SearchError;
use crate::results::SearchResult;
use async_trait::async_trait;

/// Backend answering a query with an ordered list of results
#[async_trait]
pub trait RemoteSearch: Send + Sync {
    /// Fetch results for `query`
    async fn fetch(&self, query: &str) -> Result<Vec<SearchResult>, SearchError>;
}
