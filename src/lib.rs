//! Suggest-RS: search-suggestion state management
//!
//! Merges locally remembered picks with a debounced remote lookup, keeps the
//! suggestion list free of duplicates and tracks keyboard-driven selection.

pub mod config;
pub mod debounce;
pub mod error;
pub mod history;
pub mod metrics;
pub mod network;
pub mod results;
pub mod search;
pub mod state;

pub use config::Settings;
pub use error::SearchError;
pub use history::{HistorySource, MemoryHistory};
pub use network::{ApiClient, RemoteSearch};
pub use results::{uniq_results, SearchResult};
pub use search::SearchSession;
pub use state::{reducer, Action, Dispatch, State, Store};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum number of suggestions shown at once
pub const MAX_RESULTS: usize = 20;

/// Default quiet period before a remote lookup, in milliseconds
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;
