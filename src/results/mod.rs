//! Search suggestion records and their deduplication

mod dedup;
mod types;

pub use dedup::uniq_results;
pub use types::SearchResult;
