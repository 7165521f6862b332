//! Result deduplication by identifier

use super::types::SearchResult;
use std::collections::HashSet;

/// Collapse results to one entry per `id`, keeping the first occurrence
///
/// Order is preserved and nothing is truncated; callers cap the list before
/// handing it over.
pub fn uniq_results(results: Vec<SearchResult>) -> Vec<SearchResult> {
    let mut seen: HashSet<String> = HashSet::with_capacity(results.len());

    results
        .into_iter()
        .filter(|result| seen.insert(result.id.clone()))
        .collect()
}
