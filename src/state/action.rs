//! Actions consumed by the reducer

use crate::results::SearchResult;

/// A state transition request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A remote lookup is in flight
    SearchStart,
    /// A remote lookup finished with merged results
    SearchSuccess { results: Vec<SearchResult> },
    /// A remote lookup failed
    SearchError { message: String },
    /// The input text changed
    QueryChange { query: String },
    /// Results were replaced without a remote lookup (local history)
    ResultsChange { results: Vec<SearchResult> },
    /// Move the highlight down, wrapping to "nothing selected"
    SelectedIndexInc,
    /// Move the highlight up, wrapping to the last result
    SelectedIndexDec,
    /// Clear the highlight
    SelectedIndexReset,
}

impl Action {
    /// Short name used in log lines
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SearchStart => "search_start",
            Self::SearchSuccess { .. } => "search_success",
            Self::SearchError { .. } => "search_error",
            Self::QueryChange { .. } => "query_change",
            Self::ResultsChange { .. } => "results_change",
            Self::SelectedIndexInc => "selected_index_inc",
            Self::SelectedIndexDec => "selected_index_dec",
            Self::SelectedIndexReset => "selected_index_reset",
        }
    }
}

pub(crate) fn search_start() -> Action {
    Action::SearchStart
}

pub(crate) fn search_success(results: Vec<SearchResult>) -> Action {
    Action::SearchSuccess { results }
}

pub(crate) fn search_error(message: impl Into<String>) -> Action {
    Action::SearchError {
        message: message.into(),
    }
}

pub fn query_change(query: impl Into<String>) -> Action {
    Action::QueryChange {
        query: query.into(),
    }
}

pub fn results_change(results: Vec<SearchResult>) -> Action {
    Action::ResultsChange { results }
}

pub fn inc_selected_index() -> Action {
    Action::SelectedIndexInc
}

pub fn dec_selected_index() -> Action {
    Action::SelectedIndexDec
}

pub fn reset_selected_index() -> Action {
    Action::SelectedIndexReset
}
