//! Search suggestion state and its reducer
//!
//! The state is only ever replaced, never edited: every action produces a
//! fresh `State` derived from the previous one.

mod action;
mod store;

pub use action::{
    dec_selected_index, inc_selected_index, query_change, reset_selected_index, results_change,
    Action,
};
pub(crate) use action::{search_error, search_start, search_success};
pub use store::{Dispatch, Store};

use crate::results::{uniq_results, SearchResult};
use serde::Serialize;

/// Rendered search state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct State {
    /// Current input text
    pub query: String,
    /// Displayed suggestions, unique by id
    pub results: Vec<SearchResult>,
    /// A remote lookup is in flight
    pub loading: bool,
    /// Last error message, empty when there is none
    pub error: String,
    /// Highlighted suggestion; `None` means nothing is selected
    pub selected_index: Option<usize>,
}

impl State {
    /// The default state a session starts from
    pub fn initial() -> Self {
        Self::default()
    }

    /// The highlighted result, if any
    pub fn selected(&self) -> Option<&SearchResult> {
        self.selected_index.and_then(|i| self.results.get(i))
    }

    pub fn has_error(&self) -> bool {
        !self.error.is_empty()
    }

    fn with_results(&self, results: Vec<SearchResult>) -> Self {
        Self {
            results: uniq_results(results),
            loading: false,
            error: String::new(),
            selected_index: None,
            ..self.clone()
        }
    }
}

/// Apply `action` to `state`, returning the next state
pub fn reducer(state: &State, action: Action) -> State {
    match action {
        Action::SearchStart => State {
            loading: true,
            ..state.clone()
        },
        Action::SearchSuccess { results } | Action::ResultsChange { results } => {
            state.with_results(results)
        }
        Action::SearchError { message } => State {
            error: message,
            loading: false,
            results: Vec::new(),
            selected_index: None,
            ..state.clone()
        },
        Action::QueryChange { query } => State {
            query,
            ..state.clone()
        },
        Action::SelectedIndexInc => {
            let next = match state.selected_index {
                None if !state.results.is_empty() => Some(0),
                Some(i) if i + 1 < state.results.len() => Some(i + 1),
                _ => None,
            };
            State {
                selected_index: next,
                ..state.clone()
            }
        }
        Action::SelectedIndexDec => {
            let next = match state.selected_index {
                Some(i) => i.checked_sub(1),
                None => state.results.len().checked_sub(1),
            };
            State {
                selected_index: next,
                ..state.clone()
            }
        }
        Action::SelectedIndexReset => State {
            selected_index: None,
            ..state.clone()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results(n: usize) -> Vec<SearchResult> {
        (0..n)
            .map(|i| SearchResult::new(i.to_string(), format!("result {}", i)))
            .collect()
    }

    fn with_results(n: usize) -> State {
        reducer(&State::initial(), results_change(results(n)))
    }

    #[test]
    fn test_initial_state() {
        let state = State::initial();
        assert_eq!(state.query, "");
        assert!(state.results.is_empty());
        assert!(!state.loading);
        assert!(!state.has_error());
        assert_eq!(state.selected_index, None);
    }

    #[test]
    fn test_search_start_only_sets_loading() {
        let state = State {
            query: "abc".to_string(),
            error: "old".to_string(),
            ..with_results(3)
        };
        let next = reducer(&state, search_start());

        assert!(next.loading);
        assert_eq!(next.query, "abc");
        assert_eq!(next.error, "old");
        assert_eq!(next.results, state.results);
    }

    #[test]
    fn test_search_success_dedups_and_resets() {
        let state = State {
            loading: true,
            error: "boom".to_string(),
            selected_index: Some(1),
            ..with_results(3)
        };
        let mut incoming = results(2);
        incoming.extend(results(4));

        let next = reducer(&state, search_success(incoming));

        assert_eq!(next.results.len(), 4);
        assert!(!next.loading);
        assert_eq!(next.error, "");
        assert_eq!(next.selected_index, None);
    }

    #[test]
    fn test_results_change_matches_search_success() {
        let state = State {
            query: "ab".to_string(),
            loading: true,
            selected_index: Some(0),
            ..with_results(2)
        };
        let payload = results(5);

        assert_eq!(
            reducer(&state, results_change(payload.clone())),
            reducer(&state, search_success(payload))
        );
    }

    #[test]
    fn test_search_error_clears_results() {
        let state = State {
            loading: true,
            selected_index: Some(2),
            ..with_results(4)
        };
        let next = reducer(&state, search_error("timeout"));

        assert_eq!(next.error, "timeout");
        assert!(next.results.is_empty());
        assert!(!next.loading);
        assert_eq!(next.selected_index, None);
    }

    #[test]
    fn test_query_change_keeps_everything_else() {
        let state = State {
            selected_index: Some(1),
            ..with_results(2)
        };
        let next = reducer(&state, query_change("bar"));

        assert_eq!(next.query, "bar");
        assert_eq!(next.results, state.results);
        assert_eq!(next.selected_index, Some(1));
    }

    #[test]
    fn test_inc_cycles_through_results() {
        let mut state = with_results(3);
        let mut seen = vec![];
        for _ in 0..4 {
            state = reducer(&state, inc_selected_index());
            seen.push(state.selected_index);
        }
        assert_eq!(seen, vec![Some(0), Some(1), Some(2), None]);
    }

    #[test]
    fn test_dec_cycles_through_results() {
        let mut state = with_results(3);
        let mut seen = vec![];
        for _ in 0..4 {
            state = reducer(&state, dec_selected_index());
            seen.push(state.selected_index);
        }
        assert_eq!(seen, vec![Some(2), Some(1), Some(0), None]);
    }

    #[test]
    fn test_selection_on_empty_results_stays_unselected() {
        let state = State::initial();
        assert_eq!(reducer(&state, inc_selected_index()).selected_index, None);
        assert_eq!(reducer(&state, dec_selected_index()).selected_index, None);
    }

    #[test]
    fn test_reset_selected_index() {
        let state = reducer(&with_results(2), inc_selected_index());
        assert_eq!(state.selected().map(|r| r.id.as_str()), Some("0"));

        let next = reducer(&state, reset_selected_index());
        assert_eq!(next.selected_index, None);
        assert!(next.selected().is_none());
    }

    #[test]
    fn test_reducer_is_pure() {
        let state = State {
            query: "q".to_string(),
            selected_index: Some(1),
            ..with_results(3)
        };
        let before = state.clone();

        let actions = vec![
            search_start(),
            search_success(results(2)),
            search_error("nope"),
            query_change("x"),
            results_change(results(1)),
            inc_selected_index(),
            dec_selected_index(),
            reset_selected_index(),
        ];

        for action in actions {
            let a = reducer(&state, action.clone());
            let b = reducer(&state, action);
            assert_eq!(a, b);
            assert_eq!(state, before);
        }
    }
}
