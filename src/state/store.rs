//! State holder that runs dispatched actions through the reducer

use super::{reducer, Action, State};
use crate::results::SearchResult;
use tokio::sync::watch;
use tracing::debug;

/// Sink for actions produced by a search session
pub trait Dispatch: Send + Sync {
    fn dispatch(&self, action: Action);
}

impl<F> Dispatch for F
where
    F: Fn(Action) + Send + Sync,
{
    fn dispatch(&self, action: Action) {
        self(action)
    }
}

/// Owns the current `State` and publishes every transition
pub struct Store {
    tx: watch::Sender<State>,
}

impl Store {
    /// Create a store holding the initial state
    pub fn new() -> Self {
        Self::with_state(State::initial())
    }

    /// Create a store holding `state`
    pub fn with_state(state: State) -> Self {
        let (tx, _) = watch::channel(state);
        Self { tx }
    }

    /// Snapshot of the current state
    pub fn state(&self) -> State {
        self.tx.borrow().clone()
    }

    /// The highlighted result, if any
    pub fn selected(&self) -> Option<SearchResult> {
        self.tx.borrow().selected().cloned()
    }

    /// Receiver notified on every transition
    pub fn subscribe(&self) -> watch::Receiver<State> {
        self.tx.subscribe()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatch for Store {
    fn dispatch(&self, action: Action) {
        let kind = action.kind();
        self.tx.send_modify(|state| {
            *state = reducer(state, action);
            debug!(
                "{} -> {} results, loading={}, selected={:?}",
                kind,
                state.results.len(),
                state.loading,
                state.selected_index
            );
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{inc_selected_index, query_change, results_change};

    #[test]
    fn test_store_applies_reducer() {
        let store = Store::new();
        store.dispatch(query_change("liga"));
        store.dispatch(results_change(vec![
            SearchResult::new("1", "La Liga"),
            SearchResult::new("2", "Bundesliga"),
        ]));
        store.dispatch(inc_selected_index());

        let state = store.state();
        assert_eq!(state.query, "liga");
        assert_eq!(state.results.len(), 2);
        assert_eq!(store.selected().map(|r| r.id), Some("1".to_string()));
    }

    #[tokio::test]
    async fn test_subscribers_see_transitions() {
        let store = Store::new();
        let mut rx = store.subscribe();

        store.dispatch(query_change("a"));
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().query, "a");
    }

    #[test]
    fn test_closure_is_a_dispatch_sink() {
        let seen = std::sync::Mutex::new(Vec::new());
        let sink = |action: Action| seen.lock().unwrap().push(action);

        sink.dispatch(query_change("x"));
        assert_eq!(seen.lock().unwrap().len(), 1);
    }
}
