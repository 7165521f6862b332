//! Search orchestration module
//!
//! Sequences the local history lookup, the debounced remote lookup and the
//! merge of both into dispatched actions.

mod session;

pub use session::SearchSession;
