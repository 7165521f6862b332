//! Single-slot debounce timer
//!
//! Each search session owns one `Debouncer`. Scheduling a task replaces any
//! task still waiting in the slot, so only the latest query ever reaches the
//! remote backend.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::debug;

struct Pending {
    id: u64,
    handle: JoinHandle<()>,
}

/// Cancellable one-shot delay with room for a single pending task
pub struct Debouncer {
    slot: Arc<Mutex<Option<Pending>>>,
    next_id: AtomicU64,
}

impl Debouncer {
    pub fn new() -> Self {
        Self {
            slot: Arc::new(Mutex::new(None)),
            next_id: AtomicU64::new(0),
        }
    }

    /// Run `task` once `delay` has elapsed, unless cancelled or replaced first
    ///
    /// Returns true when a still-pending task was dropped to make room.
    /// Must be called from within a tokio runtime.
    pub fn schedule<F>(&self, delay: Duration, task: F) -> bool
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let mut slot = lock(&self.slot);
        let superseded = abort_pending(&mut slot);

        let shared = Arc::clone(&self.slot);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            // Leave the slot before running so a later cancel() cannot abort
            // work that has already started.
            {
                let mut slot = lock(&shared);
                match slot.as_ref() {
                    Some(pending) if pending.id == id => {
                        slot.take();
                    }
                    _ => return,
                }
            }

            debug!("debounce timer {} fired after {:?}", id, delay);
            task.await;
        });

        *slot = Some(Pending { id, handle });
        superseded
    }

    /// Drop the pending task, if any. Returns whether one was pending.
    pub fn cancel(&self) -> bool {
        abort_pending(&mut lock(&self.slot))
    }

    pub fn is_pending(&self) -> bool {
        lock(&self.slot).is_some()
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn lock(slot: &Mutex<Option<Pending>>) -> MutexGuard<'_, Option<Pending>> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

fn abort_pending(slot: &mut Option<Pending>) -> bool {
    match slot.take() {
        Some(pending) => {
            pending.handle.abort();
            debug!("debounce timer {} cancelled", pending.id);
            true
        }
        None => false,
    }
}
