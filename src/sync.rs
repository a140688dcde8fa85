//! Cooperative cancellation and one-shot done signalling between the
//! supervisor and a crawl worker.
//!
//! Shared state is deliberately minimal:
//! - [`CancelToken`]: a one-writer/one-reader atomic flag the crawler polls
//!   once per loop iteration. Relaxed ordering suffices: the flag is only
//!   ever set, never cleared, and carries no payload.
//! - [`WorkerSync`]: a mutex-guarded done flag with a condition variable,
//!   so the supervisor can wait with a bounded timeout without being fooled
//!   by spurious wakeups.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Condvar, Mutex};
use std::time::Duration;

// ============================================================================
// CancelToken
// ============================================================================

/// Advisory cancellation flag shared between a supervisor and one crawler.
///
/// Cloning yields another handle to the same flag.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// Creates a fresh, unset token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation. Idempotent.
    #[inline]
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Returns `true` once cancellation has been requested.
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

// ============================================================================
// WorkerSync
// ============================================================================

struct DoneSignal {
    done: Mutex<bool>,
    cond: Condvar,
}

/// One-shot done signal with a bounded wait.
///
/// The worker calls [`WorkerSync::notify_done`] when its work is finished;
/// the supervisor calls [`WorkerSync::wait_for_done`] with a timeout.
/// Cloning yields another handle to the same signal.
#[derive(Clone)]
pub struct WorkerSync {
    inner: Arc<DoneSignal>,
}

impl WorkerSync {
    /// Creates a signal in the not-done state.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(DoneSignal {
                done: Mutex::new(false),
                cond: Condvar::new(),
            }),
        }
    }

    /// Marks the work as done and wakes every waiter. Idempotent: calling
    /// more than once has the same effect as calling once.
    pub fn notify_done(&self) {
        let mut done = self.inner.done.lock().unwrap();
        *done = true;
        self.inner.cond.notify_all();
    }

    /// Waits until [`WorkerSync::notify_done`] has been called, up to
    /// `timeout`. Returns `true` iff the done flag was observed set; a
    /// spurious wakeup never produces `true`.
    pub fn wait_for_done(&self, timeout: Duration) -> bool {
        let done = self.inner.done.lock().unwrap();
        let (done, _result) = self
            .inner
            .cond
            .wait_timeout_while(done, timeout, |done| !*done)
            .unwrap();
        *done
    }
}

impl Default for WorkerSync {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================
