//! One side of the two-lock protocol.
//!
//! ```text
//!  producers                                   consumers
//!      │                                           │
//!      ▼                                           ▼
//!  ┌──────────────┐   wake_one (if waiters)  ┌──────────────┐
//!  │ producer gate│ ───────────────────────► │ consumer gate│
//!  │ lock + back  │ ◄─────────────────────── │ lock + front │
//!  └──────────────┘   wake_one (if waiters)  └──────────────┘
//! ```
//!
//! A waiter registers in `waiters` before re-checking its condition; a
//! notifier stores its cursor before reading `waiters` and only then takes
//! the waiter's mutex to notify. With `SeqCst` on both sides, either the
//! waiter sees the new cursor or the notifier sees the waiter.

use core::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};

pub(crate) struct Gate {
    lock: Mutex<()>,
    ready: Condvar,
    waiters: AtomicUsize,
}

impl Gate {
    pub(crate) const fn new() -> Self {
        Self {
            lock: Mutex::new(()),
            ready: Condvar::new(),
            waiters: AtomicUsize::new(0),
        }
    }

    /// Enter the gate's critical section.
    ///
    /// The mutex guards no data of its own and cursors are consistent at
    /// every point a user `Clone` or `Drop` can panic, so poisoning is ignored.
    #[inline]
    pub(crate) fn lock(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Block while `blocked` holds, re-checking after every wake.
    pub(crate) fn wait_while<'a>(
        &self,
        guard: MutexGuard<'a, ()>,
        mut blocked: impl FnMut() -> bool,
    ) -> MutexGuard<'a, ()> {
        if !blocked() {
            return guard;
        }
        self.waiters.fetch_add(1, Ordering::SeqCst);
        let guard = self
            .ready
            .wait_while(guard, |_| blocked())
            .unwrap_or_else(PoisonError::into_inner);
        self.waiters.fetch_sub(1, Ordering::SeqCst);
        guard
    }

    /// Wake one waiter, if any registered.
    ///
    /// Must not be called while holding the other gate's lock when that
    /// would invert the producer → consumer lock order.
    #[inline]
    pub(crate) fn wake_one(&self) {
        if self.waiters.load(Ordering::SeqCst) > 0 {
            let _guard = self.lock();
            self.ready.notify_one();
        }
    }

    /// Lock the gate and wake every waiter when the returned guard drops,
    /// including when the caller unwinds.
    #[inline]
    pub(crate) fn lock_waking_all(&self) -> WakeAll<'_> {
        WakeAll {
            gate: self,
            _guard: self.lock(),
        }
    }
}

/// Held lock on a [`Gate`]; notifies all of its waiters on drop, before the
/// lock is released.
pub(crate) struct WakeAll<'a> {
    gate: &'a Gate,
    _guard: MutexGuard<'a, ()>,
}

impl Drop for WakeAll<'_> {
    fn drop(&mut self) {
        self.gate.ready.notify_all();
    }
}
