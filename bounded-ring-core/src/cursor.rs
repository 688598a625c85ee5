//! Lapping cursors.
//!
//! Cursors count every insertion (`back`) or removal (`front`) and are only
//! reduced mod capacity when a slot is addressed. They wrap at
//! [`limit::<N>()`](limit), the largest multiple of `N` that fits a `usize`,
//! so `cursor % N` stays continuous across the wrap and two live cursors never
//! share a slot. `front == back` always means empty and an occupied count of
//! `N` always means full.

use core::sync::atomic::{AtomicUsize, Ordering};

/// A cursor written by one side under its gate and read by the other.
///
/// All accesses are `SeqCst`: the wake-up protocol relies on a store to one
/// cursor being ordered before a load of the opposite gate's waiter count.
#[repr(transparent)]
pub(crate) struct Cursor(AtomicUsize);

impl Cursor {
    #[inline]
    pub(crate) const fn new(val: usize) -> Self {
        Self(AtomicUsize::new(val))
    }

    #[inline]
    pub(crate) fn load(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }

    #[inline]
    pub(crate) fn store(&self, val: usize) {
        self.0.store(val, Ordering::SeqCst);
    }

    /// Load without atomics (exclusive access).
    #[inline]
    pub(crate) fn load_mut(&mut self) -> usize {
        *self.0.get_mut()
    }

    /// Store without atomics (exclusive access).
    #[inline]
    pub(crate) fn store_mut(&mut self, val: usize) {
        *self.0.get_mut() = val;
    }
}

/// Exclusive upper bound of cursor values for capacity `N`.
///
/// A multiple of `N`, and far larger than `N` for any capacity up to
/// [`MAX_CAPACITY`](crate::MAX_CAPACITY).
#[inline]
pub(crate) const fn limit<const N: usize>() -> usize {
    N * (usize::MAX / N)
}

/// Cursor `by` positions after `cursor`, wrapping at [`limit`].
///
/// `cursor < limit::<N>()` and `by <= limit::<N>()`.
#[inline]
pub(crate) const fn advance<const N: usize>(cursor: usize, by: usize) -> usize {
    let room = limit::<N>() - cursor;
    if by < room { cursor + by } else { by - room }
}

/// Occupied count between two cursors.
#[inline]
pub(crate) const fn occupied<const N: usize>(front: usize, back: usize) -> usize {
    if back >= front {
        back - front
    } else {
        limit::<N>() - front + back
    }
}
