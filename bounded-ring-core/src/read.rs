//! Read accessors for `BoundedRing`.
//!
//! A shared read has to pin the slot it touches. The oldest item is pinned by
//! the consumer gate alone (producers never write an occupied slot, and
//! eviction needs the consumer gate too); any other position also needs the
//! producer gate, so [`RingGuard`] holds both.

use core::{marker::PhantomData, ops::Index};
use std::sync::MutexGuard;

use snafu::ensure;

use crate::{
    BoundedRing,
    cursor::{advance, occupied},
    error::{OutOfBoundsSnafu, Result},
    iter::Iter,
    slot::{InlineSlots, Storage},
};

impl<T: Clone, const N: usize, S: Storage<T>> BoundedRing<T, N, S> {
    /// Clone of the oldest item, or `None` if empty.
    #[must_use]
    pub fn front(&self) -> Option<T> {
        let _consumer = self.consumer.lock();
        let front = self.front.load();
        if front == self.back.load() {
            return None;
        }
        // SAFETY: Slot at front is initialized (front != back). The consumer
        // gate keeps it from being popped or evicted during the clone.
        Some(unsafe { self.storage.slot(front).get() }.clone())
    }

    /// Clone of the newest item, or `None` if empty.
    #[must_use]
    pub fn back(&self) -> Option<T> {
        self.lock().back().cloned()
    }

    /// Clone of the item at logical `index` (0 = oldest).
    ///
    /// # Errors
    ///
    /// Returns [`RingError::OutOfBounds`](crate::RingError::OutOfBounds) if
    /// `index >= len()`.
    pub fn get(&self, index: usize) -> Result<T> {
        let view = self.lock();
        let len = view.len();
        ensure!(index < len, OutOfBoundsSnafu { index, len });
        Ok(view[index].clone())
    }
}

/// Locked view of a [`BoundedRing`], created by [`BoundedRing::lock`].
///
/// Holds both gates, so the contents cannot change while it is alive. Do not
/// push or pop on the same ring from the thread holding the guard; that call
/// would wait for the guard forever.
pub struct RingGuard<'a, T, const N: usize, S: Storage<T> = InlineSlots<T, N>> {
    ring: &'a BoundedRing<T, N, S>,
    front: usize,
    len: usize,
    _producer: MutexGuard<'a, ()>,
    _consumer: MutexGuard<'a, ()>,
    // References handed out are shared with whichever thread holds `&RingGuard`.
    _marker: PhantomData<&'a T>,
}

impl<'a, T, const N: usize, S: Storage<T>> RingGuard<'a, T, N, S> {
    pub(crate) fn new(
        ring: &'a BoundedRing<T, N, S>,
        producer: MutexGuard<'a, ()>,
        consumer: MutexGuard<'a, ()>,
    ) -> Self {
        let front = ring.front.load();
        let len = occupied::<N>(front, ring.back.load());
        Self {
            ring,
            front,
            len,
            _producer: producer,
            _consumer: consumer,
            _marker: PhantomData,
        }
    }

    /// Number of items in the view.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True if full.
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.len == N
    }

    /// Peek at the oldest item.
    #[inline]
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Peek at the newest item.
    #[inline]
    #[must_use]
    pub fn back(&self) -> Option<&T> {
        self.get(self.len.checked_sub(1)?)
    }

    /// Get item by index (0 = oldest).
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        // SAFETY: Slot at front+index is initialized (index < len) and both
        // gates are held for the guard's lifetime, so nothing moves it.
        Some(unsafe { self.ring.storage.slot(advance::<N>(self.front, index)).get() })
    }

    /// Iterate oldest to newest.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T, S> {
        Iter::new(&self.ring.storage, self.front % N, self.len)
    }
}

impl<T, const N: usize, S: Storage<T>> Index<usize> for RingGuard<'_, T, N, S> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Some(item) => item,
            None => panic!(
                "index out of bounds: the len is {} but the index is {index}",
                self.len
            ),
        }
    }
}

impl<'g, T, const N: usize, S: Storage<T>> IntoIterator for &'g RingGuard<'_, T, N, S> {
    type Item = &'g T;
    type IntoIter = Iter<'g, T, S>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
