//! Cloneable producer and consumer handles over one shared ring.

use std::sync::Arc;

use crate::{
    BoundedRing,
    slot::{InlineSlots, Storage},
    traits::{RingConsumer, RingInfo, RingProducer},
};

impl<T, const N: usize, S: Storage<T>> BoundedRing<T, N, S> {
    /// Move the ring behind an `Arc` and hand out typed handles.
    ///
    /// Both handles are `Clone`; give one clone to each producer or consumer
    /// thread. The ring is dropped with the last handle.
    ///
    /// ```
    /// use bounded_ring_core::BoundedRing;
    ///
    /// let (tx, rx) = BoundedRing::<u32, 8>::new().split();
    /// std::thread::spawn(move || tx.push(7));
    /// assert_eq!(rx.pop(), 7);
    /// ```
    pub fn split(self) -> (Producer<T, N, S>, Consumer<T, N, S>) {
        let ring = Arc::new(self);
        (
            Producer {
                ring: Arc::clone(&ring),
            },
            Consumer { ring },
        )
    }
}

/// Producer handle for a shared [`BoundedRing`].
pub struct Producer<T, const N: usize, S: Storage<T> = InlineSlots<T, N>> {
    ring: Arc<BoundedRing<T, N, S>>,
}

impl<T, const N: usize, S: Storage<T>> Producer<T, N, S> {
    /// Push an item, blocking while the ring is full.
    #[inline]
    pub fn push(&self, item: T) {
        self.ring.push(item);
    }

    /// Push without blocking, evicting the oldest item if full. Lossy.
    #[inline]
    pub fn push_overwrite(&self, item: T) -> Option<T> {
        self.ring.push_overwrite(item)
    }

    /// Get the number of items in the ring.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    /// Check if the ring is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    /// Check if the ring is full.
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.ring.is_full()
    }

    /// Get the ring's capacity.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }
}

impl<T, const N: usize, S: Storage<T>> Clone for Producer<T, N, S> {
    fn clone(&self) -> Self {
        Self {
            ring: Arc::clone(&self.ring),
        }
    }
}

/// Consumer handle for a shared [`BoundedRing`].
pub struct Consumer<T, const N: usize, S: Storage<T> = InlineSlots<T, N>> {
    ring: Arc<BoundedRing<T, N, S>>,
}

impl<T, const N: usize, S: Storage<T>> Consumer<T, N, S> {
    /// Pop the oldest item, blocking while the ring is empty.
    #[inline]
    #[must_use]
    pub fn pop(&self) -> T {
        self.ring.pop()
    }

    /// Get the number of items in the ring.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    /// Check if the ring is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    /// Check if the ring is full.
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.ring.is_full()
    }

    /// Get the ring's capacity.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }
}

impl<T: Clone, const N: usize, S: Storage<T>> Consumer<T, N, S> {
    /// Clone of the oldest item without removing it.
    #[inline]
    #[must_use]
    pub fn front(&self) -> Option<T> {
        self.ring.front()
    }
}

impl<T, const N: usize, S: Storage<T>> Clone for Consumer<T, N, S> {
    fn clone(&self) -> Self {
        Self {
            ring: Arc::clone(&self.ring),
        }
    }
}

impl<T, const N: usize, S: Storage<T>> RingInfo for Producer<T, N, S> {
    #[inline]
    fn len(&self) -> usize {
        self.ring.len()
    }

    #[inline]
    fn capacity(&self) -> usize {
        N
    }
}

impl<T, const N: usize, S: Storage<T>> RingProducer<T> for Producer<T, N, S> {
    #[inline]
    fn push(&self, item: T) {
        self.ring.push(item);
    }

    #[inline]
    fn push_overwrite(&self, item: T) -> Option<T> {
        self.ring.push_overwrite(item)
    }
}

impl<T, const N: usize, S: Storage<T>> RingInfo for Consumer<T, N, S> {
    #[inline]
    fn len(&self) -> usize {
        self.ring.len()
    }

    #[inline]
    fn capacity(&self) -> usize {
        N
    }
}

impl<T, const N: usize, S: Storage<T>> RingConsumer<T> for Consumer<T, N, S> {
    #[inline]
    fn pop(&self) -> T {
        self.ring.pop()
    }
}
