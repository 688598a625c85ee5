//! Producer and consumer traits shared by the ring, its handles and `Arc`.

use std::sync::Arc;

use crate::{BoundedRing, slot::Storage};

/// Common ring buffer properties.
/// Provides size and capacity information shared by both producers and consumers.
pub trait RingInfo {
    /// Returns the number of items currently in the ring.
    fn len(&self) -> usize;

    /// Returns the total capacity of the ring.
    fn capacity(&self) -> usize;

    /// Returns `true` if the ring contains no items.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if the ring has no available capacity.
    fn is_full(&self) -> bool {
        self.len() >= self.capacity()
    }
}

/// Producer side of a shared ring buffer.
///
/// Both methods take `&self`; any number of threads may push at once.
///
/// See [`BoundedRing`] for the primary implementation.
pub trait RingProducer<T>: RingInfo {
    /// Pushes an item, blocking while the ring is full.
    fn push(&self, item: T);

    /// Pushes an item without blocking, evicting and returning the oldest
    /// item if the ring is full. Lossy.
    fn push_overwrite(&self, item: T) -> Option<T>;
}

/// Consumer side of a shared ring buffer.
///
/// See [`BoundedRing`] for the primary implementation.
pub trait RingConsumer<T>: RingInfo {
    /// Pops the oldest item, blocking while the ring is empty.
    #[must_use]
    fn pop(&self) -> T;
}

/// Combined producer and consumer trait.
///
/// Automatically implemented for any type that implements both
/// [`RingProducer`] and [`RingConsumer`].
pub trait RingTrait<T>: RingProducer<T> + RingConsumer<T> {}

impl<T, R: RingProducer<T> + RingConsumer<T>> RingTrait<T> for R {}

impl<T, const N: usize, S: Storage<T>> RingInfo for BoundedRing<T, N, S> {
    #[inline]
    fn len(&self) -> usize {
        BoundedRing::<T, N, S>::len(self)
    }

    #[inline]
    fn capacity(&self) -> usize {
        N
    }

    #[inline]
    fn is_empty(&self) -> bool {
        BoundedRing::<T, N, S>::is_empty(self)
    }

    #[inline]
    fn is_full(&self) -> bool {
        BoundedRing::<T, N, S>::is_full(self)
    }
}

impl<T, const N: usize, S: Storage<T>> RingProducer<T> for BoundedRing<T, N, S> {
    #[inline]
    fn push(&self, item: T) {
        BoundedRing::<T, N, S>::push(self, item);
    }

    #[inline]
    fn push_overwrite(&self, item: T) -> Option<T> {
        BoundedRing::<T, N, S>::push_overwrite(self, item)
    }
}

impl<T, const N: usize, S: Storage<T>> RingConsumer<T> for BoundedRing<T, N, S> {
    #[inline]
    fn pop(&self) -> T {
        BoundedRing::<T, N, S>::pop(self)
    }
}

impl<R: RingInfo + ?Sized> RingInfo for Arc<R> {
    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn capacity(&self) -> usize {
        (**self).capacity()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }

    #[inline]
    fn is_full(&self) -> bool {
        (**self).is_full()
    }
}

impl<T, R: RingProducer<T> + ?Sized> RingProducer<T> for Arc<R> {
    #[inline]
    fn push(&self, item: T) {
        (**self).push(item);
    }

    #[inline]
    fn push_overwrite(&self, item: T) -> Option<T> {
        (**self).push_overwrite(item)
    }
}

impl<T, R: RingConsumer<T> + ?Sized> RingConsumer<T> for Arc<R> {
    #[inline]
    fn pop(&self) -> T {
        (**self).pop()
    }
}
