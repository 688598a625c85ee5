//! Bounded ring buffer with blocking and overwrite insertion.

use core::{fmt, marker::PhantomData};

use crate::{
    cursor::{Cursor, advance, occupied},
    gate::Gate,
    iter::IterMut,
    slot::{HeapSlots, InlineSlots, Storage, StorageKind},
    trace::{debug, trace},
};

/// Maximum supported capacity (2^20 = ~1 million slots).
/// Prevents accidental huge allocations from typos like `BoundedRing<T, 1000000000>`.
pub const MAX_CAPACITY: usize = 1 << 20;

/// Fixed-capacity FIFO shared between any number of producer and consumer
/// threads.
///
/// Producers serialize on one gate and consumers on another, so a push and a
/// pop run in parallel whenever the ring is neither full nor empty. A
/// producer only touches slot `back % N` and a consumer only slot
/// `front % N`; the full/empty checks keep those apart.
///
/// # Example
///
/// ```
/// use bounded_ring_core::BoundedRing;
///
/// let ring = BoundedRing::<u32, 4>::new();
/// ring.push(1);
/// ring.push(2);
/// assert_eq!(ring.pop(), 1);
/// assert_eq!(ring.len(), 1);
/// ```
pub struct BoundedRing<T, const N: usize, S: Storage<T> = InlineSlots<T, N>> {
    pub(crate) producer: Gate,
    pub(crate) consumer: Gate,
    pub(crate) front: Cursor,
    pub(crate) back: Cursor,
    pub(crate) storage: S,
    _marker: PhantomData<T>,
}

/// A [`BoundedRing`] whose slots live in a separate heap block.
pub type HeapRing<T, const N: usize> = BoundedRing<T, N, HeapSlots<T, N>>;

// SAFETY: Slot contents are only moved in under the producer gate and out
// under the consumer gate, and shared `&T` never outlives the gate(s) that
// pin it. Values cross threads, so `T: Send` is required for both.
unsafe impl<T: Send, const N: usize, S: Storage<T> + Send> Send for BoundedRing<T, N, S> {}
unsafe impl<T: Send, const N: usize, S: Storage<T> + Send> Sync for BoundedRing<T, N, S> {}

// ── Constructors ─────────────────────────────────────────────────────

impl<T, const N: usize> BoundedRing<T, N> {
    /// Create a builder for configuring a [`BoundedRing`].
    ///
    /// # Example
    ///
    /// ```
    /// use bounded_ring_core::{BoundedRing, StorageKind};
    ///
    /// let ring = BoundedRing::<u64, 1000>::builder().heap().build();
    /// assert_eq!(ring.storage_kind(), StorageKind::Heap);
    /// ```
    pub fn builder() -> crate::builder::BoundedRingBuilder<T, N> {
        crate::builder::BoundedRingBuilder::new()
    }

    /// Create an empty ring with inline slot storage.
    #[must_use]
    pub fn new() -> Self {
        Self::allocate()
    }

    /// Create an empty ring whose slots live in a heap block.
    ///
    /// The ring itself stays small regardless of `N`.
    #[must_use]
    pub fn new_heap() -> HeapRing<T, N> {
        HeapRing::<T, N>::allocate()
    }
}

impl<T, const N: usize, S: Storage<T>> BoundedRing<T, N, S> {
    pub(crate) fn allocate() -> Self {
        const { assert!(N > 0, "capacity must be > 0") };
        const { assert!(N <= MAX_CAPACITY, "capacity exceeds maximum (2^20)") };

        Self {
            producer: Gate::new(),
            consumer: Gate::new(),
            front: Cursor::new(0),
            back: Cursor::new(0),
            storage: S::allocate(),
            _marker: PhantomData,
        }
    }

    /// Storage backing chosen at construction.
    #[inline]
    #[must_use]
    pub const fn storage_kind(&self) -> StorageKind {
        S::KIND
    }
}

// ── Producer side ────────────────────────────────────────────────────

impl<T, const N: usize, S: Storage<T>> BoundedRing<T, N, S> {
    /// Push an item, blocking while the ring is full.
    ///
    /// Wakes at most one consumer blocked in [`pop`](Self::pop).
    pub fn push(&self, item: T) {
        let guard = self.producer.lock();
        let guard = self.producer.wait_while(guard, || {
            let full = occupied::<N>(self.front.load(), self.back.load()) >= N;
            if full {
                trace!(capacity = N, "push waiting for space");
            }
            full
        });

        let back = self.back.load();
        // SAFETY: Ring is not full and `back` only moves under the producer
        // gate we hold, so slot `back % N` is vacant and no consumer reads it
        // until the store below publishes it.
        unsafe { self.storage.slot(back).write(item) };
        self.back.store(advance::<N>(back, 1));
        drop(guard);

        self.consumer.wake_one();
    }

    /// Push an item without ever blocking. **Lossy.**
    ///
    /// If the ring is full the oldest item is evicted and returned; drop it
    /// to discard it. Callers that must not lose data use [`push`](Self::push).
    ///
    /// ```
    /// use bounded_ring_core::BoundedRing;
    ///
    /// let ring = BoundedRing::<u32, 2>::new();
    /// assert_eq!(ring.push_overwrite(1), None);
    /// assert_eq!(ring.push_overwrite(2), None);
    /// assert_eq!(ring.push_overwrite(3), Some(1));
    /// assert_eq!(ring.pop(), 2);
    /// ```
    pub fn push_overwrite(&self, item: T) -> Option<T> {
        let guard = self.producer.lock();
        let back = self.back.load();

        let evicted = if occupied::<N>(self.front.load(), back) >= N {
            // Eviction moves `front`, which belongs to the consumer side.
            let consumer = self.consumer.lock();
            let front = self.front.load();
            let evicted = if occupied::<N>(front, back) >= N {
                // SAFETY: Ring is full, so slot `front % N` is initialized;
                // both gates are held, so no consumer is reading it.
                let oldest = unsafe { self.storage.slot(front).read() };
                self.front.store(advance::<N>(front, 1));
                trace!(capacity = N, "overwrite evicted oldest item");
                Some(oldest)
            } else {
                None
            };
            drop(consumer);
            evicted
        } else {
            None
        };

        // SAFETY: There is room now (a consumer raced us or we evicted), and
        // the producer gate is held, so slot `back % N` is vacant.
        unsafe { self.storage.slot(back).write(item) };
        self.back.store(advance::<N>(back, 1));
        drop(guard);

        self.consumer.wake_one();
        evicted
    }
}

// ── Consumer side ────────────────────────────────────────────────────

impl<T, const N: usize, S: Storage<T>> BoundedRing<T, N, S> {
    /// Pop the oldest item, blocking while the ring is empty.
    ///
    /// The value is moved out of its slot; for `T: Copy` this is a plain
    /// copy. Wakes at most one producer blocked in [`push`](Self::push).
    #[must_use]
    pub fn pop(&self) -> T {
        let guard = self.consumer.lock();
        let guard = self.consumer.wait_while(guard, || {
            let empty = self.front.load() == self.back.load();
            if empty {
                trace!("pop waiting for an item");
            }
            empty
        });

        let front = self.front.load();
        // SAFETY: Ring is non-empty and `front` only moves under the consumer
        // gate we hold, so slot `front % N` is initialized and no producer
        // writes it until the store below frees it.
        let item = unsafe { self.storage.slot(front).read() };
        self.front.store(advance::<N>(front, 1));
        drop(guard);

        self.producer.wake_one();
        item
    }

    /// Drop every buffered item and return how many were removed.
    ///
    /// Leaves `front == back` and wakes every producer blocked on a full ring.
    /// Panic-safe: `front` advances past each item before it is dropped, and
    /// producers are woken even if an item's `Drop` panics.
    pub fn clear(&self) -> usize {
        let _producer = self.producer.lock_waking_all();
        let _consumer = self.consumer.lock();

        let back = self.back.load();
        let start = self.front.load();
        let mut front = start;
        while front != back {
            // SAFETY: Slots in [front, back) are initialized and both gates
            // are held.
            let item = unsafe { self.storage.slot(front).read() };
            front = advance::<N>(front, 1);
            self.front.store(front);
            drop(item);
        }

        let cleared = occupied::<N>(start, back);
        debug!(cleared, "ring cleared");
        cleared
    }
}

// ── Queries ──────────────────────────────────────────────────────────

impl<T, const N: usize, S: Storage<T>> BoundedRing<T, N, S> {
    /// Consistent `(front, back)` snapshot.
    fn cursors(&self) -> (usize, usize) {
        let _producer = self.producer.lock();
        let _consumer = self.consumer.lock();
        (self.front.load(), self.back.load())
    }

    /// Number of items in the ring.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        let (front, back) = self.cursors();
        occupied::<N>(front, back)
    }

    /// True if empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        let (front, back) = self.cursors();
        front == back
    }

    /// True if full.
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        let (front, back) = self.cursors();
        occupied::<N>(front, back) == N
    }

    /// Ring capacity.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Lock both gates, returning a stable view of the contents.
    ///
    /// Every push and pop blocks until the guard is dropped.
    pub fn lock(&self) -> crate::read::RingGuard<'_, T, N, S> {
        crate::read::RingGuard::new(self, self.producer.lock(), self.consumer.lock())
    }
}

// ── Exclusive access ─────────────────────────────────────────────────

impl<T, const N: usize, S: Storage<T>> BoundedRing<T, N, S> {
    /// Iterate mutably, oldest to newest.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T, N, S> {
        IterMut::new(self)
    }

    /// Drain all items from the ring, oldest to newest.
    #[inline]
    pub fn drain(&mut self) -> Drain<'_, T, N, S> {
        Drain { ring: self }
    }

    /// Pop with exclusive access (no locking).
    #[inline]
    fn pop_mut(&mut self) -> Option<T> {
        let front = self.front.load_mut();
        let back = self.back.load_mut();
        if front == back {
            return None;
        }
        // SAFETY: Slot at front is initialized (front != back) and `&mut self`
        // rules out every other accessor.
        let item = unsafe { self.storage.slot(front).read() };
        self.front.store_mut(advance::<N>(front, 1));
        Some(item)
    }
}

/// Draining iterator over a [`BoundedRing`].
pub struct Drain<'a, T, const N: usize, S: Storage<T> = InlineSlots<T, N>> {
    ring: &'a mut BoundedRing<T, N, S>,
}

impl<T, const N: usize, S: Storage<T>> Iterator for Drain<'_, T, N, S> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.ring.pop_mut()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = occupied::<N>(self.ring.front.load(), self.ring.back.load());
        (len, Some(len))
    }
}

impl<T, const N: usize, S: Storage<T>> ExactSizeIterator for Drain<'_, T, N, S> {}

impl<T, const N: usize> Default for BoundedRing<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, const N: usize, S: Storage<T>> fmt::Debug for BoundedRing<T, N, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.lock();
        f.debug_struct("BoundedRing")
            .field("storage", &self.storage_kind())
            .field("capacity", &N)
            .field("items", &view.iter().collect::<Vec<_>>())
            .finish()
    }
}

/// On drop, remaining items are dropped in place, oldest first.
impl<T, const N: usize, S: Storage<T>> Drop for BoundedRing<T, N, S> {
    fn drop(&mut self) {
        while self.pop_mut().is_some() {}
    }
}
