//! Builder pattern for constructing ring buffers.

use core::marker::PhantomData;

use crate::{
    BoundedRing,
    slot::{HeapSlots, InlineSlots, Storage},
};

/// Builder for constructing a [`BoundedRing`].
///
/// Created via [`BoundedRing::builder()`]. Configure options with chained
/// methods, then call [`.build()`](Self::build) to construct the ring.
///
/// # Example
///
/// ```
/// use bounded_ring_core::{BoundedRing, StorageKind};
///
/// // Default: inline slots
/// let ring = BoundedRing::<u64, 256>::builder().build();
/// assert_eq!(ring.storage_kind(), StorageKind::Inline);
///
/// // Slots in a separate heap block
/// let ring = BoundedRing::<u64, 256>::builder().heap().build();
/// assert_eq!(ring.storage_kind(), StorageKind::Heap);
/// ```
pub struct BoundedRingBuilder<T, const N: usize, S: Storage<T> = InlineSlots<T, N>> {
    _marker: PhantomData<fn() -> (T, S)>,
}

impl<T, const N: usize> BoundedRingBuilder<T, N> {
    pub(crate) fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T, const N: usize, S: Storage<T>> BoundedRingBuilder<T, N, S> {
    /// Keep the slots inside the ring (the default).
    #[must_use]
    pub fn inline(self) -> BoundedRingBuilder<T, N, InlineSlots<T, N>> {
        BoundedRingBuilder {
            _marker: PhantomData,
        }
    }

    /// Allocate the slots as a separate heap block.
    ///
    /// The ring itself then stays small, which matters for large `N`.
    #[must_use]
    pub fn heap(self) -> BoundedRingBuilder<T, N, HeapSlots<T, N>> {
        BoundedRingBuilder {
            _marker: PhantomData,
        }
    }

    /// Build the [`BoundedRing`].
    pub fn build(self) -> BoundedRing<T, N, S> {
        BoundedRing::allocate()
    }
}
