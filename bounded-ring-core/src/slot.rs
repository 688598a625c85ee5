//! Slot storage: one fixed-length array, inline or heap-backed.

use core::{cell::UnsafeCell, mem::MaybeUninit};

use crate::trace::debug;

/// Slot wrapper holding one item in the ring buffer.
///
/// Crate-internal: the `slot` module is private and only the storage types
/// are re-exported.
#[repr(transparent)]
pub struct Slot<T> {
    data: UnsafeCell<MaybeUninit<T>>,
}

impl<T> Slot<T> {
    pub(crate) const fn new() -> Self {
        Self {
            data: UnsafeCell::new(MaybeUninit::uninit()),
        }
    }

    /// # Safety
    /// Caller must own the slot (it is vacant and no other thread can reach it).
    #[inline]
    pub(crate) unsafe fn write(&self, item: T) {
        unsafe { (*self.data.get()).write(item) };
    }

    /// Move the value out. The slot is vacant afterwards.
    ///
    /// # Safety
    /// Slot must be initialized and owned by the caller.
    #[inline]
    pub(crate) unsafe fn read(&self) -> T {
        unsafe { (*self.data.get()).assume_init_read() }
    }

    /// # Safety
    /// Slot must be initialized and must not be written or read out while
    /// the returned reference is alive.
    #[inline]
    pub(crate) unsafe fn get(&self) -> &T {
        unsafe { (*self.data.get()).assume_init_ref() }
    }

    #[inline]
    pub(crate) fn as_mut_ptr(&self) -> *mut T {
        self.data.get().cast::<T>()
    }
}

/// Where a ring keeps its slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKind {
    /// Slots are embedded in the ring itself.
    Inline,
    /// Slots live in a separate heap block owned by the ring.
    Heap,
}

mod sealed {
    use super::Slot;

    pub trait Sealed<T> {
        fn allocate() -> Self;

        /// Slot for a raw (unreduced) cursor value.
        fn slot(&self, cursor: usize) -> &Slot<T>;
    }
}

/// Backing array of a [`BoundedRing`](crate::BoundedRing).
///
/// Sealed: implemented by [`InlineSlots`] and [`HeapSlots`] only.
pub trait Storage<T>: sealed::Sealed<T> {
    /// Which backing this is.
    const KIND: StorageKind;
}

/// `N` slots embedded in the ring.
pub struct InlineSlots<T, const N: usize>([Slot<T>; N]);

/// `N` slots in a heap block exclusively owned by the ring.
pub struct HeapSlots<T, const N: usize>(Box<[Slot<T>]>);

impl<T, const N: usize> sealed::Sealed<T> for InlineSlots<T, N> {
    fn allocate() -> Self {
        Self([const { Slot::new() }; N])
    }

    #[inline]
    fn slot(&self, cursor: usize) -> &Slot<T> {
        &self.0[cursor % N]
    }
}

impl<T, const N: usize> Storage<T> for InlineSlots<T, N> {
    const KIND: StorageKind = StorageKind::Inline;
}

impl<T, const N: usize> sealed::Sealed<T> for HeapSlots<T, N> {
    fn allocate() -> Self {
        debug!(capacity = N, "allocating heap slot storage");
        Self((0..N).map(|_| Slot::new()).collect())
    }

    #[inline]
    fn slot(&self, cursor: usize) -> &Slot<T> {
        &self.0[cursor % N]
    }
}

impl<T, const N: usize> Storage<T> for HeapSlots<T, N> {
    const KIND: StorageKind = StorageKind::Heap;
}
