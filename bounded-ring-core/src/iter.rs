//! Iterators for `BoundedRing`.

use core::{iter::FusedIterator, marker::PhantomData};

use crate::{
    BoundedRing,
    cursor::{advance, occupied},
    slot::{InlineSlots, Storage},
};

/// Immutable iterator, oldest to newest.
///
/// Borrowed from a [`RingGuard`](crate::RingGuard), whose locks keep every
/// yielded slot in place. Covers the items present when it was created.
pub struct Iter<'a, T, S: Storage<T>> {
    storage: &'a S,
    pos: usize,
    len: usize,
    // Physical index of the oldest item (< N), so `head + pos` cannot overflow.
    head: usize,
    _marker: PhantomData<&'a T>,
}

impl<'a, T, S: Storage<T>> Iter<'a, T, S> {
    pub(crate) fn new(storage: &'a S, head: usize, len: usize) -> Self {
        Self {
            storage,
            pos: 0,
            len,
            head,
            _marker: PhantomData,
        }
    }
}

impl<'a, T, S: Storage<T>> Iterator for Iter<'a, T, S> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.len {
            return None;
        }
        let cursor = self.head + self.pos;
        self.pos += 1;
        // SAFETY: The guard this iterator borrows from holds both gates, so
        // slots in [head, head+len) stay initialized and unmoved for 'a.
        Some(unsafe { self.storage.slot(cursor).get() })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.pos;
        (remaining, Some(remaining))
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        if n >= self.len - self.pos {
            self.pos = self.len;
            return None;
        }
        self.pos += n;
        self.next()
    }
}

impl<T, S: Storage<T>> ExactSizeIterator for Iter<'_, T, S> {}
impl<T, S: Storage<T>> FusedIterator for Iter<'_, T, S> {}

/// Mutable iterator.
///
/// Stores a raw pointer to avoid creating `&mut T` through a shared reference.
/// The lifetime `'a` is enforced via `PhantomData`.
pub struct IterMut<'a, T, const N: usize, S: Storage<T> = InlineSlots<T, N>> {
    ring: *mut BoundedRing<T, N, S>,
    pos: usize,
    len: usize,
    head: usize,
    _marker: PhantomData<&'a mut BoundedRing<T, N, S>>,
}

impl<'a, T, const N: usize, S: Storage<T>> IterMut<'a, T, N, S> {
    pub(crate) fn new(ring: &'a mut BoundedRing<T, N, S>) -> Self {
        let head = ring.front.load_mut();
        let len = occupied::<N>(head, ring.back.load_mut());
        Self {
            ring: core::ptr::from_mut(ring),
            pos: 0,
            len,
            head,
            _marker: PhantomData,
        }
    }
}

impl<'a, T, const N: usize, S: Storage<T>> Iterator for IterMut<'a, T, N, S> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.len {
            return None;
        }
        let cursor = advance::<N>(self.head, self.pos);
        self.pos += 1;
        // SAFETY: `ring` comes from the `&mut BoundedRing` in `new()`. Each
        // cursor is yielded once, so no aliasing occurs, and the slot is
        // initialized (pos < len).
        Some(unsafe { &mut *(*self.ring).storage.slot(cursor).as_mut_ptr() })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.pos;
        (remaining, Some(remaining))
    }
}

impl<T, const N: usize, S: Storage<T>> ExactSizeIterator for IterMut<'_, T, N, S> {}
impl<T, const N: usize, S: Storage<T>> FusedIterator for IterMut<'_, T, N, S> {}

impl<'a, T, const N: usize, S: Storage<T>> IntoIterator for &'a mut BoundedRing<T, N, S> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T, N, S>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IterMut::new(self)
    }
}
