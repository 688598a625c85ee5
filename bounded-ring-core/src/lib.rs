//! Core implementation for `bounded_ring`.
//!
//! A fixed-capacity FIFO ring shared by any number of producer and consumer
//! threads. [`BoundedRing::push`] blocks while the ring is full,
//! [`BoundedRing::push_overwrite`] evicts the oldest item instead, and
//! [`BoundedRing::pop`] blocks while the ring is empty.
//!
//! Waiting has no timeout and cannot be cancelled; layer that outside the
//! ring if needed.

#![warn(missing_docs)]

mod builder;
mod cursor;
mod error;
mod gate;
mod handle;
mod iter;
mod read;
mod ring;
mod slot;
mod trace;
mod traits;

#[cfg(test)]
mod tests;

pub use builder::BoundedRingBuilder;
pub use error::{Result, RingError};
pub use handle::{Consumer, Producer};
pub use iter::{Iter, IterMut};
pub use read::RingGuard;
pub use ring::{BoundedRing, Drain, HeapRing, MAX_CAPACITY};
pub use slot::{HeapSlots, InlineSlots, Storage, StorageKind};
pub use trace::init_tracing;
pub use traits::{RingConsumer, RingInfo, RingProducer, RingTrait};
