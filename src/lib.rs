//! A fixed-capacity, thread-safe ring buffer with blocking and overwrite insertion.

pub use bounded_ring_core::*;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        BoundedRing, BoundedRingBuilder, Consumer, HeapRing, Producer, RingConsumer, RingError,
        RingGuard, RingInfo, RingProducer, RingTrait, StorageKind,
    };
}
