//! Error types for ring access.

use snafu::Snafu;

/// Error reported by checked ring accessors.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub(crate)))]
#[non_exhaustive]
pub enum RingError {
    /// Logical index past the occupied range.
    #[snafu(display("index out of bounds: the len is {len} but the index is {index}"))]
    OutOfBounds {
        /// Requested logical index (0 = oldest).
        index: usize,
        /// Items in the ring when the access was made.
        len: usize,
    },
}

/// Result type for ring operations.
pub type Result<T, E = RingError> = core::result::Result<T, E>;
