use thiserror::Error;

/// Failures reported by [`RingBuffer`](crate::RingBuffer) operations.
///
/// Every failure is synchronous and leaves the buffer untouched: the
/// operation that reported it performed no mutation, so callers can adjust
/// and retry.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The requested capacity was zero; a ring needs at least one slot.
    #[error("invalid capacity")]
    InvalidCapacity,
    /// `pop` was called on a buffer holding no live elements.
    #[error("reading from an empty buffer")]
    EmptyBuffer,
    /// `peek` was called with no unread data ahead of the cursor.
    #[error("cannot peek this buffer")]
    CannotPeek,
}
