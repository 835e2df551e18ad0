//! A fixed-capacity ring buffer with a committable peek cursor.
//!
//! [`RingBuffer`] stores up to a fixed number of elements chosen at
//! construction and never reallocates. When the buffer is full, a push
//! either evicts the oldest element or drops the incoming one, selected by
//! [`OverflowPolicy`]. Alongside the usual FIFO cursor pair a third cursor
//! scans live elements without consuming them: repeated
//! [`peek`](RingBuffer::peek) calls walk forward over the buffer, and the
//! walk is either abandoned ([`reset_peek`](RingBuffer::reset_peek)) or
//! committed in one step ([`remove_peeked`](RingBuffer::remove_peeked)),
//! which consumes everything the cursor passed as if it had been popped.
//!
//! ```
//! use peekring::{OverflowPolicy, RingBuffer};
//!
//! let mut ring = RingBuffer::new(4, OverflowPolicy::Overwrite)?;
//! for sample in [10_i32, 20, 30] {
//!     ring.push(sample);
//! }
//!
//! // Inspect a batch without consuming it.
//! assert_eq!(ring.peek()?, &10);
//! assert_eq!(ring.peek()?, &20);
//!
//! // Keep the batch: both peeked samples are consumed at once.
//! ring.remove_peeked();
//! assert_eq!(ring.len(), 1);
//! assert_eq!(ring.pop()?, 30);
//! # Ok::<(), peekring::Error>(())
//! ```

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod buffer;
mod error;
mod policy;


pub use buffer::RingBuffer;
pub use error::Error;
pub use policy::OverflowPolicy;
