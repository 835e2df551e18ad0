/// What [`push`](crate::RingBuffer::push) does when the buffer is full.
///
/// The policy is fixed at construction; both variants keep `push` infallible
/// and silent, they only differ in which element survives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverflowPolicy {
    /// Drop the incoming element; the stored ones win.
    Reject,
    /// Evict the oldest stored element to make room for the incoming one.
    #[default]
    Overwrite,
}
