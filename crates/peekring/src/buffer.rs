use alloc::boxed::Box;

use crate::{error::Error, policy::OverflowPolicy};

/// A fixed-capacity ring buffer with a committable peek cursor.
///
/// Elements enter at the write end and leave from the read end in FIFO
/// order. The buffer never reallocates: once `capacity` elements are live, a
/// further [`push`](Self::push) either evicts the oldest element or drops
/// the incoming one, as selected by the [`OverflowPolicy`] fixed at
/// construction.
///
/// A third cursor supports non-destructive scans: [`peek`](Self::peek)
/// returns the next unread element and moves the cursor forward without
/// consuming anything. The scan is rewound with
/// [`reset_peek`](Self::reset_peek) or committed with
/// [`remove_peeked`](Self::remove_peeked), which consumes every element the
/// cursor passed in one O(1) step.
///
/// The buffer performs no synchronization. All mutation goes through
/// `&mut self`, so sharing it between execution contexts requires external
/// serialization (a mutex around the whole structure, or a caller-enforced
/// handoff discipline).
///
/// # Examples
///
/// ```
/// use peekring::{OverflowPolicy, RingBuffer};
///
/// let mut ring = RingBuffer::new(3, OverflowPolicy::Overwrite)?;
/// ring.push(1);
/// ring.push(2);
/// ring.push(3);
/// ring.push(4); // full: 1 is evicted
///
/// assert_eq!(ring.pop()?, 2);
/// assert_eq!(ring.len(), 2);
/// # Ok::<(), peekring::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct RingBuffer<T> {
    slots: Box<[Option<T>]>,
    policy: OverflowPolicy,
    start: usize,
    end: usize,
    peek_start: usize,
    peeked: usize,
    len: usize,
    full: bool,
    peek_empty: bool,
}

impl<T> RingBuffer<T> {
    /// Creates an empty buffer with room for exactly `capacity` elements.
    ///
    /// The slot block is allocated here and freed when the buffer is
    /// dropped; no other operation allocates.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCapacity`] when `capacity` is zero.
    pub fn new(capacity: usize, policy: OverflowPolicy) -> Result<Self, Error> {
        if capacity < 1 {
            return Err(Error::InvalidCapacity);
        }
        Ok(Self {
            slots: (0..capacity).map(|_| None).collect(),
            policy,
            start: 0,
            end: 0,
            peek_start: 0,
            peeked: 0,
            len: 0,
            full: false,
            peek_empty: true,
        })
    }

    /// Number of slots the buffer was constructed with.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of live (pushed and not yet consumed) elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the buffer holds no live elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end && !self.full
    }

    /// Whether every slot holds a live element.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.full
    }

    /// Whether [`peek`](Self::peek) has unread data ahead of the cursor.
    #[must_use]
    pub fn can_peek(&self) -> bool {
        !self.is_empty() && !self.peek_empty
    }

    /// The overflow policy fixed at construction.
    #[must_use]
    pub fn policy(&self) -> OverflowPolicy {
        self.policy
    }

    /// Appends `item` after the newest element.
    ///
    /// On a full buffer the policy decides the outcome:
    /// [`Overwrite`](OverflowPolicy::Overwrite) evicts the oldest element to
    /// make room, [`Reject`](OverflowPolicy::Reject) drops `item` with no
    /// other effect. An eviction that lands on the peek cursor pulls the
    /// cursor forward in lock-step, keeping it on the oldest unread element;
    /// the pending peek count is not adjusted.
    ///
    /// Every push that stores an element re-arms the peek cursor
    /// (`can_peek` becomes true on a non-empty buffer), even when the cursor
    /// had already scanned to the end.
    pub fn push(&mut self, item: T) {
        if self.policy == OverflowPolicy::Reject && self.is_full() {
            return;
        }

        self.slots[self.end] = Some(item);
        self.end = Self::wrap_inc(self.end, self.slots.len());

        if self.is_full() {
            self.advance_start();
        } else {
            self.len += 1;
            if self.end == self.start {
                self.full = true;
            }
        }

        self.peek_empty = false;
    }

    /// Removes and returns the oldest live element.
    ///
    /// A peek cursor sitting on that element with unread data is pulled
    /// forward in lock-step, the same adjustment an eviction makes; a cursor
    /// strictly ahead of the read end is left alone.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyBuffer`] when no live element exists.
    pub fn pop(&mut self) -> Result<T, Error> {
        if self.is_empty() {
            return Err(Error::EmptyBuffer);
        }

        // The oldest slot of a non-empty buffer always holds an element.
        let item = self.slots[self.start].take().ok_or(Error::EmptyBuffer)?;
        self.full = false;
        self.advance_start();
        if self.start == self.end {
            self.peek_empty = true;
        }
        self.len = self.len.saturating_sub(1);
        Ok(item)
    }

    /// Returns the next unread element and advances the peek cursor past it.
    ///
    /// The element stays live in the buffer. Repeated calls walk forward
    /// over the live window until the cursor reaches the write end, after
    /// which peeking fails until new data is pushed, the cursor is rewound
    /// with [`reset_peek`](Self::reset_peek), or the scan is committed with
    /// [`remove_peeked`](Self::remove_peeked).
    ///
    /// # Errors
    ///
    /// Returns [`Error::CannotPeek`] when the buffer is empty or the cursor
    /// has no unread data ahead of it.
    ///
    /// # Examples
    ///
    /// ```
    /// use peekring::{Error, OverflowPolicy, RingBuffer};
    ///
    /// let mut ring = RingBuffer::new(2, OverflowPolicy::Reject)?;
    /// ring.push("a");
    /// ring.push("b");
    ///
    /// assert_eq!(ring.peek()?, &"a");
    /// assert_eq!(ring.peek()?, &"b");
    /// assert_eq!(ring.peek(), Err(Error::CannotPeek));
    /// assert_eq!(ring.len(), 2); // nothing was consumed
    /// # Ok::<(), peekring::Error>(())
    /// ```
    pub fn peek(&mut self) -> Result<&T, Error> {
        if !self.can_peek() {
            return Err(Error::CannotPeek);
        }

        let at = self.peek_start;
        let capacity = self.slots.len();
        // The cursor stays inside the live window, which is always occupied.
        let Some(item) = self.slots[at].as_ref() else {
            return Err(Error::CannotPeek);
        };

        self.peek_start = Self::wrap_inc(at, capacity);
        if self.peek_start == self.end {
            self.peek_empty = true;
        }
        self.peeked += 1;
        Ok(item)
    }

    /// Rewinds the peek cursor to the oldest live element and forgets the
    /// pending peek count, starting a fresh scan.
    pub fn reset_peek(&mut self) {
        self.peek_start = self.start;
        self.peek_empty = self.is_empty();
        self.peeked = 0;
    }

    /// Consumes everything peeked since the last reset in one step.
    ///
    /// The read end jumps to the peek cursor, as if each peeked element had
    /// been popped without returning it (the caller already saw the values).
    /// With no peeked data pending (nothing peeked yet, or an empty buffer)
    /// this changes nothing.
    ///
    /// The commit moves cursors only and is O(1); committed slots keep their
    /// elements until a later push overwrites them or the buffer is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use peekring::{OverflowPolicy, RingBuffer};
    ///
    /// let mut ring = RingBuffer::new(4, OverflowPolicy::Overwrite)?;
    /// for n in 1..=4 {
    ///     ring.push(n);
    /// }
    ///
    /// // Scan two elements, then consume exactly those two.
    /// ring.peek()?;
    /// ring.peek()?;
    /// ring.remove_peeked();
    ///
    /// assert_eq!(ring.len(), 2);
    /// assert_eq!(ring.pop()?, 3);
    /// # Ok::<(), peekring::Error>(())
    /// ```
    pub fn remove_peeked(&mut self) {
        if self.peeked_data() {
            self.start = self.peek_start;
            self.full = false;
            self.len = self.len.saturating_sub(self.peeked);
            self.peeked = 0;
        }
    }

    /// Resets every cursor to the empty state without reallocating.
    ///
    /// Slot contents are left in place: surviving elements are dropped when
    /// a later push overwrites their slot or the buffer itself is dropped.
    pub fn clear(&mut self) {
        self.start = 0;
        self.end = 0;
        self.full = false;
        self.peek_empty = true;
        self.peek_start = 0;
        self.peeked = 0;
        self.len = 0;
    }

    /// Whether the peek cursor has pending data to commit: it has moved past
    /// the read end, or a full buffer was scanned all the way around.
    fn peeked_data(&self) -> bool {
        self.peek_start != self.start || (self.is_full() && self.peek_empty)
    }

    /// Advances the read end one slot, dragging a caught-up peek cursor
    /// along: a cursor equal to `start` with unread data would otherwise be
    /// left on a slot whose element is gone. Shared by pop and eviction.
    fn advance_start(&mut self) {
        let capacity = self.slots.len();
        if self.start == self.peek_start && !self.peek_empty {
            self.peek_start = Self::wrap_inc(self.peek_start, capacity);
        }
        self.start = Self::wrap_inc(self.start, capacity);
    }

    fn wrap_inc(index: usize, capacity: usize) -> usize {
        (index + 1) % capacity
    }

    /// Asserts the structural invariants of the cursor protocol, panicking
    /// on any violation. Meant for tests and the fuzz harness, which calls
    /// it after every operation.
    ///
    /// # Panics
    ///
    /// Panics when an invariant does not hold.
    #[cfg(any(test, feature = "fuzzing"))]
    pub fn check_invariants(&self) {
        let capacity = self.slots.len();
        assert!(self.start < capacity, "start cursor out of range");
        assert!(self.end < capacity, "end cursor out of range");
        assert!(self.peek_start < capacity, "peek cursor out of range");

        let live = if self.full {
            capacity
        } else {
            (self.end + capacity - self.start) % capacity
        };
        assert!(self.len <= live, "len {} above live window {live}", self.len);
        assert_eq!(self.is_empty(), live == 0, "empty state out of sync");

        // The peek cursor never leaves the live window, and every slot in
        // that window holds an element.
        let ahead = (self.peek_start + capacity - self.start) % capacity;
        assert!(ahead <= live, "peek cursor outside the live window");
        for offset in 0..live {
            assert!(
                self.slots[(self.start + offset) % capacity].is_some(),
                "hole in live window at offset {offset}"
            );
        }
    }
}
