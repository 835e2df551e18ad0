#![no_main]

use std::collections::VecDeque;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use peekring::{OverflowPolicy, RingBuffer};

#[derive(Arbitrary, Debug, Clone, Copy)]
enum Op {
    Push(u16),
    Pop,
    Peek,
    ResetPeek,
    RemovePeeked,
    Clear,
}

#[derive(Arbitrary, Debug)]
struct FuzzCase {
    capacity_seed: u8,
    overwrite: bool,
    ops: Vec<Op>,
}

// Differential harness: replay every op against a plain deque that tracks
// the peek cursor as an offset from its front. Evictions and pops pull the
// offset down one, the way the buffer drags a caught-up cursor. The
// buffer's `len` may undercount the model after an eviction consumes
// already-peeked data, so it is only bounded, never equated.
fuzz_target!(|case: FuzzCase| {
    let capacity = usize::from(case.capacity_seed % 16) + 1;
    let policy = if case.overwrite {
        OverflowPolicy::Overwrite
    } else {
        OverflowPolicy::Reject
    };
    let Ok(mut ring) = RingBuffer::new(capacity, policy) else {
        return;
    };

    let mut model: VecDeque<u16> = VecDeque::new();
    let mut peek_idx = 0usize;

    for op in case.ops {
        match op {
            Op::Push(value) => {
                if model.len() == capacity {
                    if policy == OverflowPolicy::Overwrite {
                        model.pop_front();
                        peek_idx = peek_idx.saturating_sub(1);
                        model.push_back(value);
                    }
                } else {
                    model.push_back(value);
                }
                ring.push(value);
            }
            Op::Pop => {
                let expected = model.pop_front();
                peek_idx = peek_idx.saturating_sub(1);
                assert_eq!(ring.pop().ok(), expected);
            }
            Op::Peek => {
                let expected = model.get(peek_idx).copied();
                assert_eq!(ring.peek().ok().copied(), expected);
                if expected.is_some() {
                    peek_idx += 1;
                }
            }
            Op::ResetPeek => {
                ring.reset_peek();
                peek_idx = 0;
            }
            Op::RemovePeeked => {
                ring.remove_peeked();
                model.drain(..peek_idx);
                peek_idx = 0;
            }
            Op::Clear => {
                ring.clear();
                model.clear();
                peek_idx = 0;
            }
        }

        ring.check_invariants();
        assert_eq!(ring.is_empty(), model.is_empty());
        assert_eq!(ring.is_full(), model.len() == capacity);
        assert_eq!(ring.can_peek(), peek_idx < model.len());
        assert!(ring.len() <= model.len());
    }
});
