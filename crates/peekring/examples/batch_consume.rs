//! Splits a bursty byte stream into newline-terminated frames without ever
//! consuming a partial frame.
//!
//! Bytes arrive in bursts whose boundaries do not line up with frame
//! boundaries, the way a serial line or a socket delivers them. The consumer
//! scans the buffered bytes with `peek`; when the scan reaches a terminator
//! it commits the whole frame in one `remove_peeked` call, and when the data
//! runs out mid-frame it rewinds with `reset_peek` so the partial frame stays
//! buffered for the next burst.
//!
//! Run with
//!
//! ```bash
//! cargo run -p peekring --example batch_consume
//! ```

use peekring::{Error, OverflowPolicy, RingBuffer};

fn main() -> Result<(), Error> {
    // Three commands split across four bursts.
    let bursts: [&[u8]; 4] = [b"set mode=7\nst", b"atus\nlog st", b"art", b" now\n"];

    let mut ring = RingBuffer::new(32, OverflowPolicy::Reject)?;

    for burst in bursts {
        for &byte in burst {
            ring.push(byte);
        }

        while let Some(frame) = next_frame(&mut ring) {
            println!("frame: {}", String::from_utf8_lossy(&frame));
        }
    }

    assert!(ring.is_empty(), "no partial frame left behind");
    Ok(())
}

/// Scans for one complete frame. On success the frame bytes (terminator
/// included) are consumed from the buffer; otherwise the cursor is rewound
/// and the buffer is left exactly as it was.
fn next_frame(ring: &mut RingBuffer<u8>) -> Option<Vec<u8>> {
    let mut frame = Vec::new();
    while let Ok(&byte) = ring.peek() {
        if byte == b'\n' {
            ring.remove_peeked();
            return Some(frame);
        }
        frame.push(byte);
    }
    ring.reset_peek();
    None
}
