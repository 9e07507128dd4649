//! Frame inbox between the link receive callback and the main loop.
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ Link receive │────▶│  FrameInbox  │────▶│  Main loop   │
//! │ callback     │     │  (SPSC FIFO) │     │  (consumer)  │
//! └──────────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! Frames leave in arrival order.  When the inbox is full the newest frame
//! is dropped and counted; the queue never blocks the receive side.

use heapless::spsc::{Consumer, Producer, Queue};
use log::warn;

use crate::link::codec::Frame;

/// Slots in the backing ring.  heapless keeps one slot empty, so the
/// inbox holds `INBOX_SLOTS - 1` frames.
const INBOX_SLOTS: usize = 33;

/// Frames the inbox can hold before dropping.
pub const INBOX_CAPACITY: usize = INBOX_SLOTS - 1;

pub struct FrameInbox {
    queue: Queue<Frame, INBOX_SLOTS>,
    dropped: u32,
}

impl FrameInbox {
    pub fn new() -> Self {
        Self {
            queue: Queue::new(),
            dropped: 0,
        }
    }

    /// Queue a raw frame.  Returns `false` (and counts a drop) if the
    /// frame is oversized or the inbox is full.
    pub fn push(&mut self, bytes: &[u8]) -> bool {
        let Some(frame) = Frame::from_bytes(bytes) else {
            self.dropped = self.dropped.saturating_add(1);
            warn!("Inbox: oversized frame ({} bytes) dropped", bytes.len());
            return false;
        };
        if self.queue.enqueue(frame).is_err() {
            self.dropped = self.dropped.saturating_add(1);
            warn!("Inbox: full, frame dropped");
            return false;
        }
        true
    }

    /// Oldest queued frame.
    pub fn pop(&mut self) -> Option<Frame> {
        self.queue.dequeue()
    }

    /// Hand every queued frame to `handler`, oldest first.
    pub fn drain(&mut self, mut handler: impl FnMut(Frame)) {
        while let Some(frame) = self.pop() {
            handler(frame);
        }
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Frames dropped since creation.
    pub fn dropped(&self) -> u32 {
        self.dropped
    }

    /// Split into producer/consumer halves for a receive callback and the
    /// main loop.  Frames pushed through the producer are not size- or
    /// drop-counted; build them with [`Frame::from_bytes`].
    pub fn split(&mut self) -> (Producer<'_, Frame, INBOX_SLOTS>, Consumer<'_, Frame, INBOX_SLOTS>) {
        self.queue.split()
    }
}

impl Default for FrameInbox {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_arrival_order() {
        let mut inbox = FrameInbox::new();
        assert!(inbox.push(&[7, 1]));
        assert!(inbox.push(&[5, 1, 2]));
        assert!(inbox.push(&[4, 0]));

        let mut seen = Vec::new();
        inbox.drain(|f| seen.push(f.as_bytes().to_vec()));
        assert_eq!(seen, vec![vec![7, 1], vec![5, 1, 2], vec![4, 0]]);
        assert!(inbox.is_empty());
    }

    #[test]
    fn full_inbox_drops_newest() {
        let mut inbox = FrameInbox::new();
        for i in 0..INBOX_CAPACITY {
            assert!(inbox.push(&[7, (i % 2) as u8]));
        }
        assert!(!inbox.push(&[4, 1]));
        assert_eq!(inbox.len(), INBOX_CAPACITY);
        assert_eq!(inbox.dropped(), 1);
        assert_eq!(inbox.pop().map(|f| f.as_bytes().to_vec()), Some(vec![7, 0]));
    }

    #[test]
    fn oversized_frame_counted() {
        let mut inbox = FrameInbox::new();
        assert!(!inbox.push(&[0u8; 16]));
        assert_eq!(inbox.dropped(), 1);
        assert!(inbox.is_empty());
    }

    #[test]
    fn split_halves_share_the_queue() {
        let mut inbox = FrameInbox::new();
        {
            let (mut tx, mut rx) = inbox.split();
            let frame = Frame::from_bytes(&[7, 1]).unwrap();
            assert!(tx.enqueue(frame).is_ok());
            assert_eq!(rx.dequeue(), Some(frame));
        }
        assert!(inbox.is_empty());
    }
}
