//! Receive buffer shared between the arrival context and the scan loop
//!
//! The producer (UART receive interrupt or task) only pushes; the consumer
//! (link poll loop) only peeks and removes. Every operation runs inside its
//! own short critical section, so the queue stays consistent even when the
//! producer preempts the consumer or runs on another core.
//!
//! Overruns are counted here rather than reported on the wire from arrival
//! context; the poll loop collects the count with
//! [`SharedRingBuffer::take_overruns`] and turns it into diagnostics.
//! Underruns are only returned to the caller of [`SharedRingBuffer::pop`].

use core::cell::RefCell;

use critical_section::Mutex;
use pulselink_protocol::FrameSource;

use super::ring::{BufferError, RingBuffer};

struct SharedState<const N: usize> {
    ring: RingBuffer<N>,
    /// Overruns not yet collected by the poll loop
    overruns: u32,
}

/// Interrupt-safe receive queue
///
/// Intended to live in a `static` and be shared by reference.
pub struct SharedRingBuffer<const N: usize> {
    state: Mutex<RefCell<SharedState<N>>>,
}

impl<const N: usize> Default for SharedRingBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> SharedRingBuffer<N> {
    /// Create an empty shared buffer
    pub const fn new() -> Self {
        Self {
            state: Mutex::new(RefCell::new(SharedState {
                ring: RingBuffer::new(),
                overruns: 0,
            })),
        }
    }

    /// Maximum number of bytes the buffer holds
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Append a received byte (producer side)
    pub fn push(&self, byte: u8) -> Result<(), BufferError> {
        critical_section::with(|cs| {
            let mut state = self.state.borrow_ref_mut(cs);
            let result = state.ring.push(byte);
            if result.is_err() {
                state.overruns = state.overruns.saturating_add(1);
            }
            result
        })
    }

    /// Remove and return the oldest byte (consumer side)
    pub fn pop(&self) -> Result<u8, BufferError> {
        critical_section::with(|cs| self.state.borrow_ref_mut(cs).ring.pop())
    }

    /// Byte `index` positions from the oldest; 0 when out of range
    pub fn peek(&self, index: usize) -> u8 {
        critical_section::with(|cs| self.state.borrow_ref(cs).ring.peek(index))
    }

    /// Checked variant of [`SharedRingBuffer::peek`]
    pub fn get(&self, index: usize) -> Option<u8> {
        critical_section::with(|cs| self.state.borrow_ref(cs).ring.get(index))
    }

    /// Remove up to `count` of the oldest bytes
    pub fn discard(&self, count: usize) -> usize {
        critical_section::with(|cs| self.state.borrow_ref_mut(cs).ring.discard(count))
    }

    /// Number of queued bytes
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.state.borrow_ref(cs).ring.len())
    }

    /// Check if no bytes are queued
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if the next push would overrun
    pub fn is_full(&self) -> bool {
        critical_section::with(|cs| self.state.borrow_ref(cs).ring.is_full())
    }

    /// Drop every queued byte and reset the pending overrun count
    pub fn clear(&self) {
        critical_section::with(|cs| {
            let mut state = self.state.borrow_ref_mut(cs);
            state.ring.clear();
            state.overruns = 0;
        })
    }

    /// Return and reset the number of overruns since the last call
    pub fn take_overruns(&self) -> u32 {
        critical_section::with(|cs| core::mem::take(&mut self.state.borrow_ref_mut(cs).overruns))
    }
}

impl<const N: usize> FrameSource for &SharedRingBuffer<N> {
    fn len(&self) -> usize {
        SharedRingBuffer::len(self)
    }

    fn peek(&self, index: usize) -> u8 {
        SharedRingBuffer::peek(self, index)
    }

    fn discard(&mut self, count: usize) -> usize {
        SharedRingBuffer::discard(self, count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_push_pop() {
        let buf: SharedRingBuffer<4> = SharedRingBuffer::new();
        buf.push(1).unwrap();
        buf.push(2).unwrap();
        assert_eq!(buf.len(), 2);
        assert_eq!(buf.peek(1), 2);
        assert_eq!(buf.pop(), Ok(1));
        assert_eq!(buf.pop(), Ok(2));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_overruns_are_counted() {
        let buf: SharedRingBuffer<2> = SharedRingBuffer::new();
        buf.push(1).unwrap();
        buf.push(2).unwrap();
        assert_eq!(buf.push(3), Err(BufferError::Overrun));
        assert_eq!(buf.push(4), Err(BufferError::Overrun));

        assert_eq!(buf.take_overruns(), 2);
        assert_eq!(buf.take_overruns(), 0);
        assert_eq!(buf.len(), 2);
        assert_eq!(buf.peek(0), 1);
    }

    #[test]
    fn test_underrun_returned_to_caller() {
        let buf: SharedRingBuffer<2> = SharedRingBuffer::new();
        assert_eq!(buf.pop(), Err(BufferError::Underrun));
        assert!(buf.is_empty());
        assert_eq!(buf.take_overruns(), 0);

        buf.push(9).unwrap();
        assert_eq!(buf.pop(), Ok(9));
    }

    #[test]
    fn test_frame_source_through_reference() {
        let buf: SharedRingBuffer<8> = SharedRingBuffer::new();
        for byte in [0x10, 0x20, 0x30] {
            buf.push(byte).unwrap();
        }

        let mut source = &buf;
        assert_eq!(FrameSource::len(&source), 3);
        assert_eq!(FrameSource::peek(&source, 2), 0x30);
        assert_eq!(FrameSource::discard(&mut source, 2), 2);
        assert_eq!(buf.peek(0), 0x30);
    }

    #[test]
    fn test_producer_thread_keeps_fifo_order() {
        extern crate std;
        use std::thread;
        use std::vec::Vec;

        const TOTAL: usize = 2000;
        let buf: SharedRingBuffer<8> = SharedRingBuffer::new();

        let received = thread::scope(|scope| {
            scope.spawn(|| {
                for i in 0..TOTAL {
                    // Retry on a full buffer instead of dropping
                    while buf.push(i as u8).is_err() {
                        thread::yield_now();
                    }
                }
            });

            let mut received = Vec::with_capacity(TOTAL);
            while received.len() < TOTAL {
                if buf.len() >= 2 {
                    // Peek then remove, the way the scanner consumes
                    let first = buf.peek(0);
                    assert_eq!(buf.peek(1), first.wrapping_add(1));
                    assert_eq!(buf.discard(1), 1);
                    received.push(first);
                } else if let Ok(byte) = buf.pop() {
                    received.push(byte);
                } else {
                    thread::yield_now();
                }
            }
            received
        });

        for (i, &byte) in received.iter().enumerate() {
            assert_eq!(byte, i as u8);
        }
        assert!(buf.is_empty());
    }

    #[test]
    fn test_clear_resets_counters() {
        let buf: SharedRingBuffer<1> = SharedRingBuffer::new();
        buf.push(1).unwrap();
        let _ = buf.push(2);
        buf.clear();
        assert!(buf.is_empty());
        assert_eq!(buf.take_overruns(), 0);
    }
}
