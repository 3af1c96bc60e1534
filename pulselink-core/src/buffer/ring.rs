//! Fixed-capacity byte ring buffer

use pulselink_protocol::FrameSource;

/// Value returned by reads that have no byte to return
pub const SENTINEL: u8 = 0;

/// Receive queue capacity used by the firmware
pub const DEFAULT_CAPACITY: usize = 50;

/// Errors reported by buffer operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BufferError {
    /// Push against a full buffer; the byte was dropped
    Overrun,
    /// Pop against an empty buffer
    Underrun,
}

/// Fixed-capacity FIFO byte queue with wrap-around storage
///
/// Bytes come out in the order they went in. A full buffer rejects new
/// bytes rather than overwriting old ones.
#[derive(Debug, Clone)]
pub struct RingBuffer<const N: usize> {
    data: [u8; N],
    /// Next write position
    head: usize,
    /// Oldest element
    tail: usize,
    count: usize,
}

impl<const N: usize> Default for RingBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> RingBuffer<N> {
    /// Create an empty buffer
    pub const fn new() -> Self {
        Self {
            data: [0; N],
            head: 0,
            tail: 0,
            count: 0,
        }
    }

    /// Maximum number of bytes the buffer holds
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Number of queued bytes
    pub fn len(&self) -> usize {
        self.count
    }

    /// Check if no bytes are queued
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Check if the next push would overrun
    pub fn is_full(&self) -> bool {
        self.count == N
    }

    /// Append a byte
    ///
    /// On a full buffer the byte is dropped, the contents are left as they
    /// were and [`BufferError::Overrun`] is returned.
    pub fn push(&mut self, byte: u8) -> Result<(), BufferError> {
        if self.count >= N {
            return Err(BufferError::Overrun);
        }
        self.data[self.head] = byte;
        self.head = (self.head + 1) % N;
        self.count += 1;
        Ok(())
    }

    /// Remove and return the oldest byte
    ///
    /// On an empty buffer nothing changes and [`BufferError::Underrun`] is
    /// returned. Callers wanting the legacy behavior can fall back to
    /// [`SENTINEL`].
    pub fn pop(&mut self) -> Result<u8, BufferError> {
        if self.count == 0 {
            return Err(BufferError::Underrun);
        }
        let byte = self.data[self.tail];
        self.tail = (self.tail + 1) % N;
        self.count -= 1;
        Ok(byte)
    }

    /// Byte `index` positions from the oldest, without removing it
    ///
    /// Out-of-range positions return [`SENTINEL`] with no error; use
    /// [`RingBuffer::get`] when the caller cannot bound the index itself.
    pub fn peek(&self, index: usize) -> u8 {
        self.get(index).unwrap_or(SENTINEL)
    }

    /// Checked variant of [`RingBuffer::peek`]
    pub fn get(&self, index: usize) -> Option<u8> {
        if index < self.count {
            Some(self.data[(self.tail + index) % N])
        } else {
            None
        }
    }

    /// Remove up to `count` of the oldest bytes
    ///
    /// Returns the number of bytes removed. Never underruns.
    pub fn discard(&mut self, count: usize) -> usize {
        let count = count.min(self.count);
        if count > 0 {
            self.tail = (self.tail + count) % N;
            self.count -= count;
        }
        count
    }

    /// Drop every queued byte
    pub fn clear(&mut self) {
        self.head = 0;
        self.tail = 0;
        self.count = 0;
    }

    /// Iterate over queued bytes, oldest first
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0..self.count).map(move |i| self.data[(self.tail + i) % N])
    }
}

impl<const N: usize> FrameSource for RingBuffer<N> {
    fn len(&self) -> usize {
        self.count
    }

    fn peek(&self, index: usize) -> u8 {
        RingBuffer::peek(self, index)
    }

    fn discard(&mut self, count: usize) -> usize {
        RingBuffer::discard(self, count)
    }
}
