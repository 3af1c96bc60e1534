//! Non-blocking transmit queue
//!
//! Responses and diagnostic bytes are queued here by the poll loop and
//! drained by whatever owns the UART transmitter. Queuing never waits on
//! the transmitter; a full outbox rejects the bytes instead.

use heapless::Deque;

/// Errors from queuing bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutboxError {
    /// Not enough free space; nothing was queued
    Full,
}

/// Bounded FIFO of bytes waiting for transmission
#[derive(Debug)]
pub struct Outbox<const N: usize> {
    queue: Deque<u8, N>,
}

impl<const N: usize> Default for Outbox<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Outbox<N> {
    /// Create an empty outbox
    pub const fn new() -> Self {
        Self {
            queue: Deque::new(),
        }
    }

    /// Number of queued bytes
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Check if nothing is waiting
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Free space in bytes
    pub fn free(&self) -> usize {
        N - self.queue.len()
    }

    /// Queue a single byte
    pub fn push_byte(&mut self, byte: u8) -> Result<(), OutboxError> {
        self.queue.push_back(byte).map_err(|_| OutboxError::Full)
    }

    /// Queue a complete frame, or nothing if it does not fit
    pub fn push_frame(&mut self, bytes: &[u8]) -> Result<(), OutboxError> {
        if bytes.len() > self.free() {
            return Err(OutboxError::Full);
        }
        for &byte in bytes {
            // Space was checked above
            let _ = self.queue.push_back(byte);
        }
        Ok(())
    }

    /// Next byte to send, without removing it
    pub fn front(&self) -> Option<u8> {
        self.queue.front().copied()
    }

    /// Remove the next byte to send
    pub fn pop(&mut self) -> Option<u8> {
        self.queue.pop_front()
    }

    /// Hand bytes to `accept` until it refuses one or the outbox is empty
    ///
    /// A refused byte stays queued. Returns the number of bytes handed over.
    pub fn drain_while<F: FnMut(u8) -> bool>(&mut self, mut accept: F) -> usize {
        let mut sent = 0;
        while let Some(byte) = self.front() {
            if !accept(byte) {
                break;
            }
            self.queue.pop_front();
            sent += 1;
        }
        sent
    }

    /// Move as many bytes as fit into `buf`
    ///
    /// Returns the number of bytes written
    pub fn drain_into(&mut self, buf: &mut [u8]) -> usize {
        let mut written = 0;
        for slot in buf.iter_mut() {
            match self.queue.pop_front() {
                Some(byte) => {
                    *slot = byte;
                    written += 1;
                }
                None => break,
            }
        }
        written
    }

    /// Drop everything queued
    pub fn clear(&mut self) {
        self.queue.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_all_or_nothing() {
        let mut outbox: Outbox<8> = Outbox::new();
        outbox.push_frame(&[0xFF, 0x02, 0x00, 0x64, 0x00]).unwrap();
        assert_eq!(outbox.len(), 5);

        // Second frame doesn't fit, nothing partial is queued
        assert_eq!(
            outbox.push_frame(&[0xFF, 0x02, 0x00, 0x65, 0x00]),
            Err(OutboxError::Full)
        );
        assert_eq!(outbox.len(), 5);
        assert_eq!(outbox.free(), 3);
    }

    #[test]
    fn test_drain_into() {
        let mut outbox: Outbox<8> = Outbox::new();
        outbox.push_frame(&[1, 2, 3]).unwrap();

        let mut buf = [0u8; 2];
        assert_eq!(outbox.drain_into(&mut buf), 2);
        assert_eq!(buf, [1, 2]);
        assert_eq!(outbox.drain_into(&mut buf), 1);
        assert_eq!(buf[0], 3);
        assert!(outbox.is_empty());
    }

    #[test]
    fn test_drain_while_keeps_refused_byte() {
        let mut outbox: Outbox<8> = Outbox::new();
        outbox.push_frame(&[b'E', 0xFF, 0x02]).unwrap();

        let mut budget = 2;
        let sent = outbox.drain_while(|_| {
            if budget == 0 {
                return false;
            }
            budget -= 1;
            true
        });
        assert_eq!(sent, 2);
        assert_eq!(outbox.front(), Some(0x02));
        assert_eq!(outbox.pop(), Some(0x02));
        assert_eq!(outbox.pop(), None);
    }

    #[test]
    fn test_push_byte_full() {
        let mut outbox: Outbox<1> = Outbox::new();
        outbox.push_byte(b'E').unwrap();
        assert_eq!(outbox.push_byte(b'E'), Err(OutboxError::Full));
    }
}
