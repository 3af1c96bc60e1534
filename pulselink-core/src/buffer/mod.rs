//! Receive buffering
//!
//! A fixed-capacity FIFO of received bytes. [`RingBuffer`] is the plain
//! queue; [`SharedRingBuffer`] wraps it for use from both the arrival
//! context and the scan loop.

pub mod ring;
pub mod shared;

pub use ring::{BufferError, RingBuffer, DEFAULT_CAPACITY, SENTINEL};
pub use shared::SharedRingBuffer;
