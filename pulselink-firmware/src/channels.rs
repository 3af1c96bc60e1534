//! Inter-task communication
//!
//! The receive buffer is the only state shared between the UART receive
//! task and the link task. Replies travel to the transmit task through a
//! byte pipe so the link task never waits on the wire.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::pipe::Pipe;
use embassy_sync::signal::Signal;

use pulselink_core::buffer::{SharedRingBuffer, DEFAULT_CAPACITY};

/// Transmit pipe capacity, in bytes
pub const TX_PIPE_SIZE: usize = 64;

/// Received bytes waiting to be scanned
pub static RX_BUFFER: SharedRingBuffer<DEFAULT_CAPACITY> = SharedRingBuffer::new();

/// Signal that new bytes were pushed to [`RX_BUFFER`]
pub static RX_READY: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Bytes queued for the UART transmitter
pub static TX_PIPE: Pipe<CriticalSectionRawMutex, TX_PIPE_SIZE> = Pipe::new();
