//! Board-agnostic core logic for the Pulselink firmware
//!
//! This crate contains all link logic that does not depend on specific
//! hardware implementations:
//!
//! - Receive ring buffer shared between the byte-arrival context and the
//!   polling scan loop
//! - Actuator traits (output signal, pulse generator)
//! - Command dispatcher
//! - Non-blocking transmit outbox
//! - The link poll loop tying scanner, dispatcher and outbox together
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

pub mod buffer;
pub mod config;
pub mod diagnostics;
pub mod dispatch;
pub mod link;
pub mod outbox;
pub mod traits;

pub use buffer::{BufferError, RingBuffer, SharedRingBuffer};
pub use config::LinkConfig;
pub use dispatch::Dispatcher;
pub use link::{Link, PollEvent};
pub use outbox::Outbox;
