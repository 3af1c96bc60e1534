//! Pulselink Serial Command Protocol
//!
//! This crate defines the framed byte protocol spoken over the serial link
//! between a host and the Pulselink controller. Frames carry commands for a
//! binary output signal and for a two-channel pulse generator.
//!
//! # Protocol Overview
//!
//! Every message is exactly five bytes:
//! ```text
//! ┌────────┬─────────┬───────────┬──────────┬────────┐
//! │ MARKER │ COMMAND │ DATA HIGH │ DATA LOW │ ESCAPE │
//! │ 0xFF   │ 1B      │ 1B        │ 1B       │ 1B     │
//! └────────┴─────────┴───────────┴──────────┴────────┘
//! ```
//!
//! The marker value `0xFF` is reserved. A data byte whose true value is
//! `0xFF` is flagged in the ESCAPE mask, and the receiver restores it from
//! the mask regardless of the byte that actually arrived.
//!
//! There is no length field and no checksum: the receiver finds frames by
//! scanning for the marker (see [`scanner`]).

#![no_std]
#![deny(unsafe_code)]

pub mod frame;
pub mod messages;
pub mod scanner;

pub use frame::{EscapeMask, Frame, FrameError, FRAME_LEN, FRAME_MARKER};
pub use messages::{Command, Response};
pub use scanner::{ConsumePolicy, FrameScanner, FrameSource, ScanOutcome};
