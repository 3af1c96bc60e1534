//! Frame resynchronization scanner
//!
//! The link has no length field and no checksum, so frames are recovered by
//! looking for the marker at the head of the receive queue. Bytes are only
//! read through [`FrameSource::peek`] until the scanner decides how many of
//! them to discard.
//!
//! Each call to [`FrameScanner::step`] performs one scan step:
//!
//! - fewer than [`FRAME_LEN`] bytes queued: nothing happens
//! - head is not the marker: that byte is discarded (desync)
//! - marker followed by an unknown command: the marker is discarded
//! - marker followed by an output command: the command is returned and,
//!   under [`ConsumePolicy::MarkerOnly`], only the marker is discarded
//! - marker followed by a period command: the whole frame is discarded and
//!   the command returned; the poll cycle ends here
//!
//! Every step with a full frame's worth of bytes queued discards at least
//! one byte, so scanning always makes forward progress.

use crate::frame::{Frame, FRAME_LEN, FRAME_MARKER};
use crate::messages::Command;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Byte queue the scanner reads from
///
/// Implemented by the receive ring buffer. `peek` must not consume and must
/// return 0 for positions past the end.
pub trait FrameSource {
    /// Number of queued bytes
    fn len(&self) -> usize;

    /// Check if no bytes are queued
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Byte at `index` positions from the oldest, without removing it
    fn peek(&self, index: usize) -> u8;

    /// Remove up to `count` of the oldest bytes, returning how many went
    fn discard(&mut self, count: usize) -> usize;
}

/// How many bytes a recognized output command consumes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ConsumePolicy {
    /// Output commands discard only their marker; the other four bytes are
    /// rescanned on the next step. Period commands discard the full frame.
    #[default]
    MarkerOnly,
    /// Every recognized command discards its full frame
    WholeFrame,
}

/// Result of one scan step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScanOutcome {
    /// Not enough bytes queued for a frame
    NeedMore,
    /// Head byte was not a marker and was discarded
    Desync { byte: u8 },
    /// Marker carried an unknown command; the marker was discarded
    Invalid { command: u8 },
    /// A command was recognized
    Command {
        command: Command,
        /// Bytes removed from the queue for this frame
        consumed: usize,
    },
}

impl ScanOutcome {
    /// True if no further step should run in this poll cycle
    pub fn ends_cycle(&self) -> bool {
        matches!(
            self,
            ScanOutcome::NeedMore
                | ScanOutcome::Command {
                    command: Command::SetPeriod(_),
                    ..
                }
        )
    }

    /// The recognized command, if any
    pub fn command(&self) -> Option<Command> {
        match self {
            ScanOutcome::Command { command, .. } => Some(*command),
            _ => None,
        }
    }
}

/// Marker-driven frame scanner
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameScanner {
    policy: ConsumePolicy,
}

impl FrameScanner {
    /// Create a scanner with the given consumption policy
    pub const fn new(policy: ConsumePolicy) -> Self {
        Self { policy }
    }

    /// Current consumption policy
    pub fn policy(&self) -> ConsumePolicy {
        self.policy
    }

    /// Run one scan step against `source`
    pub fn step<S: FrameSource + ?Sized>(&self, source: &mut S) -> ScanOutcome {
        if source.len() < FRAME_LEN {
            return ScanOutcome::NeedMore;
        }

        // A failed match always discards the head and restarts, so the
        // candidate marker can only ever sit at offset 0.
        let head = source.peek(0);
        if head != FRAME_MARKER {
            source.discard(1);
            return ScanOutcome::Desync { byte: head };
        }

        let frame = Frame::from_fields([
            source.peek(1),
            source.peek(2),
            source.peek(3),
            source.peek(4),
        ]);

        match Command::from_frame(&frame) {
            Ok(command @ Command::SetPeriod(_)) => {
                let consumed = source.discard(FRAME_LEN);
                ScanOutcome::Command { command, consumed }
            }
            Ok(command @ Command::SetOutput(_)) => {
                let count = match self.policy {
                    ConsumePolicy::MarkerOnly => 1,
                    ConsumePolicy::WholeFrame => FRAME_LEN,
                };
                let consumed = source.discard(count);
                ScanOutcome::Command { command, consumed }
            }
            Err(_) => {
                source.discard(1);
                ScanOutcome::Invalid {
                    command: frame.command,
                }
            }
        }
    }
}
