//! Configuration type definitions
//!
//! These types represent the link configuration. With the `serde` feature
//! the configuration can be stored as postcard-serialized binary data.

use pulselink_protocol::ConsumePolicy;

use crate::traits::PulseSettings;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Upper bound on the postcard-encoded size of a [`LinkConfig`]
pub const MAX_ENCODED_LEN: usize = 16;

/// Period programmed at start-up by the reference board bring-up
pub const BOOT_PERIOD_TICKS: u16 = 2000;

/// Link behavior configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LinkConfig {
    /// Bytes consumed by recognized output commands
    pub consume_policy: ConsumePolicy,
    /// Send `'E'` for each dropped received byte
    pub report_overrun: bool,
    /// Echo every applied period back to the host
    pub echo_period: bool,
    /// Pulse settings applied before the first command arrives
    pub boot_pulse: Option<PulseSettings>,
}

impl LinkConfig {
    /// Default configuration, usable in `const` context
    pub const fn new() -> Self {
        Self {
            consume_policy: ConsumePolicy::MarkerOnly,
            report_overrun: true,
            echo_period: true,
            boot_pulse: None,
        }
    }

    /// Configuration matching the reference board bring-up: pulse generator
    /// running at [`BOOT_PERIOD_TICKS`] from power-on
    pub const fn with_boot_pulse(self) -> Self {
        Self {
            boot_pulse: Some(PulseSettings::from_period(BOOT_PERIOD_TICKS)),
            ..self
        }
    }
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "serde")]
impl LinkConfig {
    /// Serialize into `buf`, returning the used part
    pub fn to_slice<'b>(&self, buf: &'b mut [u8]) -> Result<&'b mut [u8], postcard::Error> {
        postcard::to_slice(self, buf)
    }

    /// Deserialize from postcard bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, postcard::Error> {
        postcard::from_bytes(bytes)
    }
}
