//! Actuator traits
//!
//! The link drives exactly two effects:
//! - a binary output signal (set or clear)
//! - a two-channel pulse generator sharing one period

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Pulse generator settings, all in timer ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PulseSettings {
    /// Base period
    pub period: u16,
    /// Active time of channel A
    pub duty_a: u16,
    /// Active time of channel B
    pub duty_b: u16,
}

impl PulseSettings {
    /// Settings for a commanded period: channel A at 50 %, channel B at 25 %
    ///
    /// Duties use integer division, so odd periods truncate.
    pub const fn from_period(period: u16) -> Self {
        Self {
            period,
            duty_a: period / 2,
            duty_b: period / 4,
        }
    }
}

/// Binary output signal
pub trait OutputSignal {
    /// Drive the output on (true) or off (false)
    fn set_output(&mut self, on: bool);

    /// Current logical output state
    fn is_output_on(&self) -> bool;
}

/// Periodic pulse generator with two duty channels
pub trait PulseGenerator {
    /// Reconfigure period and both duties
    fn set_pulse_generator(&mut self, settings: PulseSettings);

    /// Settings last applied, if any
    fn settings(&self) -> Option<PulseSettings>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duties_from_period() {
        assert_eq!(
            PulseSettings::from_period(100),
            PulseSettings {
                period: 100,
                duty_a: 50,
                duty_b: 25
            }
        );
    }

    #[test]
    fn test_duties_truncate() {
        let settings = PulseSettings::from_period(7);
        assert_eq!(settings.duty_a, 3);
        assert_eq!(settings.duty_b, 1);

        let settings = PulseSettings::from_period(u16::MAX);
        assert_eq!(settings.duty_a, 0x7FFF);
        assert_eq!(settings.duty_b, 0x3FFF);
    }
}
