//! Timer-based pulse generator
//!
//! Runs the two-channel pulse generator on a [`PwmTimer`]. A period of `p`
//! ticks programs a wrap value of `p - 1`, so one cycle lasts exactly `p`
//! ticks. Channel A is high for the first half of each cycle, channel B
//! for the first quarter.

use pulselink_core::traits::{PulseGenerator, PulseSettings};
use pulselink_hal::{PwmChannel, PwmTimer};

/// Pulse generator on a two-channel PWM timer
pub struct TimerPulseGenerator<T> {
    timer: T,
    settings: Option<PulseSettings>,
}

impl<T: PwmTimer> TimerPulseGenerator<T> {
    /// Wrap a timer; it is left stopped until the first configuration
    pub fn new(mut timer: T) -> Self {
        timer.disable();
        Self {
            timer,
            settings: None,
        }
    }

    /// Compare value programmed on `channel`, if the timer is running
    pub fn duty(&self, channel: PwmChannel) -> Option<u16> {
        let settings = self.settings.filter(|_| self.timer.is_enabled())?;
        Some(match channel {
            PwmChannel::A => settings.duty_a,
            PwmChannel::B => settings.duty_b,
        })
    }

    /// Get access to the underlying timer
    pub fn timer(&self) -> &T {
        &self.timer
    }

    /// Give back the timer
    pub fn release(self) -> T {
        self.timer
    }
}

impl<T: PwmTimer> PulseGenerator for TimerPulseGenerator<T> {
    fn set_pulse_generator(&mut self, settings: PulseSettings) {
        // A zero period has no valid wrap value; stop instead
        match settings.period.checked_sub(1) {
            Some(top) => self.timer.configure(top, settings.duty_a, settings.duty_b),
            None => self.timer.disable(),
        }
        self.settings = Some(settings);
    }

    fn settings(&self) -> Option<PulseSettings> {
        self.settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::Vec;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum TimerCall {
        Configure { top: u16, a: u16, b: u16 },
        Disable,
    }

    /// Mock timer recording every call
    #[derive(Default)]
    struct MockTimer {
        enabled: bool,
        calls: Vec<TimerCall, 16>,
    }

    impl PwmTimer for MockTimer {
        fn configure(&mut self, top: u16, compare_a: u16, compare_b: u16) {
            self.enabled = true;
            let _ = self.calls.push(TimerCall::Configure {
                top,
                a: compare_a,
                b: compare_b,
            });
        }

        fn disable(&mut self) {
            self.enabled = false;
            let _ = self.calls.push(TimerCall::Disable);
        }

        fn is_enabled(&self) -> bool {
            self.enabled
        }
    }

    #[test]
    fn test_starts_stopped() {
        let pulse = TimerPulseGenerator::new(MockTimer::default());
        assert!(!pulse.timer().is_enabled());
        assert_eq!(pulse.settings(), None);
        assert_eq!(pulse.duty(PwmChannel::A), None);
    }

    #[test]
    fn test_period_programs_timer() {
        let mut pulse = TimerPulseGenerator::new(MockTimer::default());
        pulse.set_pulse_generator(PulseSettings::from_period(100));

        assert_eq!(
            pulse.timer().calls.last(),
            Some(&TimerCall::Configure {
                top: 99,
                a: 50,
                b: 25
            })
        );
        assert_eq!(pulse.duty(PwmChannel::A), Some(50));
        assert_eq!(pulse.duty(PwmChannel::B), Some(25));
    }

    #[test]
    fn test_boot_period() {
        let mut pulse = TimerPulseGenerator::new(MockTimer::default());
        pulse.set_pulse_generator(PulseSettings::from_period(2000));
        assert_eq!(
            pulse.release().calls.last(),
            Some(&TimerCall::Configure {
                top: 1999,
                a: 1000,
                b: 500
            })
        );
    }

    #[test]
    fn test_zero_period_stops_timer() {
        let mut pulse = TimerPulseGenerator::new(MockTimer::default());
        pulse.set_pulse_generator(PulseSettings::from_period(10));
        pulse.set_pulse_generator(PulseSettings::from_period(0));

        assert!(!pulse.timer().is_enabled());
        assert_eq!(pulse.timer().calls.last(), Some(&TimerCall::Disable));
        assert_eq!(pulse.settings().map(|s| s.period), Some(0));
        assert_eq!(pulse.duty(PwmChannel::B), None);
    }

    #[test]
    fn test_tiny_periods() {
        let mut pulse = TimerPulseGenerator::new(MockTimer::default());
        pulse.set_pulse_generator(PulseSettings::from_period(1));
        assert_eq!(
            pulse.timer().calls.last(),
            Some(&TimerCall::Configure { top: 0, a: 0, b: 0 })
        );

        pulse.set_pulse_generator(PulseSettings::from_period(u16::MAX));
        assert_eq!(
            pulse.timer().calls.last(),
            Some(&TimerCall::Configure {
                top: u16::MAX - 1,
                a: 0x7FFF,
                b: 0x3FFF
            })
        );
    }
}
