//! PWM slice as a two-channel pulse timer
//!
//! One RP2040 PWM slice has a single counter and two compare outputs, which
//! is exactly the shape of the pulse generator. The counter runs at
//! `clk_sys / divider`; with the default 125 MHz system clock a divider of
//! 125 gives 1 µs ticks.

use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use fixed::types::extra::U4;
use fixed::FixedU16;
use pulselink_hal::PwmTimer;

/// System clock divider giving 1 MHz ticks at 125 MHz
pub const DIVIDER_1MHZ: u8 = 125;

/// PWM slice driving both pulse outputs
pub struct RpPwmTimer<'d> {
    pwm: Pwm<'d>,
    config: PwmConfig,
}

impl<'d> RpPwmTimer<'d> {
    /// Take over a PWM slice, stopped, with the given integer clock divider
    ///
    /// A divider of 0 is treated as 1.
    pub fn new(mut pwm: Pwm<'d>, divider: u8) -> Self {
        let mut config = PwmConfig::default();
        config.divider = FixedU16::<U4>::from_num(divider.max(1));
        config.compare_a = 0;
        config.compare_b = 0;
        config.enable = false;
        pwm.set_config(&config);
        Self { pwm, config }
    }

    /// Give back the PWM slice
    pub fn into_inner(self) -> Pwm<'d> {
        self.pwm
    }
}

impl PwmTimer for RpPwmTimer<'_> {
    fn configure(&mut self, top: u16, compare_a: u16, compare_b: u16) {
        self.config.top = top;
        self.config.compare_a = compare_a;
        self.config.compare_b = compare_b;
        self.config.enable = true;
        self.pwm.set_config(&self.config);
    }

    fn disable(&mut self) {
        self.config.compare_a = 0;
        self.config.compare_b = 0;
        self.config.enable = false;
        self.pwm.set_config(&self.config);
    }

    fn is_enabled(&self) -> bool {
        self.config.enable
    }
}
