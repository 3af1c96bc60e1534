//! GPIO output for RP2040

use embassy_rp::gpio::Output;
use pulselink_hal::OutputPin;

/// Embassy output pin behind the `pulselink_hal::OutputPin` trait
pub struct RpOutputPin<'d>(Output<'d>);

impl<'d> RpOutputPin<'d> {
    pub fn new(pin: Output<'d>) -> Self {
        Self(pin)
    }

    /// Give back the embassy pin
    pub fn into_inner(self) -> Output<'d> {
        self.0
    }
}

impl OutputPin for RpOutputPin<'_> {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.0.is_set_high()
    }
}
