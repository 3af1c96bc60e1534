//! GPIO output signal
//!
//! Drives the controlled output (an LED on the reference board) from a
//! single GPIO pin, directly or through a transistor stage.

use pulselink_core::traits::OutputSignal;
use pulselink_hal::OutputPin;

/// GPIO-driven output signal
///
/// The pin can be configured as active-high (default) or active-low. The
/// output always starts off.
pub struct GpioOutput<P> {
    pin: P,
    /// If true, output ON = pin LOW
    inverted: bool,
    /// Current logical state (true = output on)
    on: bool,
}

impl<P: OutputPin> GpioOutput<P> {
    /// Create a new GPIO output signal
    ///
    /// # Arguments
    /// - `pin`: The GPIO pin to control
    /// - `inverted`: If true, the output is ON when the pin is LOW
    pub fn new(pin: P, inverted: bool) -> Self {
        let mut output = Self {
            pin,
            inverted,
            on: false,
        };
        output.set_output(false);
        output
    }

    /// Create an output that is on while the pin is high
    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, false)
    }

    /// Create an output that is on while the pin is low
    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true)
    }

    /// Give back the pin
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: OutputPin> OutputSignal for GpioOutput<P> {
    fn set_output(&mut self, on: bool) {
        self.on = on;
        self.pin.set_state(on != self.inverted);
    }

    fn is_output_on(&self) -> bool {
        self.on
    }
}

/// Adapter from an `embedded-hal` 1.0 output pin
///
/// `embedded_hal::digital::OutputPin` cannot be queried, so the last
/// successfully written level is tracked here. Write errors leave the
/// tracked level unchanged.
pub struct EhPin<P> {
    pin: P,
    high: bool,
}

impl<P: embedded_hal::digital::OutputPin> EhPin<P> {
    /// Wrap a pin, assuming it is currently low
    pub fn new(pin: P) -> Self {
        Self { pin, high: false }
    }

    /// Give back the wrapped pin
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: embedded_hal::digital::OutputPin> OutputPin for EhPin<P> {
    fn set_high(&mut self) {
        if self.pin.set_high().is_ok() {
            self.high = true;
        }
    }

    fn set_low(&mut self) {
        if self.pin.set_low().is_ok() {
            self.high = false;
        }
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}
