//! PWM timer abstractions
//!
//! The pulse generator is a single up-counting timer with two compare
//! channels sharing one period. Each channel output is active while the
//! counter is below its compare value.

/// Compare channel of a PWM timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PwmChannel {
    A,
    B,
}

/// Two-channel PWM timer
pub trait PwmTimer {
    /// Program the counter wrap value and both compare values, then run
    ///
    /// The counter counts `0..=top`, so one cycle lasts `top + 1` ticks.
    fn configure(&mut self, top: u16, compare_a: u16, compare_b: u16);

    /// Stop the counter and hold both outputs inactive
    fn disable(&mut self);

    /// Check if the counter is running
    fn is_enabled(&self) -> bool;
}
