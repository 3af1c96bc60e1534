//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the actuator traits
//! defined in pulselink-core on top of the pulselink-hal traits:
//!
//! - Output signal on a GPIO pin (active-high or active-low)
//! - Two-channel pulse generator on a PWM timer
//! - Adapter for `embedded-hal` 1.0 output pins

#![no_std]
#![deny(unsafe_code)]

pub mod output;
pub mod pulse;

pub use output::{EhPin, GpioOutput};
pub use pulse::TimerPulseGenerator;
