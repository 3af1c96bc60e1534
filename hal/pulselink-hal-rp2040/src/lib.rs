//! RP2040-specific HAL for the Pulselink firmware
//!
//! This crate provides RP2040-specific implementations of the shared
//! `pulselink-hal` traits:
//!
//! - GPIO output pin (implements `pulselink_hal::OutputPin`)
//! - PWM slice as a two-channel pulse timer (implements `pulselink_hal::PwmTimer`)
//! - Conversion of `pulselink_hal::UartConfig` to the embassy UART config

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod pwm;
pub mod uart;

pub use gpio::RpOutputPin;
pub use pwm::RpPwmTimer;
pub use uart::to_embassy_config;
