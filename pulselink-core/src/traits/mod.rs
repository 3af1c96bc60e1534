//! Hardware abstraction traits
//!
//! These traits define the interface between the link logic and the
//! physical effects it drives.

pub mod actuator;

pub use actuator::{OutputSignal, PulseGenerator, PulseSettings};

#[cfg(test)]
pub(crate) mod mock;
