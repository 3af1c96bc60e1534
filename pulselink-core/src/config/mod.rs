//! Configuration types and persistence
//!
//! The link configuration is small enough to live in flash or be baked into
//! the firmware image at build time.

pub mod types;

pub use types::*;
