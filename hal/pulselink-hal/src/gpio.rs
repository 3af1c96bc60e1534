//! Digital output
//!
//! The link drives one binary output (an LED on the reference board). Chip
//! HALs expose that pin through [`OutputPin`]; the level it reports is the
//! level last written, not a readback of the pad.

/// Push-pull output the link can switch
pub trait OutputPin {
    /// Drive the pad to logic 1
    fn set_high(&mut self);

    /// Drive the pad to logic 0
    fn set_low(&mut self);

    /// Drive the pad to `high`
    fn set_state(&mut self, high: bool) {
        match high {
            true => self.set_high(),
            false => self.set_low(),
        }
    }

    /// Level last written
    fn is_set_high(&self) -> bool;

    /// Inverse of [`OutputPin::is_set_high`]
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}
