//! Recording actuators for tests

use heapless::Vec;

use super::{OutputSignal, PulseGenerator, PulseSettings};

/// Output signal that records every call
#[derive(Debug, Default)]
pub struct MockOutput {
    pub on: bool,
    pub calls: Vec<bool, 32>,
}

impl OutputSignal for MockOutput {
    fn set_output(&mut self, on: bool) {
        self.on = on;
        let _ = self.calls.push(on);
    }

    fn is_output_on(&self) -> bool {
        self.on
    }
}

/// Pulse generator that records every call
#[derive(Debug, Default)]
pub struct MockPulse {
    pub calls: Vec<PulseSettings, 32>,
}

impl PulseGenerator for MockPulse {
    fn set_pulse_generator(&mut self, settings: PulseSettings) {
        let _ = self.calls.push(settings);
    }

    fn settings(&self) -> Option<PulseSettings> {
        self.calls.last().copied()
    }
}
