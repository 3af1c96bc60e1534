//! Command dispatcher
//!
//! Maps decoded commands onto the actuators and decides which commands
//! produce a response frame.

use pulselink_protocol::{Command, Response};

use crate::traits::{OutputSignal, PulseGenerator, PulseSettings};

/// Routes commands to the output signal and the pulse generator
pub struct Dispatcher<O, P> {
    output: O,
    pulse: P,
    /// Echo applied periods back to the host
    echo_period: bool,
}

impl<O: OutputSignal, P: PulseGenerator> Dispatcher<O, P> {
    /// Create a dispatcher that echoes applied periods
    pub fn new(output: O, pulse: P) -> Self {
        Self {
            output,
            pulse,
            echo_period: true,
        }
    }

    /// Enable or disable the period echo
    pub fn with_echo(mut self, echo_period: bool) -> Self {
        self.echo_period = echo_period;
        self
    }

    /// Apply a command
    ///
    /// Returns the response to transmit, if the command calls for one.
    pub fn dispatch(&mut self, command: Command) -> Option<Response> {
        match command {
            Command::SetOutput(on) => {
                self.output.set_output(on);
                None
            }
            Command::SetPeriod(period) => {
                self.pulse
                    .set_pulse_generator(PulseSettings::from_period(period));
                self.echo_period.then_some(Response::Period(period))
            }
        }
    }

    /// Apply pulse settings directly (start-up defaults)
    pub fn apply_pulse(&mut self, settings: PulseSettings) {
        self.pulse.set_pulse_generator(settings);
    }

    /// Get access to the output signal
    pub fn output(&self) -> &O {
        &self.output
    }

    /// Get access to the pulse generator
    pub fn pulse(&self) -> &P {
        &self.pulse
    }

    /// Release the actuators
    pub fn into_parts(self) -> (O, P) {
        (self.output, self.pulse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::mock::{MockOutput, MockPulse};

    #[test]
    fn test_set_output() {
        let mut dispatcher = Dispatcher::new(MockOutput::default(), MockPulse::default());

        assert_eq!(dispatcher.dispatch(Command::SetOutput(true)), None);
        assert!(dispatcher.output().is_output_on());

        assert_eq!(dispatcher.dispatch(Command::SetOutput(false)), None);
        assert!(!dispatcher.output().is_output_on());
        assert!(dispatcher.pulse().calls.is_empty());
    }

    #[test]
    fn test_set_period_configures_and_echoes() {
        let mut dispatcher = Dispatcher::new(MockOutput::default(), MockPulse::default());

        let response = dispatcher.dispatch(Command::SetPeriod(100));
        assert_eq!(response, Some(Response::Period(100)));
        assert_eq!(
            dispatcher.pulse().settings(),
            Some(PulseSettings {
                period: 100,
                duty_a: 50,
                duty_b: 25
            })
        );
        assert!(dispatcher.output().calls.is_empty());
    }

    #[test]
    fn test_echo_disabled() {
        let mut dispatcher =
            Dispatcher::new(MockOutput::default(), MockPulse::default()).with_echo(false);

        assert_eq!(dispatcher.dispatch(Command::SetPeriod(8)), None);
        assert_eq!(dispatcher.pulse().calls.len(), 1);
    }
}
