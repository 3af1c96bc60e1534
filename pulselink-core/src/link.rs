//! Link poll loop
//!
//! [`Link`] is the consumer side of the receive buffer. Each call to
//! [`Link::poll`] runs one scan step, dispatches a recognized command and
//! queues any response or diagnostic bytes in the outbox. Nothing here
//! blocks: transmission happens when the owner drains the outbox.
//!
//! ```text
//!  arrival context           poll loop                  transmitter
//! ┌──────────────┐  push  ┌──────────────┐  outbox  ┌──────────────┐
//! │ UART RX      │ ─────► │ Link::poll   │ ───────► │ UART TX      │
//! └──────────────┘        └──────────────┘          └──────────────┘
//!                          │ scanner → dispatcher → actuators
//! ```

use pulselink_protocol::{Command, FrameScanner, ScanOutcome};

use crate::buffer::SharedRingBuffer;
use crate::config::LinkConfig;
use crate::diagnostics::{Diagnostic, LinkStats};
use crate::dispatch::Dispatcher;
use crate::outbox::Outbox;
use crate::traits::{OutputSignal, PulseGenerator, PulseSettings};

/// What a single poll did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PollEvent {
    /// Fewer than a frame's worth of bytes queued
    Idle,
    /// A non-marker byte was discarded
    Desync { byte: u8 },
    /// A marker with an unknown command was discarded
    Invalid { command: u8 },
    /// The output signal was driven
    Output { on: bool, consumed: usize },
    /// The pulse generator was reconfigured
    Period {
        settings: PulseSettings,
        /// Echo frame queued for transmission
        echoed: bool,
    },
}

impl PollEvent {
    /// True if no further poll should run in this cycle
    pub fn ends_cycle(&self) -> bool {
        matches!(self, PollEvent::Idle | PollEvent::Period { .. })
    }

    /// True if a command was dispatched
    pub fn is_command(&self) -> bool {
        matches!(self, PollEvent::Output { .. } | PollEvent::Period { .. })
    }
}

/// Consumer side of the serial command link
///
/// `N` is the receive buffer capacity, `TX` the outbox capacity.
pub struct Link<'a, O, P, const N: usize, const TX: usize> {
    rx: &'a SharedRingBuffer<N>,
    scanner: FrameScanner,
    dispatcher: Dispatcher<O, P>,
    outbox: Outbox<TX>,
    config: LinkConfig,
    stats: LinkStats,
}

impl<'a, O, P, const N: usize, const TX: usize> Link<'a, O, P, N, TX>
where
    O: OutputSignal,
    P: PulseGenerator,
{
    /// Create a link reading from `rx`
    ///
    /// Applies the configured boot pulse settings, if any.
    pub fn new(rx: &'a SharedRingBuffer<N>, output: O, pulse: P, config: LinkConfig) -> Self {
        let mut dispatcher = Dispatcher::new(output, pulse).with_echo(config.echo_period);
        if let Some(settings) = config.boot_pulse {
            dispatcher.apply_pulse(settings);
        }

        Self {
            rx,
            scanner: FrameScanner::new(config.consume_policy),
            dispatcher,
            outbox: Outbox::new(),
            config,
            stats: LinkStats::default(),
        }
    }

    /// Run one scan step
    pub fn poll(&mut self) -> PollEvent {
        self.collect_diagnostics();

        let mut source = self.rx;
        match self.scanner.step(&mut source) {
            ScanOutcome::NeedMore => PollEvent::Idle,
            ScanOutcome::Desync { byte } => {
                self.stats.desyncs = self.stats.desyncs.saturating_add(1);
                PollEvent::Desync { byte }
            }
            ScanOutcome::Invalid { command } => {
                self.stats.invalid = self.stats.invalid.saturating_add(1);
                PollEvent::Invalid { command }
            }
            ScanOutcome::Command { command, consumed } => {
                self.stats.commands = self.stats.commands.saturating_add(1);
                let response = self.dispatcher.dispatch(command);
                let echoed = match response {
                    Some(response) => self.queue_frame(&response.encode()),
                    None => false,
                };

                match command {
                    Command::SetOutput(on) => PollEvent::Output { on, consumed },
                    Command::SetPeriod(period) => PollEvent::Period {
                        settings: PulseSettings::from_period(period),
                        echoed,
                    },
                }
            }
        }
    }

    /// Run one poll cycle: poll until the buffer runs short or a period
    /// command has been applied
    ///
    /// `on_event` sees every event, including the final one. Returns the
    /// number of commands dispatched.
    pub fn service<F: FnMut(PollEvent)>(&mut self, mut on_event: F) -> usize {
        let mut commands = 0;
        loop {
            let event = self.poll();
            if event.is_command() {
                commands += 1;
            }
            on_event(event);
            if event.ends_cycle() {
                return commands;
            }
        }
    }

    /// Hand queued bytes to `accept` until it refuses one
    ///
    /// Returns the number of bytes handed over.
    pub fn transmit<F: FnMut(u8) -> bool>(&mut self, accept: F) -> usize {
        self.outbox.drain_while(accept)
    }

    /// Outgoing byte queue
    pub fn outbox(&self) -> &Outbox<TX> {
        &self.outbox
    }

    /// Mutable access to the outgoing byte queue
    pub fn outbox_mut(&mut self) -> &mut Outbox<TX> {
        &mut self.outbox
    }

    /// Running counters
    pub fn stats(&self) -> LinkStats {
        self.stats
    }

    /// Active configuration
    pub fn config(&self) -> &LinkConfig {
        &self.config
    }

    /// Get access to the dispatcher and its actuators
    pub fn dispatcher(&self) -> &Dispatcher<O, P> {
        &self.dispatcher
    }

    /// Receive buffer this link reads from
    pub fn rx(&self) -> &'a SharedRingBuffer<N> {
        self.rx
    }

    /// Turn overruns recorded since the last poll into diagnostics
    ///
    /// Scanning only discards bytes it has already counted, so the link
    /// itself never reads an empty buffer and has no underrun to report.
    fn collect_diagnostics(&mut self) {
        let overruns = self.rx.take_overruns();
        self.stats.overruns = self.stats.overruns.saturating_add(overruns);
        if self.config.report_overrun {
            self.queue_diagnostic(Diagnostic::Overrun, overruns);
        }
    }

    fn queue_diagnostic(&mut self, diagnostic: Diagnostic, count: u32) {
        let count = count as usize;
        let queued = count.min(self.outbox.free());
        for _ in 0..queued {
            // Bounded by free space
            let _ = self.outbox.push_byte(diagnostic.as_byte());
        }
        self.count_dropped(count - queued);
    }

    fn queue_frame(&mut self, bytes: &[u8]) -> bool {
        match self.outbox.push_frame(bytes) {
            Ok(()) => true,
            Err(_) => {
                self.count_dropped(bytes.len());
                false
            }
        }
    }

    fn count_dropped(&mut self, bytes: usize) {
        let bytes = u32::try_from(bytes).unwrap_or(u32::MAX);
        self.stats.tx_dropped = self.stats.tx_dropped.saturating_add(bytes);
    }
}
