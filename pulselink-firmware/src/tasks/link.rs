//! Link task
//!
//! Runs the scan/dispatch poll loop whenever bytes arrive, then hands any
//! queued replies to the transmit pipe. A periodic wake-up retries replies
//! the pipe could not take and picks up buffer faults.

use defmt::*;
use embassy_futures::select::select;
use embassy_time::{Duration, Timer};

use pulselink_core::buffer::DEFAULT_CAPACITY;
use pulselink_core::config::LinkConfig;
use pulselink_core::{Link, PollEvent};
use pulselink_drivers::{GpioOutput, TimerPulseGenerator};
use pulselink_hal_rp2040::{RpOutputPin, RpPwmTimer};

use crate::channels::{RX_BUFFER, RX_READY, TX_PIPE};

/// Outbox capacity, in bytes
const OUTBOX_SIZE: usize = 32;

/// Idle wake-up interval
const POLL_INTERVAL: Duration = Duration::from_millis(10);

pub type LinkOutput = GpioOutput<RpOutputPin<'static>>;
pub type LinkPulse = TimerPulseGenerator<RpPwmTimer<'static>>;

#[embassy_executor::task]
pub async fn link_task(output: LinkOutput, pulse: LinkPulse, config: LinkConfig) {
    info!("Link task started: {:?}", config);

    let mut link: Link<'static, LinkOutput, LinkPulse, DEFAULT_CAPACITY, OUTBOX_SIZE> =
        Link::new(&RX_BUFFER, output, pulse, config);
    let mut last_stats = link.stats();

    loop {
        select(RX_READY.wait(), Timer::after(POLL_INTERVAL)).await;

        link.service(log_event);

        let stats = link.stats();
        if stats.overruns != last_stats.overruns || stats.tx_dropped != last_stats.tx_dropped {
            warn!("Link faults: {:?}", stats);
        }
        last_stats = stats;

        let sent = link.transmit(|byte| TX_PIPE.try_write(&[byte]).is_ok());
        if sent > 0 {
            trace!("Queued {} bytes for TX", sent);
        }
        if !link.outbox().is_empty() {
            debug!("TX pipe full, {} bytes pending", link.outbox().len());
        }
    }
}

fn log_event(event: PollEvent) {
    match event {
        PollEvent::Idle => {}
        PollEvent::Desync { byte } => trace!("Desync, skipped {=u8:#x}", byte),
        PollEvent::Invalid { command } => warn!("Unknown command {=u8:#x}", command),
        PollEvent::Output { on, consumed } => {
            debug!("Output {} ({} bytes consumed)", if on { "on" } else { "off" }, consumed)
        }
        PollEvent::Period { settings, echoed } => {
            info!("Period set: {:?} (echoed: {})", settings, echoed)
        }
    }
}
