//! Pulselink - Serial Command Link Firmware
//!
//! Main firmware binary for RP2040-based boards. A host sends fixed 5-byte
//! frames over UART0 to switch an output (the on-board LED) and to set the
//! period of a two-channel pulse generator (PWM slice 1, GPIO2/GPIO3).
//!
//! Pin map:
//! - GPIO0 / GPIO1: UART0 TX / RX
//! - GPIO2 / GPIO3: pulse outputs A (50% duty) / B (25% duty)
//! - GPIO25: controlled output

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::peripherals::UART0;
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_rp::uart::{BufferedInterruptHandler, Uart};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use pulselink_drivers::{GpioOutput, TimerPulseGenerator};
use pulselink_hal_rp2040::{to_embassy_config, RpOutputPin, RpPwmTimer};

mod channels;
mod config;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 64]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 64]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Pulselink firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Output starts off before the link task takes over
    let level = if config::OUTPUT_ACTIVE_LOW {
        Level::High
    } else {
        Level::Low
    };
    let output = GpioOutput::new(
        RpOutputPin::new(Output::new(p.PIN_25, level)),
        config::OUTPUT_ACTIVE_LOW,
    );

    let pwm = Pwm::new_output_ab(p.PWM_SLICE1, p.PIN_2, p.PIN_3, PwmConfig::default());
    let pulse = TimerPulseGenerator::new(RpPwmTimer::new(pwm, config::PWM_DIVIDER));

    // Host link
    info!(
        "UART0 at {} baud, {} us per byte",
        config::UART.baudrate,
        config::UART.char_time_us()
    );
    let tx_buf = TX_BUF.init([0u8; 64]);
    let rx_buf = RX_BUF.init([0u8; 64]);
    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, to_embassy_config(&config::UART));
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, rx) = uart.split();

    unwrap!(spawner.spawn(tasks::uart_rx_task(rx)));
    unwrap!(spawner.spawn(tasks::uart_tx_task(tx)));
    unwrap!(spawner.spawn(tasks::link_task(output, pulse, config::LINK)));

    info!("All tasks spawned, firmware running");

    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
