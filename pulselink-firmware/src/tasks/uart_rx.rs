//! UART receive task
//!
//! Moves received bytes into the shared receive buffer and wakes the link
//! task. Nothing is parsed here.

use defmt::*;
use embassy_rp::uart::BufferedUartRx;
use embedded_io_async::Read;

use crate::channels::{RX_BUFFER, RX_READY};

/// Read chunk size
const RX_CHUNK_SIZE: usize = 16;

#[embassy_executor::task]
pub async fn uart_rx_task(mut rx: BufferedUartRx) {
    info!("UART RX task started");

    let mut buf = [0u8; RX_CHUNK_SIZE];

    loop {
        match rx.read(&mut buf).await {
            Ok(n) if n > 0 => {
                trace!("RX: {} bytes", n);
                for &byte in &buf[..n] {
                    // Dropped bytes are counted by the buffer and reported
                    // by the link task
                    if RX_BUFFER.push(byte).is_err() {
                        trace!("RX buffer full, dropped {=u8:#x}", byte);
                    }
                }
                RX_READY.signal(());
            }
            Ok(_) => {}
            Err(e) => {
                warn!("UART read error: {:?}", e);
            }
        }
    }
}
