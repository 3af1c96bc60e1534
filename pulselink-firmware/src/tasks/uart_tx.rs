//! UART transmit task
//!
//! Forwards bytes from the transmit pipe to the UART.

use defmt::*;
use embassy_rp::uart::BufferedUartTx;
use embedded_io_async::Write;

use crate::channels::{TX_PIPE, TX_PIPE_SIZE};

#[embassy_executor::task]
pub async fn uart_tx_task(mut tx: BufferedUartTx) {
    info!("UART TX task started");

    let mut buf = [0u8; TX_PIPE_SIZE];

    loop {
        let n = TX_PIPE.read(&mut buf).await;
        if let Err(e) = tx.write_all(&buf[..n]).await {
            warn!("UART write error: {:?}", e);
        } else {
            trace!("TX: {} bytes", n);
        }
    }
}
