//! UART configuration for RP2040

use embassy_rp::uart::{Config, DataBits, Parity, StopBits};
use pulselink_hal::uart::{self as hal_uart, UartConfig};

/// Build the embassy UART config for the given link settings
pub fn to_embassy_config(link: &UartConfig) -> Config {
    let mut config = Config::default();
    config.baudrate = link.baudrate;
    config.data_bits = match link.data_bits {
        hal_uart::DataBits::Seven => DataBits::DataBits7,
        hal_uart::DataBits::Eight => DataBits::DataBits8,
    };
    config.parity = match link.parity {
        hal_uart::Parity::None => Parity::ParityNone,
        hal_uart::Parity::Even => Parity::ParityEven,
        hal_uart::Parity::Odd => Parity::ParityOdd,
    };
    config.stop_bits = match link.stop_bits {
        hal_uart::StopBits::One => StopBits::STOP1,
        hal_uart::StopBits::Two => StopBits::STOP2,
    };
    config
}
