//! UART link parameters
//!
//! The core never touches the UART directly; it only sees received bytes
//! and queued bytes to send. These settings describe the transport for
//! chip-specific HALs.

/// UART configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UartConfig {
    /// Baud rate in bits per second
    pub baudrate: u32,
    /// Number of data bits (typically 8)
    pub data_bits: DataBits,
    /// Parity mode
    pub parity: Parity,
    /// Number of stop bits
    pub stop_bits: StopBits,
}

impl UartConfig {
    /// Default link settings: 9600 baud, 8 data bits, no parity, 1 stop bit
    pub const fn new() -> Self {
        Self {
            baudrate: 9600,
            data_bits: DataBits::Eight,
            parity: Parity::None,
            stop_bits: StopBits::One,
        }
    }

    /// Same settings with a different baud rate
    pub const fn with_baudrate(self, baudrate: u32) -> Self {
        Self { baudrate, ..self }
    }

    /// Number of bit times one character occupies on the wire
    pub const fn bits_per_char(&self) -> u32 {
        let data = match self.data_bits {
            DataBits::Seven => 7,
            DataBits::Eight => 8,
        };
        let parity = match self.parity {
            Parity::None => 0,
            Parity::Even | Parity::Odd => 1,
        };
        let stop = match self.stop_bits {
            StopBits::One => 1,
            StopBits::Two => 2,
        };
        1 + data + parity + stop
    }

    /// Time to transmit one character, in microseconds (rounded up)
    ///
    /// A zero baud rate never transmits and yields `u32::MAX`.
    pub const fn char_time_us(&self) -> u32 {
        if self.baudrate == 0 {
            return u32::MAX;
        }
        let bits = self.bits_per_char() * 1_000_000;
        bits.div_ceil(self.baudrate)
    }
}

impl Default for UartConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Number of data bits per character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DataBits {
    Seven,
    Eight,
}

/// Parity mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Parity {
    None,
    Even,
    Odd,
}

/// Number of stop bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StopBits {
    One,
    Two,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_link_settings() {
        let config = UartConfig::default();
        assert_eq!(config.baudrate, 9600);
        assert_eq!(config.data_bits, DataBits::Eight);
        assert_eq!(config.parity, Parity::None);
        assert_eq!(config.stop_bits, StopBits::One);
    }

    #[test]
    fn test_char_time() {
        // 10 bit times at 9600 baud
        assert_eq!(UartConfig::new().bits_per_char(), 10);
        assert_eq!(UartConfig::new().char_time_us(), 1042);

        let fast = UartConfig::new().with_baudrate(115_200);
        assert_eq!(fast.char_time_us(), 87);
    }
}
