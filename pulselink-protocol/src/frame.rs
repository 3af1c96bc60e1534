//! Frame encoding and decoding for the Pulselink protocol.
//!
//! Frame format:
//! - MARKER (1 byte): 0xFF synchronization byte
//! - COMMAND (1 byte): command or response identifier
//! - DATA HIGH (1 byte): upper byte of the big-endian payload
//! - DATA LOW (1 byte): lower byte of the big-endian payload
//! - ESCAPE (1 byte): bit0 set if DATA HIGH is really 0xFF, bit1 for DATA LOW

/// Frame synchronization byte, reserved on the wire
pub const FRAME_MARKER: u8 = 0xFF;

/// Size of every frame in bytes
pub const FRAME_LEN: usize = 5;

/// Escape bit for the DATA HIGH byte
pub const ESCAPE_HIGH: u8 = 0x01;

/// Escape bit for the DATA LOW byte
pub const ESCAPE_LOW: u8 = 0x02;

/// Errors that can occur during frame parsing or encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Fewer than [`FRAME_LEN`] bytes available
    Incomplete,
    /// First byte is not [`FRAME_MARKER`]
    MissingMarker,
    /// Command byte is not a known command
    UnknownCommand(u8),
    /// Buffer too small for encoding
    BufferTooSmall,
}

/// Escape flags carried in the last byte of a frame
///
/// Only bit0 and bit1 carry meaning; other bits are preserved but ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EscapeMask(u8);

impl EscapeMask {
    /// No data byte escaped
    pub const NONE: Self = Self(0);

    /// Wrap a raw mask byte as received
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// Raw mask byte
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Compute the mask for an outgoing payload
    pub const fn for_payload(high: u8, low: u8) -> Self {
        let mut bits = 0;
        if high == FRAME_MARKER {
            bits |= ESCAPE_HIGH;
        }
        if low == FRAME_MARKER {
            bits |= ESCAPE_LOW;
        }
        Self(bits)
    }

    /// True if the DATA HIGH byte stands for 0xFF
    pub const fn high_escaped(self) -> bool {
        self.0 & ESCAPE_HIGH != 0
    }

    /// True if the DATA LOW byte stands for 0xFF
    pub const fn low_escaped(self) -> bool {
        self.0 & ESCAPE_LOW != 0
    }

    /// Restore the payload bytes
    ///
    /// An escaped byte is forced to 0xFF, whatever value was received in
    /// its position.
    pub const fn restore(self, high: u8, low: u8) -> (u8, u8) {
        let high = if self.high_escaped() { FRAME_MARKER } else { high };
        let low = if self.low_escaped() { FRAME_MARKER } else { low };
        (high, low)
    }
}

/// A frame as it appears on the wire, minus the marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    /// Command or response identifier
    pub command: u8,
    /// Raw DATA HIGH byte as transmitted
    pub data_high: u8,
    /// Raw DATA LOW byte as transmitted
    pub data_low: u8,
    /// Escape flags
    pub escape: EscapeMask,
}

impl Frame {
    /// Create a frame from raw field values
    pub const fn new(command: u8, data_high: u8, data_low: u8, escape: EscapeMask) -> Self {
        Self {
            command,
            data_high,
            data_low,
            escape,
        }
    }

    /// Create a frame carrying a 16-bit value
    ///
    /// The value is sent big-endian. Bytes equal to 0xFF are sent verbatim
    /// and flagged in the escape mask.
    pub const fn with_value(command: u8, value: u16) -> Self {
        let [high, low] = value.to_be_bytes();
        Self::new(command, high, low, EscapeMask::for_payload(high, low))
    }

    /// Build a frame from the four bytes that follow a marker
    pub const fn from_fields(fields: [u8; 4]) -> Self {
        Self::new(fields[0], fields[1], fields[2], EscapeMask::from_bits(fields[3]))
    }

    /// Parse a frame from the start of a byte slice
    ///
    /// The slice must begin with the marker; bytes past [`FRAME_LEN`] are
    /// ignored.
    pub fn parse(bytes: &[u8]) -> Result<Self, FrameError> {
        if bytes.len() < FRAME_LEN {
            return Err(FrameError::Incomplete);
        }
        if bytes[0] != FRAME_MARKER {
            return Err(FrameError::MissingMarker);
        }
        Ok(Self::from_fields([bytes[1], bytes[2], bytes[3], bytes[4]]))
    }

    /// The payload value after escape restoration
    pub const fn value(&self) -> u16 {
        let (high, low) = self.escape.restore(self.data_high, self.data_low);
        u16::from_be_bytes([high, low])
    }

    /// Wire representation of this frame
    pub const fn to_bytes(&self) -> [u8; FRAME_LEN] {
        [
            FRAME_MARKER,
            self.command,
            self.data_high,
            self.data_low,
            self.escape.bits(),
        ]
    }

    /// Encode this frame into a byte buffer
    ///
    /// Returns the number of bytes written
    pub fn encode(&self, buffer: &mut [u8]) -> Result<usize, FrameError> {
        if buffer.len() < FRAME_LEN {
            return Err(FrameError::BufferTooSmall);
        }
        buffer[..FRAME_LEN].copy_from_slice(&self.to_bytes());
        Ok(FRAME_LEN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_mask_for_payload() {
        assert_eq!(EscapeMask::for_payload(0x00, 0x64).bits(), 0x00);
        assert_eq!(EscapeMask::for_payload(0xFF, 0x64).bits(), ESCAPE_HIGH);
        assert_eq!(EscapeMask::for_payload(0x12, 0xFF).bits(), ESCAPE_LOW);
        assert_eq!(
            EscapeMask::for_payload(0xFF, 0xFF).bits(),
            ESCAPE_HIGH | ESCAPE_LOW
        );
    }

    #[test]
    fn test_restore_overrides_received_byte() {
        // The escaped position is forced to 0xFF whatever arrived there
        let mask = EscapeMask::from_bits(ESCAPE_HIGH);
        assert_eq!(mask.restore(0x00, 0x64), (0xFF, 0x64));

        let mask = EscapeMask::from_bits(ESCAPE_LOW);
        assert_eq!(mask.restore(0x00, 0x12), (0x00, 0xFF));
    }

    #[test]
    fn test_restore_ignores_unknown_bits() {
        let mask = EscapeMask::from_bits(0xFC);
        assert!(!mask.high_escaped());
        assert!(!mask.low_escaped());
        assert_eq!(mask.restore(0x01, 0x02), (0x01, 0x02));
    }

    #[test]
    fn test_frame_with_value() {
        let frame = Frame::with_value(0x01, 100);
        assert_eq!(frame.to_bytes(), [0xFF, 0x01, 0x00, 0x64, 0x00]);

        let frame = Frame::with_value(0x01, 0xFF64);
        assert_eq!(frame.to_bytes(), [0xFF, 0x01, 0xFF, 0x64, 0x01]);
        assert_eq!(frame.value(), 0xFF64);
    }

    #[test]
    fn test_frame_value_escape_scenario() {
        // Escape bit0 set, high byte received as 0x00
        let frame = Frame::parse(&[0xFF, 0x01, 0x00, 0x64, 0x01]).unwrap();
        assert_eq!(frame.value(), 0xFF64);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Frame::parse(&[0xFF, 0x01, 0x00]), Err(FrameError::Incomplete));
        assert_eq!(
            Frame::parse(&[0x10, 0x01, 0x00, 0x64, 0x00]),
            Err(FrameError::MissingMarker)
        );
    }

    #[test]
    fn test_parse_ignores_trailing_bytes() {
        let frame = Frame::parse(&[0xFF, 0x03, 0x00, 0x00, 0x00, 0xAA, 0xBB]).unwrap();
        assert_eq!(frame.command, 0x03);
    }

    #[test]
    fn test_encode_buffer_too_small() {
        let frame = Frame::with_value(0x02, 1);
        let mut buffer = [0u8; 4];
        assert_eq!(frame.encode(&mut buffer), Err(FrameError::BufferTooSmall));

        let mut buffer = [0u8; 8];
        assert_eq!(frame.encode(&mut buffer), Ok(FRAME_LEN));
        assert_eq!(&buffer[..FRAME_LEN], &[0xFF, 0x02, 0x00, 0x01, 0x00]);
    }
}
