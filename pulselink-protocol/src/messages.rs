//! Message types for the Pulselink protocol
//!
//! Message types are divided into two categories:
//! - Host → Controller: output and pulse generator commands
//! - Controller → Host: period echo responses

use crate::frame::{Frame, FrameError};

// Command IDs: Host → Controller
pub const CMD_SET_PERIOD: u8 = 0x01;
pub const CMD_OUTPUT_ON: u8 = 0x02;
pub const CMD_OUTPUT_OFF: u8 = 0x03;

// Response IDs: Controller → Host
pub const RSP_PERIOD: u8 = 0x02;

/// Commands decoded from host-originated frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Drive the output signal high (true) or low (false)
    SetOutput(bool),
    /// Reconfigure the pulse generator base period, in timer ticks
    SetPeriod(u16),
}

impl Command {
    /// Decode a command from a frame
    ///
    /// The payload of output commands is ignored. The period payload is
    /// assembled big-endian after escape restoration.
    pub fn from_frame(frame: &Frame) -> Result<Self, FrameError> {
        match frame.command {
            CMD_SET_PERIOD => Ok(Command::SetPeriod(frame.value())),
            CMD_OUTPUT_ON => Ok(Command::SetOutput(true)),
            CMD_OUTPUT_OFF => Ok(Command::SetOutput(false)),
            other => Err(FrameError::UnknownCommand(other)),
        }
    }

    /// Encode this command into a frame (for host tools and testing)
    pub fn to_frame(&self) -> Frame {
        match self {
            Command::SetOutput(true) => Frame::with_value(CMD_OUTPUT_ON, 0),
            Command::SetOutput(false) => Frame::with_value(CMD_OUTPUT_OFF, 0),
            Command::SetPeriod(period) => Frame::with_value(CMD_SET_PERIOD, *period),
        }
    }

    /// True if this command reconfigures the pulse generator
    pub fn is_period(&self) -> bool {
        matches!(self, Command::SetPeriod(_))
    }
}

/// Messages from the controller back to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Response {
    /// Echo of a period that was just applied
    Period(u16),
}

impl Response {
    /// Encode this response into a frame
    ///
    /// A data byte equal to 0xFF is flagged in the escape mask but still
    /// transmitted as 0xFF.
    pub fn to_frame(&self) -> Frame {
        match self {
            Response::Period(period) => Frame::with_value(RSP_PERIOD, *period),
        }
    }

    /// Wire bytes for this response
    pub fn encode(&self) -> [u8; crate::FRAME_LEN] {
        self.to_frame().to_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::EscapeMask;

    #[test]
    fn test_command_set_period() {
        let frame = Frame::parse(&[0xFF, 0x01, 0x00, 0x64, 0x00]).unwrap();
        let cmd = Command::from_frame(&frame).unwrap();
        assert_eq!(cmd, Command::SetPeriod(100));
        assert!(cmd.is_period());
    }

    #[test]
    fn test_command_output_ignores_payload() {
        let frame = Frame::new(CMD_OUTPUT_ON, 0x12, 0x34, EscapeMask::from_bits(0x03));
        assert_eq!(Command::from_frame(&frame), Ok(Command::SetOutput(true)));

        let frame = Frame::new(CMD_OUTPUT_OFF, 0xFF, 0xFF, EscapeMask::NONE);
        assert_eq!(Command::from_frame(&frame), Ok(Command::SetOutput(false)));
    }

    #[test]
    fn test_command_unknown() {
        let frame = Frame::new(0x7E, 0, 0, EscapeMask::NONE);
        assert_eq!(
            Command::from_frame(&frame),
            Err(FrameError::UnknownCommand(0x7E))
        );
    }

    #[test]
    fn test_command_escaped_period() {
        let frame = Frame::parse(&[0xFF, 0x01, 0x00, 0x64, 0x01]).unwrap();
        assert_eq!(Command::from_frame(&frame), Ok(Command::SetPeriod(0xFF64)));
    }

    #[test]
    fn test_response_period_frame() {
        assert_eq!(Response::Period(100).encode(), [0xFF, 0x02, 0x00, 0x64, 0x00]);
    }

    #[test]
    fn test_response_flags_marker_bytes() {
        // 0xFF bytes stay on the wire, only the mask signals them
        assert_eq!(
            Response::Period(0xFFFF).encode(),
            [0xFF, 0x02, 0xFF, 0xFF, 0x03]
        );
        assert_eq!(
            Response::Period(0x01FF).encode(),
            [0xFF, 0x02, 0x01, 0xFF, 0x02]
        );
    }

    #[test]
    fn test_command_encoding_decodes_back() {
        for cmd in [
            Command::SetOutput(true),
            Command::SetOutput(false),
            Command::SetPeriod(0),
            Command::SetPeriod(0xFF00),
            Command::SetPeriod(u16::MAX),
        ] {
            let frame = cmd.to_frame();
            assert_eq!(Command::from_frame(&frame), Ok(cmd));
        }
    }
}
