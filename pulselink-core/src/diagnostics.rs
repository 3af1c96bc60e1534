//! Link diagnostics
//!
//! Buffer faults are reported to the host as single raw ASCII bytes on the
//! same channel as protocol frames. The host cannot tell them apart from
//! frame data structurally; they are a debugging aid, not a contract.

/// Diagnostic byte sent on the link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Diagnostic {
    /// A received byte was dropped because the receive buffer was full
    Overrun,
}

impl Diagnostic {
    /// Wire byte for this diagnostic
    pub const fn as_byte(self) -> u8 {
        match self {
            Diagnostic::Overrun => b'E',
        }
    }
}

/// Running link counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinkStats {
    /// Commands dispatched
    pub commands: u32,
    /// Non-marker bytes discarded while searching for a frame
    pub desyncs: u32,
    /// Markers discarded because the command was unknown
    pub invalid: u32,
    /// Received bytes dropped on a full receive buffer
    pub overruns: u32,
    /// Outgoing bytes dropped on a full outbox
    pub tx_dropped: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_bytes() {
        assert_eq!(Diagnostic::Overrun.as_byte(), b'E');
    }
}
