/// Lifecycle of the live update stream. Exactly one phase holds at a time;
/// transitions come from the underlying transport, never from the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionPhase {
    Uninstantiated,
    Connecting,
    Open,
    Closing,
    Closed,
}

impl ConnectionPhase {
    pub const ALL: [ConnectionPhase; 5] = [
        ConnectionPhase::Uninstantiated,
        ConnectionPhase::Connecting,
        ConnectionPhase::Open,
        ConnectionPhase::Closing,
        ConnectionPhase::Closed,
    ];

    /// Map the browser ready-state code. Unknown codes fall back to
    /// `Uninstantiated` so a future transport state never breaks the badge.
    pub fn from_ready_code(code: i8) -> Self {
        match code {
            0 => ConnectionPhase::Connecting,
            1 => ConnectionPhase::Open,
            2 => ConnectionPhase::Closing,
            3 => ConnectionPhase::Closed,
            _ => ConnectionPhase::Uninstantiated,
        }
    }

    pub fn is_open(self) -> bool {
        matches!(self, ConnectionPhase::Open)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ready_codes_map_to_phases() {
        assert_eq!(
            ConnectionPhase::from_ready_code(0),
            ConnectionPhase::Connecting
        );
        assert_eq!(ConnectionPhase::from_ready_code(1), ConnectionPhase::Open);
        assert_eq!(
            ConnectionPhase::from_ready_code(2),
            ConnectionPhase::Closing
        );
        assert_eq!(ConnectionPhase::from_ready_code(3), ConnectionPhase::Closed);
    }

    #[test]
    fn unknown_ready_codes_fall_back() {
        assert_eq!(
            ConnectionPhase::from_ready_code(-1),
            ConnectionPhase::Uninstantiated
        );
        assert_eq!(
            ConnectionPhase::from_ready_code(7),
            ConnectionPhase::Uninstantiated
        );
    }

    #[test]
    fn only_open_counts_as_open() {
        for phase in ConnectionPhase::ALL {
            assert_eq!(phase.is_open(), phase == ConnectionPhase::Open);
        }
    }
}
