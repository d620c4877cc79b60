//! IS-IS adjacency states
//!
//! Values of `isisISAdjState` as defined by ISIS-MIB (RFC 4444).

use super::Severity;

/// State of an IS-IS adjacency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdjacencyState {
    /// down(1)
    Down,
    /// initializing(2)
    Initializing,
    /// up(3)
    Up,
    /// failed(4)
    Failed,
}

impl AdjacencyState {
    /// Look up the state for a raw MIB integer
    ///
    /// Returns `None` for values the MIB does not define.
    #[must_use]
    pub const fn from_raw(value: i64) -> Option<Self> {
        match value {
            1 => Some(Self::Down),
            2 => Some(Self::Initializing),
            3 => Some(Self::Up),
            4 => Some(Self::Failed),
            _ => None,
        }
    }

    /// Human-readable label, as the MIB names the value
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Down => "down",
            Self::Initializing => "initializing",
            Self::Up => "up",
            Self::Failed => "failed",
        }
    }

    /// Monitoring severity of this state
    #[must_use]
    pub const fn severity(self) -> Severity {
        match self {
            Self::Up => Severity::Ok,
            Self::Initializing => Severity::Warn,
            Self::Down | Self::Failed => Severity::Crit,
        }
    }
}

impl std::fmt::Display for AdjacencyState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
