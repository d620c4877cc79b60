//! Monitoring severity levels
//!
//! The result states a check hands back to the monitoring core.

use serde::Serialize;

/// Severity of a check result
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    /// Everything is fine
    Ok,
    /// Degraded, needs attention
    Warn,
    /// Broken
    Crit,
    /// The state could not be determined
    Unknown,
}

impl Severity {
    /// Plugin exit code for this severity (0 OK, 1 WARN, 2 CRIT, 3 UNKNOWN)
    #[must_use]
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::Ok => 0,
            Self::Warn => 1,
            Self::Crit => 2,
            Self::Unknown => 3,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ok => write!(f, "OK"),
            Self::Warn => write!(f, "WARN"),
            Self::Crit => write!(f, "CRIT"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}
