//! Discovered services and check results

use serde::Serialize;

use super::{Label, Severity};

/// Service description template; `%s` is replaced by the item
pub const SERVICE_NAME_TEMPLATE: &str = "ISIS Status Neighbor %s";

/// A monitored service found by discovery
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Service {
    /// Item name (the neighbor address)
    pub item: String,
    /// Labels to attach to the service
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<Label>,
}

impl Service {
    /// Create an unlabeled service
    pub fn new(item: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            labels: Vec::new(),
        }
    }

    /// Create a service carrying labels
    pub fn with_labels(item: impl Into<String>, labels: Vec<Label>) -> Self {
        Self {
            item: item.into(),
            labels,
        }
    }

    /// Full service description, e.g. `ISIS Status Neighbor 10.0.0.1`
    #[must_use]
    pub fn description(&self) -> String {
        SERVICE_NAME_TEMPLATE.replace("%s", &self.item)
    }
}

/// One result produced by a check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    /// Severity of the result
    pub state: Severity,
    /// Single-line summary
    pub summary: String,
}

impl CheckResult {
    /// Create a result
    pub fn new(state: Severity, summary: impl Into<String>) -> Self {
        Self {
            state,
            summary: summary.into(),
        }
    }
}
