//! Snapshot source port
//!
//! Defines where the raw adjacency table comes from.

use crate::core::models::{Section, SnmpRow};
use crate::core::services::parse_section;

/// Supplier of one raw adjacency table snapshot
///
/// Implementations own the transport (a walk file, stdin, a live SNMP
/// session); the core only sees the rows.
pub trait SnapshotSource {
    /// Fetch the rows of one snapshot, in collector order
    fn rows(&self) -> anyhow::Result<Vec<SnmpRow>>;

    /// Fetch the snapshot and pair it into a neighbor section
    ///
    /// A failing fetch is returned as-is, never turned into an empty section.
    fn section(&self) -> anyhow::Result<Section> {
        let rows = self.rows()?;
        Ok(parse_section(&rows))
    }
}
