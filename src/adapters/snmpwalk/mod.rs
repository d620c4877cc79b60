//! `snmpwalk` text adapter
//!
//! Implements `SnapshotSource` over the text output of net-snmp's
//! `snmpwalk`, as produced by walking the state and address columns.
//!
//! - [`line`] - Recognize and decode single walk lines
//! - [`source`] - Group lines by adjacency and emit rows

pub mod line;
pub mod source;

pub use source::{WalkError, WalkSnapshot};
