//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `snmpwalk/` - Snapshots read from `snmpwalk` text output

pub mod snmpwalk;
