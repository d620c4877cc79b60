//! Core domain logic for IS-IS adjacency monitoring
//!
//! This module contains pure logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`NeighborRecord`, `SubnetRule`, `Severity`)
//! - `services/` - Parsing, discovery and state evaluation
//! - `ports/` - Trait definitions for external dependencies
//! - `mib` - The ISIS-MIB objects the section is built from

pub mod mib;
pub mod models;
pub mod ports;
pub mod services;
