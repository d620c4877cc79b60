//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between core logic and the systems
//! that feed it. Implementations live in the `adapters` module.

mod snapshot_source;

pub use snapshot_source::SnapshotSource;
