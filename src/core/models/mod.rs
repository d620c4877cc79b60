//! Domain models for IS-IS adjacency monitoring
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`NeighborRecord`] / [`Section`] - Parsed adjacency addresses
//! - [`AdjacencyState`] - `isisISAdjState` values
//! - [`Severity`] - Monitoring result states
//! - [`SubnetRule`] - Discovery filter rule
//! - [`Service`] / [`CheckResult`] - What discovery and checks produce
//! - [`SnmpRow`] - One row of the raw two-column table

mod neighbor;
mod row;
mod rule;
mod service;
mod severity;
mod state;

pub use neighbor::{AddressFamily, NeighborRecord, Section};
pub use row::SnmpRow;
pub use rule::{Label, RuleError, SubnetRule, parse_subnet};
pub use service::{CheckResult, SERVICE_NAME_TEMPLATE, Service};
pub use severity::Severity;
pub use state::AdjacencyState;
