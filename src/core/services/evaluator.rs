//! State evaluator - maps an adjacency state to a check result

use thiserror::Error;

use crate::core::models::{AdjacencyState, CheckResult, Section};

/// Errors raised while evaluating a neighbor
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EvaluateError {
    /// The device reported a state the MIB does not define
    #[error("neighbor {address} reports undefined adjacency state {state}")]
    UnknownState {
        /// Neighbor address
        address: String,
        /// Raw state value
        state: i64,
    },
}

/// Check the neighbor named `item`
///
/// Returns no result when the item is not in the section: the adjacency is
/// gone and the service is stale. Otherwise returns exactly one result.
pub fn check_neighbor(item: &str, section: &Section) -> Result<Vec<CheckResult>, EvaluateError> {
    let Some(record) = section.get(item) else {
        log::debug!("item {item:?} not in section");
        return Ok(Vec::new());
    };

    let state = AdjacencyState::from_raw(record.state).ok_or_else(|| EvaluateError::UnknownState {
        address: record.address.to_string(),
        state: record.state,
    })?;

    let summary = format!("State with neighbor {} is {}", record.address, state.label());
    Ok(vec![CheckResult::new(state.severity(), summary)])
}
