//! Check one neighbor

use std::path::Path;

use isis_adjacency::core::models::Severity;
use isis_adjacency::core::ports::SnapshotSource;
use isis_adjacency::core::services::check_neighbor;
use isis_adjacency::output::{CheckReport, OutputMode};

/// Check the adjacency of `item`, returning the resulting state
///
/// A missing item or an undefined adjacency state yields `UNKNOWN`.
pub fn check(walk: Option<&Path>, item: &str, mode: OutputMode) -> anyhow::Result<Severity> {
    let section = super::open_walk(walk)?.section()?;

    let report = match check_neighbor(item, &section) {
        Ok(results) => CheckReport::new(item, results),
        Err(e) => {
            log::error!("{e}");
            CheckReport::failed(item, e.to_string())
        },
    };

    report.render(mode);
    Ok(report.state)
}
