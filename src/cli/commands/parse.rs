//! Show parsed neighbors

use std::path::Path;

use isis_adjacency::core::ports::SnapshotSource;
use isis_adjacency::core::services::parse_section;
use isis_adjacency::output::{OutputMode, ParseReport};

/// Parse a walk and list the neighbors found
pub fn parse(walk: Option<&Path>, mode: OutputMode) -> anyhow::Result<()> {
    let rows = super::open_walk(walk)?.rows()?;
    let section = parse_section(&rows);
    ParseReport::new(rows.len(), &section).render(mode);
    Ok(())
}
