//! Service discovery

use std::path::Path;

use isis_adjacency::config::Config;
use isis_adjacency::core::ports::SnapshotSource;
use isis_adjacency::core::services::discover_services;
use isis_adjacency::output::{DiscoveryReport, OutputMode};

/// Discover services for the neighbors in a walk
pub fn discover(
    walk: Option<&Path>,
    config: Option<&Path>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    // Config first: a broken rule set should fail before reading stdin
    let config = Config::load(config)?;
    let section = super::open_walk(walk)?.section()?;

    let services = discover_services(&section, config.rules());
    log::info!(
        "discovered {} of {} neighbor(s) with {} rule(s)",
        services.len(),
        section.len(),
        config.rules().len()
    );

    DiscoveryReport::new(section.len(), config.rules().len(), services).render(mode);
    Ok(())
}
