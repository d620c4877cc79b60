//! Command implementations

mod check;
mod discover;
mod oids;
mod parse;

pub use check::check;
pub use discover::discover;
pub use oids::oids;
pub use parse::parse;

use std::path::Path;

use isis_adjacency::adapters::snmpwalk::WalkSnapshot;

/// Open the snapshot held in a walk file, or on stdin
fn open_walk(walk: Option<&Path>) -> anyhow::Result<WalkSnapshot> {
    let snapshot = match walk {
        Some(path) => WalkSnapshot::from_path(path)?,
        None => WalkSnapshot::from_stdin()?,
    };
    Ok(snapshot)
}
