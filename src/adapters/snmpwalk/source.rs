//! Walk-file snapshot source
//!
//! Rebuilds the two-column row stream from `snmpwalk` text: for every
//! adjacency (`<circuit>.<adjacency>`), its state row followed by its
//! address rows, in numeric index order.

use std::collections::BTreeMap;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::line::{Column, Line, Value, parse_line};
use crate::core::models::SnmpRow;
use crate::core::ports::SnapshotSource;

/// Errors reading walk input
#[derive(Debug, Error)]
pub enum WalkError {
    /// The walk file could not be read
    #[error("failed to read walk file {path}: {source}")]
    Read {
        /// File that was being read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Standard input could not be read
    #[error("failed to read walk from stdin: {0}")]
    Stdin(std::io::Error),
}

/// Rows collected for one adjacency
#[derive(Debug, Default)]
struct Adjacency {
    state: Option<String>,
    addresses: BTreeMap<Vec<u32>, Vec<u8>>,
}

/// A snapshot held as `snmpwalk` text
#[derive(Debug, Clone)]
pub struct WalkSnapshot {
    text: String,
}

impl WalkSnapshot {
    /// Wrap walk text already in memory
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Load a walk file
    pub fn from_path(path: &Path) -> Result<Self, WalkError> {
        let text = fs::read_to_string(path).map_err(|source| WalkError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(text))
    }

    /// Read a walk from standard input
    pub fn from_stdin() -> Result<Self, WalkError> {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text).map_err(WalkError::Stdin)?;
        Ok(Self::new(text))
    }

    /// Decode the walk into rows
    #[must_use]
    pub fn to_rows(&self) -> Vec<SnmpRow> {
        let adjacencies = self.collect_adjacencies();

        let mut orphans = Vec::new();
        let mut rows = Vec::new();
        for (index, adjacency) in adjacencies {
            match adjacency.state {
                Some(state) => {
                    rows.push(SnmpRow::state(state));
                    rows.extend(adjacency.addresses.into_values().map(SnmpRow::address));
                },
                None => {
                    log::debug!("adjacency {index:?} has addresses but no state");
                    orphans.extend(adjacency.addresses.into_values().map(SnmpRow::address));
                },
            }
        }

        // Orphaned addresses go first, before any state has been seen.
        orphans.append(&mut rows);
        orphans
    }

    fn collect_adjacencies(&self) -> BTreeMap<Vec<u32>, Adjacency> {
        let mut adjacencies: BTreeMap<Vec<u32>, Adjacency> = BTreeMap::new();
        // Address currently open for Hex-STRING continuation lines
        let mut open: Option<(Vec<u32>, Vec<u32>)> = None;

        for (number, text) in self.text.lines().enumerate() {
            match parse_line(text) {
                Line::Varbind(varbind) => {
                    open = None;
                    if varbind.index.len() < 2 {
                        log::debug!("line {}: index {:?} too short", number + 1, varbind.index);
                        continue;
                    }
                    let key = varbind.index[..2].to_vec();
                    let adjacency = adjacencies.entry(key.clone()).or_default();
                    match (varbind.column, varbind.value) {
                        (Column::State, Value::Integer(state)) => adjacency.state = Some(state),
                        (Column::Address, Value::Octets(octets)) => {
                            open = Some((key, varbind.index.clone()));
                            adjacency.addresses.insert(varbind.index, octets);
                        },
                        (column, _) => {
                            log::debug!("line {}: unexpected value for {column:?}", number + 1);
                        },
                    }
                },
                Line::HexContinuation(more) => {
                    let Some((key, index)) = &open else {
                        continue;
                    };
                    if let Some(octets) =
                        adjacencies.get_mut(key).and_then(|a| a.addresses.get_mut(index))
                    {
                        octets.extend(more);
                    }
                },
                Line::Other => open = None,
            }
        }

        adjacencies
    }
}

impl SnapshotSource for WalkSnapshot {
    fn rows(&self) -> anyhow::Result<Vec<SnmpRow>> {
        let rows = self.to_rows();
        log::debug!("walk decoded into {} rows", rows.len());
        Ok(rows)
    }
}
