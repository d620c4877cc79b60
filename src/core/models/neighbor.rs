//! Neighbor records and the parsed section
//!
//! A [`Section`] is the parsed form of one SNMP snapshot: every IS-IS
//! neighbor address seen, keyed by its canonical textual form.

use std::collections::BTreeMap;
use std::net::IpAddr;

use serde::Serialize;

/// Address family of a neighbor address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressFamily {
    /// 4-byte address
    Ipv4,
    /// 16-byte address
    Ipv6,
}

impl std::fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ipv4 => write!(f, "IPv4"),
            Self::Ipv6 => write!(f, "IPv6"),
        }
    }
}

/// One adjacency address together with the adjacency state it belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NeighborRecord {
    /// Raw `isisISAdjState` value
    pub state: i64,
    /// Neighbor address
    pub address: IpAddr,
}

impl NeighborRecord {
    /// Create a record
    #[must_use]
    pub const fn new(state: i64, address: IpAddr) -> Self {
        Self { state, address }
    }

    /// Family of the neighbor address
    #[must_use]
    pub const fn address_family(&self) -> AddressFamily {
        match self.address {
            IpAddr::V4(_) => AddressFamily::Ipv4,
            IpAddr::V6(_) => AddressFamily::Ipv6,
        }
    }

    /// Key of this record within a [`Section`]
    ///
    /// Dotted decimal for IPv4, compressed form for IPv6.
    #[must_use]
    pub fn key(&self) -> String {
        self.address.to_string()
    }
}

/// Parsed neighbors of one snapshot, keyed by address
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Section {
    neighbors: BTreeMap<String, NeighborRecord>,
}

impl Section {
    /// Create an empty section
    #[must_use]
    pub const fn new() -> Self {
        Self {
            neighbors: BTreeMap::new(),
        }
    }

    /// Insert a record under its key, replacing any earlier one
    pub fn insert(&mut self, record: NeighborRecord) -> Option<NeighborRecord> {
        self.neighbors.insert(record.key(), record)
    }

    /// Look up a neighbor by item name
    #[must_use]
    pub fn get(&self, item: &str) -> Option<&NeighborRecord> {
        self.neighbors.get(item)
    }

    /// Number of neighbors
    #[must_use]
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    /// Whether no neighbor was parsed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    /// Iterate `(item, record)` pairs in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &NeighborRecord)> {
        self.neighbors.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FromIterator<NeighborRecord> for Section {
    fn from_iter<I: IntoIterator<Item = NeighborRecord>>(iter: I) -> Self {
        let mut section = Self::new();
        for record in iter {
            section.insert(record);
        }
        section
    }
}
