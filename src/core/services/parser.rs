//! Section parser - pairs adjacency states with adjacency addresses
//!
//! The raw table interleaves the two walked columns: a state row for an
//! adjacency is followed by the address rows of that adjacency. Pairing is
//! done by an explicit accumulator rather than by carrying loose variables
//! across iterations.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use crate::core::models::{NeighborRecord, Section, SnmpRow};

/// Where the accumulator stands between rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pairing {
    /// No usable state seen yet; addresses are dropped
    AwaitingState,
    /// Addresses are attributed to this state
    Holding(i64),
}

/// Incremental parser turning rows into a [`Section`]
#[derive(Debug, Clone)]
pub struct SectionParser {
    pairing: Pairing,
    section: Section,
}

impl Default for SectionParser {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionParser {
    /// Start with no state and an empty section
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pairing: Pairing::AwaitingState,
            section: Section::new(),
        }
    }

    /// Consume one row
    ///
    /// A filled state cell takes precedence over the address cell.
    pub fn feed(&mut self, row: &SnmpRow) {
        if !row.state.is_empty() {
            self.pairing = match row.state.trim().parse::<i64>() {
                Ok(state) => Pairing::Holding(state),
                Err(_) => {
                    log::debug!("dropping malformed adjacency state {:?}", row.state);
                    Pairing::AwaitingState
                },
            };
            return;
        }

        if row.address.is_empty() {
            return;
        }

        let Some(address) = decode_address(&row.address) else {
            log::debug!("skipping address of unrecognized length {}", row.address.len());
            return;
        };

        match self.pairing {
            Pairing::Holding(state) => {
                let record = NeighborRecord::new(state, address);
                log::trace!("neighbor {} in state {state}", record.key());
                self.section.insert(record);
            },
            Pairing::AwaitingState => {
                log::debug!("address {address} has no preceding adjacency state, dropping it");
            },
        }
    }

    /// Finish parsing and return the section
    #[must_use]
    pub fn finish(self) -> Section {
        self.section
    }
}

/// Decode raw address octets
///
/// Four octets are an IPv4 address, sixteen an IPv6 address; any other
/// length is not an address.
#[must_use]
pub fn decode_address(octets: &[u8]) -> Option<IpAddr> {
    if let Ok(v4) = <[u8; 4]>::try_from(octets) {
        return Some(IpAddr::V4(Ipv4Addr::from(v4)));
    }
    if let Ok(v6) = <[u8; 16]>::try_from(octets) {
        return Some(IpAddr::V6(Ipv6Addr::from(v6)));
    }
    None
}

/// Parse a complete row stream into a [`Section`]
///
/// Never fails: malformed rows are dropped.
pub fn parse_section<'a, I>(rows: I) -> Section
where
    I: IntoIterator<Item = &'a SnmpRow>,
{
    let mut parser = SectionParser::new();
    for row in rows {
        parser.feed(row);
    }
    parser.finish()
}
