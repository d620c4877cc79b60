//! Raw rows of the ISIS adjacency table
//!
//! The collector walks two columns (`isisISAdjState` and
//! `isisISAdjIPAddrAddress`) and hands them over as one stream of rows in
//! which exactly one cell is filled.

use serde::Serialize;

/// One row of the raw two-column table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SnmpRow {
    /// Adjacency state as a decimal string, or empty
    pub state: String,
    /// Raw address octets, or empty
    pub address: Vec<u8>,
}

impl SnmpRow {
    /// A row carrying only a state cell
    pub fn state(state: impl Into<String>) -> Self {
        Self {
            state: state.into(),
            address: Vec::new(),
        }
    }

    /// A row carrying only an address cell
    pub fn address(address: impl Into<Vec<u8>>) -> Self {
        Self {
            state: String::new(),
            address: address.into(),
        }
    }

    /// Build a row from text cells where each character is one octet
    ///
    /// SNMP collectors pass OCTET STRING values as Latin-1 text. An address
    /// containing characters above U+00FF cannot be mapped back to octets and
    /// is left empty.
    #[must_use]
    pub fn from_text(state: &str, address: &str) -> Self {
        let octets = latin1_octets(address).unwrap_or_else(|| {
            log::debug!("address cell {address:?} is not Latin-1 text, ignoring it");
            Vec::new()
        });
        Self {
            state: state.to_string(),
            address: octets,
        }
    }

    /// Whether both cells are empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.is_empty() && self.address.is_empty()
    }
}

fn latin1_octets(text: &str) -> Option<Vec<u8>> {
    text.chars().map(|c| u8::try_from(u32::from(c)).ok()).collect()
}
