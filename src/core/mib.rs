//! ISIS-MIB (RFC 4444) objects this plugin reads
//!
//! ```text
//! .1.3.6.1.2.1.138                isisMIB
//! └── .1.6                        isisISAdj
//!     ├── .1.1.2.<circ>.<adj>     isisISAdjState
//!     └── .3.1.3.<circ>.<adj>.<n> isisISAdjIPAddrAddress
//! ```

/// Object whose presence marks a device as IS-IS capable (`isisSysVersion.0`)
pub const DETECT_OID: &str = ".1.3.6.1.2.1.138.1.1.1.1.0";

/// Base of the adjacency subtree
pub const FETCH_BASE: &str = ".1.3.6.1.2.1.138.1.6";

/// `isisISAdjState`, relative to [`FETCH_BASE`]
pub const ADJ_STATE_COLUMN: &str = "1.1.2";

/// `isisISAdjIPAddrAddress`, relative to [`FETCH_BASE`]
pub const ADJ_ADDRESS_COLUMN: &str = "3.1.3";

/// Symbolic name of the state column
pub const ADJ_STATE_NAME: &str = "isisISAdjState";

/// Symbolic name of the address column
pub const ADJ_ADDRESS_NAME: &str = "isisISAdjIPAddrAddress";

/// Fully qualified OID of the state column
#[must_use]
pub fn state_column_oid() -> String {
    format!("{FETCH_BASE}.{ADJ_STATE_COLUMN}")
}

/// Fully qualified OID of the address column
#[must_use]
pub fn address_column_oid() -> String {
    format!("{FETCH_BASE}.{ADJ_ADDRESS_COLUMN}")
}
