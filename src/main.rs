//! isis-adjacency - IS-IS neighbor monitoring from ISIS-MIB walks
//!
//! Reads `snmpwalk` output of the ISIS-MIB adjacency tables and turns it
//! into discoverable services and per-neighbor health checks.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

mod cli;

/// Main entry point for the isis-adjacency CLI
fn main() {
    match cli::run() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            // UNKNOWN
            std::process::exit(3);
        },
    }
}
