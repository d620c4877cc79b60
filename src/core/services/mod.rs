//! Business logic services
//!
//! Pure logic that operates on domain models. These services have no I/O
//! dependencies - they operate on data passed in and return results.
//!
//! - [`parser`] - Pair raw rows into a [`Section`](crate::core::models::Section)
//! - [`discovery`] - Select neighbors for monitoring via subnet rules
//! - [`evaluator`] - Turn a neighbor's adjacency state into a check result

pub mod discovery;
pub mod evaluator;
pub mod parser;

pub use discovery::{discover_services, first_matching_rule};
pub use evaluator::{EvaluateError, check_neighbor};
pub use parser::{SectionParser, decode_address, parse_section};
