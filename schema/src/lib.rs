// Species dataset schema - shared record definitions
// This crate holds the I/O-free types that flow through the generator:
// the normalized species record, its stat block, the sparse patch overlay
// format, and the identifiers for types, stats and target generations.

// Re-export the main types
pub use generation::*;
pub use patch::*;
pub use pokemon_types::*;
pub use species_data::*;

pub mod generation;
pub mod patch;
pub mod pokemon_types;
pub mod species_data;
