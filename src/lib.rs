// In: src/lib.rs

//! Species dataset generator
//!
//! Fetches every species from the upstream species-data service, localizes and
//! normalizes each record, overlays per-generation corrections and writes one
//! static `species.json` per generation for the downstream calculator app.

// --- MODULE DECLARATIONS ---
pub mod api;
pub mod batch;
pub mod builder;
pub mod config;
pub mod errors;
pub mod localize;
pub mod pipeline;
pub mod reconcile;
pub mod validate;
pub mod writer;

#[cfg(test)]
mod tests;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
pub use schema::{
    BaseStats, BaseStatsPatch, Generation, PatchOverlay, PokemonType, SpeciesPatch, SpeciesRecord,
    StatKind,
};

// --- From this crate's modules (`src/`) ---
pub use api::{PokeApiClient, SpeciesSource};
pub use batch::{BatchFetcher, BatchReport, FetchOutcome};
pub use builder::RecordBuilder;
pub use config::{DatagenConfig, RetryPolicy};
pub use pipeline::{run, run_with_pokeapi, RunSummary};
pub use reconcile::{load_overlay, reconcile};
pub use writer::DatasetWriter;

// Crate-specific error and result types.
pub use errors::{DatagenError, DatagenResult, FetchError, FetchResult, PatchError, PatchResult};
