//! One generator run: fetch the base dataset once, then reconcile and write
//! it for every configured generation.

use crate::api::{PokeApiClient, SpeciesSource};
use crate::batch::BatchFetcher;
use crate::builder::RecordBuilder;
use crate::config::DatagenConfig;
use crate::errors::DatagenResult;
use crate::reconcile::{load_overlay, reconcile};
use crate::validate::validate_dataset;
use crate::writer::DatasetWriter;
use schema::Generation;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Debug, Default)]
pub struct RunSummary {
    pub base_records: usize,
    /// Identifiers that failed every attempt and are absent from all datasets.
    pub skipped: Vec<u32>,
    pub written: Vec<(Generation, PathBuf)>,
}

pub async fn run<S: SpeciesSource + ?Sized>(config: &DatagenConfig, source: &S) -> DatagenResult<RunSummary> {
    let fetcher = BatchFetcher::new(
        RecordBuilder::new(source, config.ability_pacing),
        config.retry,
        config.progress_interval,
    );

    info!(max_id = config.national_max, "building base dataset");
    let report = fetcher.run(config.national_max).await;
    if !report.skipped.is_empty() {
        warn!(count = report.skipped.len(), ids = ?report.skipped, "identifiers skipped after retry");
    }

    let base = report.records;
    let writer = DatasetWriter::new(&config.output_dir);
    let mut written = Vec::with_capacity(config.generations.len());

    for &generation in &config.generations {
        let overlay = load_overlay(&config.patch_path(generation));
        let dataset = reconcile(&base, &overlay);

        for issue in validate_dataset(&dataset) {
            warn!(%generation, %issue, "dataset check");
        }

        let path = writer.write(generation, &dataset)?;
        written.push((generation, path));
    }

    Ok(RunSummary {
        base_records: base.len(),
        skipped: report.skipped,
        written,
    })
}

/// [`run`] against the live PokeAPI service described by `config`.
pub async fn run_with_pokeapi(config: &DatagenConfig) -> DatagenResult<RunSummary> {
    let client = PokeApiClient::new(config)?;
    run(config, &client).await
}
