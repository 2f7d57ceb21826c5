//! Sequential, paced fetch of the whole identifier range with a bounded retry.

use crate::api::SpeciesSource;
use crate::builder::RecordBuilder;
use crate::config::RetryPolicy;
use crate::errors::FetchError;
use schema::SpeciesRecord;
use tokio::time::sleep;
use tracing::{info, warn};

/// What became of one identifier.
#[derive(Debug)]
pub enum FetchOutcome {
    Built(SpeciesRecord),
    /// Every attempt failed; `error` is the last failure.
    Skipped { id: u32, error: FetchError },
}

/// Result of a batch run: the base dataset plus the identifiers left out.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Sorted ascending by `dex_no`, no duplicates.
    pub records: Vec<SpeciesRecord>,
    pub skipped: Vec<u32>,
}

pub struct BatchFetcher<'a, S: SpeciesSource + ?Sized> {
    builder: RecordBuilder<'a, S>,
    policy: RetryPolicy,
    progress_interval: u32,
}

impl<'a, S: SpeciesSource + ?Sized> BatchFetcher<'a, S> {
    pub fn new(builder: RecordBuilder<'a, S>, policy: RetryPolicy, progress_interval: u32) -> Self {
        Self {
            builder,
            policy,
            progress_interval,
        }
    }

    /// Builds one record, retrying up to `max_retries` times after a backoff.
    pub async fn fetch_one(&self, id: u32) -> FetchOutcome {
        let mut attempt = 0;
        loop {
            match self.builder.build(id).await {
                Ok(record) => return FetchOutcome::Built(record),
                Err(error) if attempt < self.policy.max_retries => {
                    warn!(id, attempt, %error, "fetch failed, retrying");
                    attempt += 1;
                    sleep(self.policy.retry_backoff).await;
                }
                Err(error) => {
                    warn!(id, %error, "retry failed, skipping");
                    return FetchOutcome::Skipped { id, error };
                }
            }
        }
    }

    /// Walks `1..=max_id` one identifier at a time. Never fails: identifiers
    /// that exhaust their retries are reported in `skipped` and left out.
    pub async fn run(&self, max_id: u32) -> BatchReport {
        let mut report = BatchReport::default();

        for id in 1..=max_id {
            match self.fetch_one(id).await {
                FetchOutcome::Built(record) => {
                    report.records.push(record);
                    sleep(self.policy.record_pacing).await;
                }
                FetchOutcome::Skipped { id, .. } => report.skipped.push(id),
            }

            if self.progress_interval > 0 && id % self.progress_interval == 0 {
                info!("...processed #{id}");
            }
        }

        finalize(&mut report.records);
        report
    }

    pub async fn build_all(&self, max_id: u32) -> Vec<SpeciesRecord> {
        self.run(max_id).await.records
    }
}

/// Sorts by dex number and keeps the first record for any repeated number.
fn finalize(records: &mut Vec<SpeciesRecord>) {
    records.sort_by_key(|r| r.dex_no);
    records.dedup_by(|later, earlier| {
        let duplicate = later.dex_no == earlier.dex_no;
        if duplicate {
            warn!(dex_no = later.dex_no, dropped = %later.id, kept = %earlier.id, "duplicate dex number");
        }
        duplicate
    });
}
