//! Build-time constants for a generator run, gathered in one place.

use schema::Generation;
use std::path::PathBuf;
use std::time::Duration;
use strum::IntoEnumIterator;

/// Highest national dex number to request.
pub const NATIONAL_MAX: u32 = 1025;

pub const POKEAPI_BASE_URL: &str = "https://pokeapi.co/api/v2";
pub const USER_AGENT: &str = "pokemon-calc-builder";

/// How the batch fetcher paces itself and reacts to failed records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Extra attempts after the first failure of a record.
    pub max_retries: u32,
    /// Pause after every successfully built record.
    pub record_pacing: Duration,
    /// Pause before each retry.
    pub retry_backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 1,
            record_pacing: Duration::from_millis(80),
            retry_backoff: Duration::from_millis(500),
        }
    }
}

impl RetryPolicy {
    /// No pauses at all; used by tests that drive fake sources.
    pub fn immediate(max_retries: u32) -> Self {
        Self {
            max_retries,
            record_pacing: Duration::ZERO,
            retry_backoff: Duration::ZERO,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DatagenConfig {
    pub api_base_url: String,
    pub user_agent: String,
    pub request_timeout: Duration,
    /// Identifiers `1..=national_max` are fetched.
    pub national_max: u32,
    pub retry: RetryPolicy,
    /// Pause after each ability localization lookup.
    pub ability_pacing: Duration,
    /// Log a progress line every this many identifiers.
    pub progress_interval: u32,
    /// Directory holding `<gen>-species-patches.json` files.
    pub patch_dir: PathBuf,
    /// Datasets land in `<output_dir>/<gen>/species.json`.
    pub output_dir: PathBuf,
    pub generations: Vec<Generation>,
}

impl Default for DatagenConfig {
    fn default() -> Self {
        Self {
            api_base_url: POKEAPI_BASE_URL.to_string(),
            user_agent: USER_AGENT.to_string(),
            request_timeout: Duration::from_secs(30),
            national_max: NATIONAL_MAX,
            retry: RetryPolicy::default(),
            ability_pacing: Duration::from_millis(40),
            progress_interval: 50,
            patch_dir: PathBuf::from("patches"),
            output_dir: PathBuf::from("src").join("data"),
            generations: Generation::iter().collect(),
        }
    }
}

impl DatagenConfig {
    pub fn patch_path(&self, generation: Generation) -> PathBuf {
        self.patch_dir.join(generation.patch_file_name())
    }
}
