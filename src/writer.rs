use crate::errors::{DatagenError, DatagenResult};
use schema::{Generation, SpeciesRecord};
use std::fs;
use std::path::PathBuf;
use tracing::info;

pub const DATASET_FILE_NAME: &str = "species.json";

/// Writes one `species.json` per generation under a shared base directory.
pub struct DatasetWriter {
    base_dir: PathBuf,
}

impl DatasetWriter {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// `<base_dir>/<gen>/species.json`
    pub fn output_path(&self, generation: Generation) -> PathBuf {
        self.base_dir.join(generation.tag()).join(DATASET_FILE_NAME)
    }

    /// Creates the generation directory if needed and overwrites its dataset
    /// file with pretty-printed JSON. Returns the path written.
    pub fn write(&self, generation: Generation, records: &[SpeciesRecord]) -> DatagenResult<PathBuf> {
        let path = self.output_path(generation);
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|e| DatagenError::io(dir, e))?;
        }

        let json = serde_json::to_string_pretty(records)?;
        fs::write(&path, json).map_err(|e| DatagenError::io(&path, e))?;

        info!(%generation, entries = records.len(), path = %path.display(), "wrote dataset");
        Ok(path)
    }
}
