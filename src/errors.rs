use std::path::PathBuf;
use thiserror::Error;

/// Failure of a single upstream lookup.
///
/// Transient by nature: the batch fetcher retries records that fail with it and
/// the record builder swallows it for ability lookups.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced a response (DNS, TLS, timeout, ...)
    #[error("GET {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// The service answered with a non-success status
    #[error("GET {url} -> {status}")]
    Status { url: String, status: u16 },
    /// The body did not match the expected shape
    #[error("GET {url} returned malformed data: {source}")]
    Malformed {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Problems reading a per-generation patch file.
#[derive(Debug, Error)]
pub enum PatchError {
    #[error("failed to read patch file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse patch file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors that abort the whole run.
#[derive(Debug, Error)]
pub enum DatagenError {
    /// The HTTP client could not be constructed
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
    /// Directory creation or dataset write failed
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A dataset could not be rendered as JSON
    #[error("failed to serialize dataset: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl DatagenError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DatagenError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Type alias for Results using FetchError
pub type FetchResult<T> = Result<T, FetchError>;

/// Type alias for Results using PatchError
pub type PatchResult<T> = Result<T, PatchError>;

/// Type alias for Results using DatagenError
pub type DatagenResult<T> = Result<T, DatagenError>;
