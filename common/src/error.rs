use std::path::PathBuf;
use thiserror::Error;

/// Failures talking to durable storage.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O failed at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize job list: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),

    #[error("no job id left after {0}")]
    IdsExhausted(i64),
}

/// Failures turning raw UI input into a filter.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("invalid salary range {0:?}, expected \"min-max\" or \"min+\"")]
    InvalidSalaryRange(String),

    #[error("unknown location match mode {0:?}, expected \"exact\" or \"substring\"")]
    InvalidLocationMatch(String),
}
