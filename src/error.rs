use thiserror::Error;

/// Failure taxonomy for a single run. Every variant is fatal; there are
/// no retries anywhere.
#[derive(Debug, Error)]
pub enum Error {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("extraction failed: {0}")]
    Extraction(String),

    #[error("file error: {0}")]
    FileSystem(#[from] std::io::Error),

    #[error("record file error: {0}")]
    Record(#[from] csv::Error),
}
