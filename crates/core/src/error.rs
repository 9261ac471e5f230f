use std::path::PathBuf;
use thiserror::Error;
use versemap_api::CorpusError;

#[derive(Error, Debug)]
pub enum VersemapError {
    #[error("Corpus unavailable: {0}")]
    CorpusUnavailable(String),
    #[error("Failed to write {}: {source}", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Corpus error: {0}")]
    Corpus(#[source] CorpusError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<CorpusError> for VersemapError {
    fn from(err: CorpusError) -> Self {
        match err {
            CorpusError::Unavailable(reason) => VersemapError::CorpusUnavailable(reason),
            other => VersemapError::Corpus(other),
        }
    }
}

impl VersemapError {
    pub(crate) fn write_failure(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        VersemapError::WriteFailure {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, VersemapError>;
