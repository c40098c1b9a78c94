use std::io;
use std::path::PathBuf;
use cloud::DecodeError;
use image_source::ResolveError;
use thiserror::Error;
use crate::stage::FetchStage;

pub type Result<T> = std::result::Result<T, FetchError>;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Request failed with status {0}")]
    Status(u16),

    #[error("Request timed out")]
    Timeout,
}

/// Everything that can go wrong during one fetch. None of these reach the
/// caller of [`crate::DataConnector::fetch`].
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{0}")]
    PathNotFound(#[from] ResolveError),

    #[error("Read error for {}: {}", path.display(), source)]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{0}")]
    Transport(#[from] TransportError),

    #[error("Empty response")]
    EmptyResponse,

    #[error("Parse error: {0}")]
    Decode(#[from] DecodeError),
}

impl FetchError {
    /// The stage the fetch was in when it failed.
    pub fn stage(&self) -> FetchStage {
        match self {
            FetchError::PathNotFound(_) => FetchStage::PathResolving,
            FetchError::Read { .. } => FetchStage::Reading,
            FetchError::Transport(_) | FetchError::EmptyResponse => FetchStage::Uploading,
            FetchError::Decode(_) => FetchStage::Decoding,
        }
    }
}
