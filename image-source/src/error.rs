use thiserror::Error;

pub type Result<T> = std::result::Result<T, ResolveError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("No image file name given")]
    EmptyHint,

    #[error("Image not found: {0}")]
    NotFound(String),
}
