use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed to read noise words from {path}: {source}")]
    NoiseWords { path: PathBuf, source: std::io::Error },

    #[error("failed to read document list {path}: {source}")]
    DocumentList { path: PathBuf, source: std::io::Error },

    #[error("failed to read document {path}: {source}")]
    Document { path: PathBuf, source: std::io::Error },

    #[error(transparent)]
    Walk(#[from] walkdir::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
