use std::path::PathBuf;

use thiserror::Error;

/// No version token could be located in a filename pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("No version token found in pattern: {0}")]
pub struct PatternError(pub String);

#[derive(Debug, Error)]
pub enum ListingError {
    #[error("Failed to list directory {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum VersionUpError {
    #[error(transparent)]
    Pattern(#[from] PatternError),

    #[error(transparent)]
    Listing(#[from] ListingError),

    #[error("Path has no file name: {0:?}")]
    NoFileName(PathBuf),
}

#[derive(Debug, Error)]
pub enum PublishError {
    #[error(transparent)]
    Pattern(#[from] PatternError),

    #[error(transparent)]
    Listing(#[from] ListingError),

    #[error("Source is not a file: {0:?}")]
    NotAFile(PathBuf),

    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
