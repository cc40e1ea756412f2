use std::path::PathBuf;

use thiserror::Error;

/// Failures that cross the operation boundary.
///
/// Probe timeouts, name-resolution misses and browse/share command
/// failures never show up here: those degrade to empty results at the
/// point they happen. Only path- and argument-level problems propagate.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("{0} parameter is required")]
    InvalidArgument(&'static str),

    #[error("file not found: {}", .0.display())]
    PathNotFound(PathBuf),

    #[error("cannot download a directory: {}", .0.display())]
    NotAFile(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl DiscoveryError {
    /// HTTP-class status the envelope contract assigns to this failure.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidArgument(_) | Self::NotAFile(_) => 400,
            Self::PathNotFound(_) => 404,
            Self::Io(_) => 500,
        }
    }
}
