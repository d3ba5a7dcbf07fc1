//! Error types for the autobiography portfolio

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for portfolio setup and lightbox operations
#[derive(Error, Debug)]
pub enum PortfolioError {
    /// Lightbox asked to show an image that is not in the gallery
    #[error("Gallery index {index} out of range (gallery has {len} images)")]
    IndexOutOfRange { index: usize, len: usize },

    /// Page manifest could not be read from disk
    #[error("Failed to read manifest {path:?}: {source}")]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Explicitly requested manifest does not exist
    #[error("Manifest not found: {0:?}")]
    ManifestNotFound(PathBuf),

    /// Page manifest is not valid JSON or has the wrong shape
    #[error("Manifest parse error: {0}")]
    ManifestParse(#[from] serde_json::Error),

    /// Gallery entry without an image source
    #[error("Gallery image {index} has no source")]
    MissingImageSource { index: usize },
}

/// Result type alias using PortfolioError
pub type PortfolioResult<T> = Result<T, PortfolioError>;
