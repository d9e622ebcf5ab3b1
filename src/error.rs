//! Error types for the asset toolkit

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for toolkit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating or auditing assets
#[derive(Error, Debug)]
pub enum Error {
    /// Filesystem failure while reading or writing an asset
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// PNG encode/decode failure
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Manifest serialization failure
    #[error("Manifest error: {0}")]
    Manifest(#[from] serde_json::Error),

    /// A design name that is not part of any series
    #[error("Unknown design: {0}")]
    UnknownDesign(String),

    /// A page expected by the audit is missing on disk
    #[error("Missing page: {0}")]
    MissingPage(PathBuf),
}
