//! Error types for icon generation

use thiserror::Error;

/// Result type alias for generator operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while producing icon assets
#[derive(Error, Debug)]
pub enum Error {
    /// Filesystem failure (directory creation, file write, temp file)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to decode an intermediate raster
    #[error("Image decoding failed: {0}")]
    Image(#[from] image::ImageError),

    /// Failed to draw a badge
    #[error("Rendering failed: {0}")]
    Render(String),

    /// Failed to encode PNG or ICO output
    #[error("Encoding failed: {0}")]
    Encode(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Config(err.to_string())
    }
}
