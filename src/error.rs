//! Error types for the card renderers

use thiserror::Error;

/// Result type alias for rendering operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rendering or writing cards
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to encode a canvas as PNG
    #[error("PNG encoding failed: {0}")]
    EncodeError(String),

    /// Failed to write an output file
    #[error("Failed to write output: {0}")]
    OutputError(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::OutputError(err.to_string())
    }
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Error::EncodeError(err.to_string())
    }
}
