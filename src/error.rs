//! Error types for background setup and publishing
//!
//! Every variant here is fatal at setup time. An emblem that cannot be placed
//! around the avoid rectangle is not an error; the solver returns `None`.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for library operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while turning user options into a render state
#[derive(Error, Debug)]
pub enum Error {
    /// Alpha outside 0..=255
    #[error("Invalid {layer} alpha value {value}")]
    InvalidAlpha { layer: &'static str, value: i64 },

    /// Malformed `WIDTHxHEIGHT+X+Y` string, or a zero-sized emblem geometry
    #[error("Invalid geometry specification: {0}")]
    InvalidGeometry(String),

    /// Avoid rectangle without a positive width and height
    #[error("avoid geometry '{0}' must have positive width, height")]
    InvalidAvoid(String),

    /// Percentage that is not a number in 0..=100
    #[error("Invalid percentage: {0}")]
    InvalidPercentage(String),

    /// Color string that is neither hex, `rgb:` nor a known name
    #[error("Cannot parse color: {0}")]
    InvalidColor(String),

    /// Image could not be opened or decoded
    #[error("Cannot load image {}: {message}", path.display())]
    ImageLoad { path: PathBuf, message: String },

    /// Configuration file could not be parsed
    #[error("Invalid configuration in {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    /// Image could not be encoded while publishing
    #[error("Failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
