//! Error types for qrgen operations

use thiserror::Error;

/// Result type alias using qrgen's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for qrgen operations
#[derive(Error, Debug)]
pub enum Error {
    /// QR code encoding failed (e.g. text exceeds capacity at the chosen level)
    #[error("Failed to encode QR code: {0}")]
    QrEncode(String),

    /// Image processing error
    #[error("Image processing error: {0}")]
    Image(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The UI toolkit failed to start or crashed
    #[error("GUI error: {0}")]
    Gui(String),
}

impl From<image::ImageError> for Error {
    fn from(e: image::ImageError) -> Self {
        Error::Image(e.to_string())
    }
}

#[cfg(feature = "gui")]
impl From<eframe::Error> for Error {
    fn from(e: eframe::Error) -> Self {
        Error::Gui(e.to_string())
    }
}
