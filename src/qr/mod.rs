//! QR code encoding and rendering
//!
//! This module is the encoding collaborator behind the display controller:
//! text goes in, a module matrix comes out, and the matrix is rasterised into a
//! fixed-size square greyscale image.

mod encoder;
mod render;

pub use encoder::QrEncoder;
pub use render::render;

use crate::error::Result;
use image::GrayImage;
use qrcode::QrCode;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// QR error-correction level, trading capacity for damage resilience
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCorrection {
    /// ~7% of codewords can be restored
    Low,
    /// ~15% of codewords can be restored
    #[default]
    Medium,
    /// ~25% of codewords can be restored
    Quartile,
    /// ~30% of codewords can be restored
    High,
}

impl ErrorCorrection {
    /// Parse a level identifier (case-insensitive, full name or single letter).
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" | "l" => Some(Self::Low),
            "medium" | "m" => Some(Self::Medium),
            "quartile" | "q" => Some(Self::Quartile),
            "high" | "h" => Some(Self::High),
            _ => None,
        }
    }
}

impl FromStr for ErrorCorrection {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(value).ok_or_else(|| {
            format!("Unsupported error correction level '{value}', expected low/medium/quartile/high")
        })
    }
}

impl fmt::Display for ErrorCorrection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::Quartile => "quartile",
            Self::High => "high",
        };
        f.write_str(name)
    }
}

impl From<ErrorCorrection> for qrcode::EcLevel {
    fn from(level: ErrorCorrection) -> Self {
        match level {
            ErrorCorrection::Low => qrcode::EcLevel::L,
            ErrorCorrection::Medium => qrcode::EcLevel::M,
            ErrorCorrection::Quartile => qrcode::EcLevel::Q,
            ErrorCorrection::High => qrcode::EcLevel::H,
        }
    }
}

/// An encoded QR symbol, before rasterisation
pub struct QrMatrix {
    code: QrCode,
    level: ErrorCorrection,
}

impl QrMatrix {
    pub(crate) fn new(code: QrCode, level: ErrorCorrection) -> Self {
        Self { code, level }
    }

    /// Number of modules along one side, quiet zone excluded
    pub fn width(&self) -> usize {
        self.code.width()
    }

    /// Error-correction level the symbol was encoded with
    pub fn level(&self) -> ErrorCorrection {
        self.level
    }

    /// Symbol version (1..=40 for normal QR codes)
    pub fn version(&self) -> i16 {
        match self.code.version() {
            qrcode::Version::Normal(v) | qrcode::Version::Micro(v) => v,
        }
    }

    pub(crate) fn code(&self) -> &QrCode {
        &self.code
    }
}

impl fmt::Debug for QrMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QrMatrix")
            .field("width", &self.width())
            .field("version", &self.version())
            .field("level", &self.level)
            .finish()
    }
}

/// The encoding collaborator consumed by the display controller
pub trait BarcodeEncoder {
    /// Encode `text` at the given error-correction level
    fn encode(&self, text: &str, level: ErrorCorrection) -> Result<QrMatrix>;

    /// Rasterise an encoded matrix into a square image of `size_px` pixels
    fn render(&self, matrix: &QrMatrix, size_px: u32) -> GrayImage {
        render(matrix, size_px)
    }
}
