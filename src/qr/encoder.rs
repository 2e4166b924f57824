//! QR code encoder

use crate::error::{Error, Result};
use crate::qr::{BarcodeEncoder, ErrorCorrection, QrMatrix};
use qrcode::bits::Bits;
use qrcode::types::QrError;
use qrcode::{EcLevel, QrCode, QrResult, Version};

/// QR code encoder backed by the `qrcode` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct QrEncoder;

impl QrEncoder {
    /// Create a new QR encoder
    pub fn new() -> Self {
        Self
    }
}

impl BarcodeEncoder for QrEncoder {
    fn encode(&self, text: &str, level: ErrorCorrection) -> Result<QrMatrix> {
        let code = if text.is_ascii() {
            QrCode::with_error_correction_level(text.as_bytes(), level.into())
        } else {
            encode_utf8_bytes(text.as_bytes(), level.into())
        }
        .map_err(|e| Error::QrEncode(format!("{e} ({} bytes at {level} level)", text.len())))?;

        let matrix = QrMatrix::new(code, level);
        tracing::debug!(
            "Encoded QR: version={}, ecc_level={}, width={}, length={}",
            matrix.version(),
            level,
            matrix.width(),
            text.len()
        );

        Ok(matrix)
    }
}

/// Encode non-ASCII text as a single byte-mode segment in the smallest fitting version.
///
/// The optimiser in `qrcode` would otherwise read some UTF-8 byte pairs as
/// Shift-JIS Kanji, which scanners then decode as the wrong characters.
fn encode_utf8_bytes(data: &[u8], ec_level: EcLevel) -> QrResult<QrCode> {
    for version in 1..=40 {
        let mut bits = Bits::new(Version::Normal(version));
        if bits.push_byte_data(data).is_err() || bits.push_terminator(ec_level).is_err() {
            continue;
        }
        return QrCode::with_bits(bits, ec_level);
    }
    Err(QrError::DataTooLong)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_string() {
        let matrix = QrEncoder::new()
            .encode("HELLO", ErrorCorrection::Medium)
            .unwrap();
        assert_eq!(matrix.version(), 1);
        assert_eq!(matrix.width(), 21);
        assert_eq!(matrix.level(), ErrorCorrection::Medium);
    }

    #[test]
    fn test_finder_pattern_is_dark() {
        let matrix = QrEncoder::new()
            .encode("HELLO", ErrorCorrection::Medium)
            .unwrap();
        assert_eq!(matrix.code()[(0, 0)], qrcode::Color::Dark);
        assert_eq!(matrix.code()[(1, 1)], qrcode::Color::Light);
    }

    #[test]
    fn test_overflow_is_qr_encode_error() {
        // Version 40-M holds 2331 bytes.
        let text = "x".repeat(2400);
        let err = QrEncoder::new()
            .encode(&text, ErrorCorrection::Medium)
            .unwrap_err();
        assert!(matches!(err, Error::QrEncode(_)));
    }

    #[test]
    fn test_utf8_uses_byte_capacity() {
        // "é" is two bytes, so 1165 of them fill version 40-M's 2331-byte limit less one.
        let fits = "é".repeat(1165);
        let matrix = QrEncoder::new()
            .encode(&fits, ErrorCorrection::Medium)
            .unwrap();
        assert_eq!(matrix.version(), 40);

        let too_long = "é".repeat(1166);
        assert!(matches!(
            QrEncoder::new().encode(&too_long, ErrorCorrection::Medium),
            Err(Error::QrEncode(_))
        ));
    }

    #[test]
    fn test_utf8_picks_smallest_version() {
        let matrix = QrEncoder::new()
            .encode("héllo ✓", ErrorCorrection::Medium)
            .unwrap();
        // 10 bytes fit in version 1-M (14 bytes).
        assert_eq!(matrix.version(), 1);
    }

    #[test]
    fn test_capacity_depends_on_level() {
        let text = "x".repeat(2000);
        assert!(QrEncoder::new().encode(&text, ErrorCorrection::Low).is_ok());
        assert!(QrEncoder::new().encode(&text, ErrorCorrection::High).is_err());
    }
}
