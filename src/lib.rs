//! qrgen - a minimal desktop QR code generator
//!
//! Type some text, press "Generate Barcode", and the text is shown as a QR
//! code; press the clear button to start over. Encoding is delegated to the
//! `qrcode` crate and the window to `eframe`; this crate wires the two
//! together through a small display controller.
//!
//! # Example
//!
//! ```
//! use qrgen::{BarcodeController, GenerateOutcome};
//!
//! let mut controller = BarcodeController::new();
//! controller.set_input("HELLO");
//! assert_eq!(controller.generate(), GenerateOutcome::Displayed);
//! assert_eq!(controller.artifact().unwrap().dimensions(), (256, 256));
//!
//! controller.clear();
//! assert!(controller.artifact().is_none());
//! ```

#![warn(missing_docs, rust_2024_compatibility)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod config;
pub mod controller;
pub mod error;
pub mod logging;
pub mod qr;

#[cfg(feature = "gui")]
#[cfg_attr(docsrs, doc(cfg(feature = "gui")))]
pub mod app;

// Re-exports for convenience
pub use error::{Error, Result};

pub use config::{LogRotation, LoggingOptions, QrgenConfig, RenderOptions, WindowOptions};
pub use controller::{BarcodeController, DisplayedArtifact, GenerateOutcome, RenderPolicy};
pub use qr::{BarcodeEncoder, ErrorCorrection, QrEncoder, QrMatrix};
