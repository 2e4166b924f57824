//! Barcode display controller
//!
//! Owns the text the user typed and the single image currently on display.
//! The UI layer is a projection of this state: it binds its text field to
//! [`BarcodeController::input_mut`], forwards the two button clicks, and
//! redraws its image whenever [`BarcodeController::revision`] moves.

use crate::config::{MAX_SIZE_PX, MIN_SIZE_PX, RenderOptions};
use crate::qr::{BarcodeEncoder, ErrorCorrection, QrEncoder};
use image::GrayImage;

/// Logical edge length of the displayed code when nothing else is configured
pub const DEFAULT_SIZE_PX: u32 = 256;

/// Fixed rendering policy applied to every generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderPolicy {
    /// Error-correction level passed to the encoder
    pub error_correction: ErrorCorrection,
    /// Edge length of the square output image, in pixels
    pub size_px: u32,
}

impl Default for RenderPolicy {
    fn default() -> Self {
        Self {
            error_correction: ErrorCorrection::Medium,
            size_px: DEFAULT_SIZE_PX,
        }
    }
}

impl From<&RenderOptions> for RenderPolicy {
    fn from(options: &RenderOptions) -> Self {
        Self {
            error_correction: options.error_correction,
            size_px: options.size,
        }
    }
}

/// The one rendered code held by the display container
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayedArtifact {
    /// Text the code encodes
    pub text: String,
    /// Rendered square greyscale image
    pub image: GrayImage,
    /// Level the code was encoded at
    pub error_correction: ErrorCorrection,
}

impl DisplayedArtifact {
    /// Pixel dimensions of the rendered image
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }
}

/// What a call to [`BarcodeController::generate`] did.
///
/// Informational only; none of these reach the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateOutcome {
    /// Input was empty, nothing happened
    Ignored,
    /// The encoder rejected the input; the failure was logged
    Failed,
    /// A new artifact replaced whatever was displayed
    Displayed,
}

/// Mediates between raw user text and the displayed image
pub struct BarcodeController<E = QrEncoder> {
    encoder: E,
    policy: RenderPolicy,
    input: String,
    artifact: Option<DisplayedArtifact>,
    revision: u64,
}

impl BarcodeController<QrEncoder> {
    /// Controller using the `qrcode` encoder and the default policy
    pub fn new() -> Self {
        Self::with_encoder(QrEncoder::new(), RenderPolicy::default())
    }
}

impl Default for BarcodeController<QrEncoder> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: BarcodeEncoder> BarcodeController<E> {
    /// Controller with a custom encoder and policy. Starts with an empty display.
    ///
    /// `policy.size_px` is clamped to `MIN_SIZE_PX..=MAX_SIZE_PX`.
    pub fn with_encoder(encoder: E, mut policy: RenderPolicy) -> Self {
        policy.size_px = policy.size_px.clamp(MIN_SIZE_PX, MAX_SIZE_PX);
        Self {
            encoder,
            policy,
            input: String::new(),
            artifact: None,
            revision: 0,
        }
    }

    /// Rendering policy in effect
    pub fn policy(&self) -> RenderPolicy {
        self.policy
    }

    /// Current input text
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Mutable access for the UI text field binding
    pub fn input_mut(&mut self) -> &mut String {
        &mut self.input
    }

    /// Replace the input text
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// The artifact on display, if any
    pub fn artifact(&self) -> Option<&DisplayedArtifact> {
        self.artifact.as_ref()
    }

    /// Counter bumped every time the displayed artifact changes
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Encode the current input and display it.
    ///
    /// Empty input is ignored. Encoder failures are logged and leave the
    /// display as it was.
    pub fn generate(&mut self) -> GenerateOutcome {
        if self.input.is_empty() {
            tracing::trace!("Generate requested with empty input; ignoring");
            return GenerateOutcome::Ignored;
        }

        let matrix = match self.encoder.encode(&self.input, self.policy.error_correction) {
            Ok(matrix) => matrix,
            Err(err) => {
                tracing::warn!(
                    length = self.input.len(),
                    level = %self.policy.error_correction,
                    "QR generation failed: {err}"
                );
                return GenerateOutcome::Failed;
            }
        };

        let image = self.encoder.render(&matrix, self.policy.size_px);
        self.artifact = Some(DisplayedArtifact {
            text: self.input.clone(),
            image,
            error_correction: matrix.level(),
        });
        self.bump();

        tracing::debug!(
            revision = self.revision,
            version = matrix.version(),
            "Displaying new QR code"
        );
        GenerateOutcome::Displayed
    }

    /// Reset the input to empty and remove the displayed artifact.
    pub fn clear(&mut self) {
        self.input.clear();
        if self.artifact.take().is_some() {
            self.bump();
            tracing::debug!(revision = self.revision, "Cleared display");
        }
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
