//! egui front-end
//!
//! A thin projection of [`BarcodeController`]: the text field edits the
//! controller's input, the two buttons call `generate` and `clear`, and the
//! display container re-uploads its texture only when the controller's
//! revision changes.

use crate::config::{QrgenConfig, WindowOptions};
use crate::controller::{BarcodeController, RenderPolicy};
use crate::error::Result;
use crate::qr::QrEncoder;
use eframe::egui;
use image::GrayImage;

static ICON_PNG: &[u8] = include_bytes!("../assets/qrgen.png");

const SPACER_HEIGHT: f32 = 20.0;

/// Open the main window and block until the user closes it.
pub fn run(config: &QrgenConfig) -> Result<()> {
    let options = native_options(&config.window);
    let policy = RenderPolicy::from(&config.render);

    tracing::info!(
        level = %policy.error_correction,
        size = policy.size_px,
        "Opening generator window"
    );

    eframe::run_native(
        &config.window.title,
        options,
        Box::new(move |_cc| {
            let controller = BarcodeController::with_encoder(QrEncoder::new(), policy);
            Ok(Box::new(QrgenApp::new(controller)))
        }),
    )?;

    tracing::info!("Window closed");
    Ok(())
}

fn native_options(window: &WindowOptions) -> eframe::NativeOptions {
    let mut viewport =
        egui::ViewportBuilder::default().with_inner_size([window.width, window.height]);
    if let Some(icon) = load_icon() {
        viewport = viewport.with_icon(icon);
    }

    eframe::NativeOptions {
        viewport,
        ..Default::default()
    }
}

fn load_icon() -> Option<egui::IconData> {
    match decode_icon(ICON_PNG) {
        Ok(icon) => Some(icon),
        Err(err) => {
            tracing::warn!("Failed to load application icon: {err}");
            None
        }
    }
}

fn decode_icon(bytes: &[u8]) -> Result<egui::IconData> {
    let rgba = image::load_from_memory(bytes)?.into_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(egui::IconData {
        rgba: rgba.into_raw(),
        width,
        height,
    })
}

/// Scale `content` uniformly so it fits inside `bounds` without cropping.
pub fn contain(content: egui::Vec2, bounds: egui::Vec2) -> egui::Vec2 {
    if content.x <= 0.0 || content.y <= 0.0 {
        return egui::Vec2::ZERO;
    }
    let scale = (bounds.x / content.x).min(bounds.y / content.y);
    content * scale
}

fn color_image(image: &GrayImage) -> egui::ColorImage {
    let (width, height) = image.dimensions();
    egui::ColorImage::from_gray([width as usize, height as usize], image.as_raw())
}

/// Main window state
pub struct QrgenApp {
    controller: BarcodeController,
    texture: Option<egui::TextureHandle>,
    drawn_revision: Option<u64>,
}

impl QrgenApp {
    /// Wrap a controller; the display starts empty.
    pub fn new(controller: BarcodeController) -> Self {
        Self {
            controller,
            texture: None,
            drawn_revision: None,
        }
    }

    fn sync_texture(&mut self, ctx: &egui::Context) {
        let revision = self.controller.revision();
        if self.drawn_revision == Some(revision) {
            return;
        }

        self.texture = self.controller.artifact().map(|artifact| {
            ctx.load_texture("qr-code", color_image(&artifact.image), egui::TextureOptions::NEAREST)
        });
        self.drawn_revision = Some(revision);
    }

    fn input_row(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("🗙").on_hover_text("Clear").clicked() {
                    self.controller.clear();
                }
                ui.add(
                    egui::TextEdit::singleline(self.controller.input_mut())
                        .hint_text("Enter text input")
                        .desired_width(f32::INFINITY),
                );
            });
        });
    }

    fn display(&self, ui: &mut egui::Ui) {
        let Some(texture) = &self.texture else {
            return;
        };

        let side = self.controller.policy().size_px as f32;
        let size = contain(texture.size_vec2(), egui::vec2(side, side));
        ui.vertical_centered(|ui| {
            ui.image(egui::load::SizedTexture::new(texture.id(), size));
        });
    }
}

impl eframe::App for QrgenApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.input_row(ui);

            let generate = egui::Button::new("Generate Barcode")
                .min_size(egui::vec2(ui.available_width(), 0.0));
            if ui.add(generate).clicked() {
                self.controller.generate();
            }

            ui.add_space(SPACER_HEIGHT);

            self.sync_texture(ctx);
            self.display(ui);
        });
    }
}
