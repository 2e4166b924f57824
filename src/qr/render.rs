//! Rasterise a QR matrix into a fixed-size square image

use crate::qr::QrMatrix;
use image::{GrayImage, Luma, imageops};

// Light border the renderer keeps around normal QR symbols, in modules.
const QUIET_ZONE_MODULES: u32 = 4;

const LIGHT: Luma<u8> = Luma([255]);

/// Render `matrix` black-on-white into a `size_px` × `size_px` image.
///
/// Modules get the largest whole-pixel size that fits, and the symbol is
/// centred on a white canvas. When the symbol plus quiet zone cannot fit at
/// one pixel per module, the canvas grows to the symbol's width instead.
pub fn render(matrix: &QrMatrix, size_px: u32) -> GrayImage {
    let symbol = matrix
        .code()
        .render::<Luma<u8>>()
        .quiet_zone(true)
        .max_dimensions(size_px, size_px)
        .build();

    let modules = matrix.width() as u32 + 2 * QUIET_ZONE_MODULES;
    let side = size_px.max(symbol.width()).max(symbol.height());
    if symbol.width() == side && symbol.height() == side {
        return symbol;
    }

    let mut canvas = GrayImage::from_pixel(side, side, LIGHT);
    let x = (side - symbol.width()) / 2;
    let y = (side - symbol.height()) / 2;
    imageops::overlay(&mut canvas, &symbol, i64::from(x), i64::from(y));

    tracing::trace!(
        modules,
        module_px = symbol.width() / modules,
        side,
        padding = x,
        "Rendered QR symbol onto canvas"
    );

    canvas
}
