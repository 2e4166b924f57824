use image::GrayImage;

use qrgen::{
    BarcodeController, BarcodeEncoder, ErrorCorrection, GenerateOutcome, QrEncoder, RenderPolicy,
};

fn decode(image: &GrayImage) -> String {
    let mut prepared = rqrr::PreparedImage::prepare(image.clone());
    let grids = prepared.detect_grids();
    assert_eq!(grids.len(), 1, "expected exactly one QR code in artifact");
    let (_meta, content) = grids[0].decode().expect("decode rendered QR");
    content
}

fn displayed_text(controller: &BarcodeController) -> String {
    let artifact = controller.artifact().expect("artifact displayed");
    decode(&artifact.image)
}

#[test]
fn hello_then_clear() {
    let mut controller = BarcodeController::new();
    controller.set_input("HELLO");

    assert_eq!(controller.generate(), GenerateOutcome::Displayed);
    let artifact = controller.artifact().expect("artifact displayed");
    assert_eq!(artifact.dimensions(), (256, 256));
    assert_eq!(artifact.error_correction, ErrorCorrection::Medium);
    assert_eq!(decode(&artifact.image), "HELLO");

    controller.clear();
    assert_eq!(controller.input(), "");
    assert!(controller.artifact().is_none());
}

#[test]
fn assorted_inputs_are_displayed() {
    let inputs = [
        "a",
        "https://example.com/path?query=1",
        "0123456789",
        "line one\nline two",
        "héllo ✓",
        "二维码生成器",
        "Grüße aus Köln",
        "emoji 🦀 crab",
    ];

    let mut controller = BarcodeController::new();
    for input in inputs {
        controller.set_input(input);
        assert_eq!(controller.generate(), GenerateOutcome::Displayed, "input {input:?}");
        assert_eq!(displayed_text(&controller), input);
    }
}

#[test]
fn second_generate_replaces_first() {
    let mut controller = BarcodeController::new();

    controller.set_input("first payload");
    controller.generate();
    let first_revision = controller.revision();

    controller.set_input("second payload");
    controller.generate();

    assert!(controller.revision() > first_revision);
    assert_eq!(controller.artifact().map(|a| a.text.as_str()), Some("second payload"));
    assert_eq!(displayed_text(&controller), "second payload");
}

#[test]
fn empty_generate_keeps_previous_artifact() {
    let mut controller = BarcodeController::new();
    controller.set_input("keep me");
    controller.generate();
    let before = controller.artifact().cloned();

    controller.set_input("");
    assert_eq!(controller.generate(), GenerateOutcome::Ignored);
    assert_eq!(controller.artifact().cloned(), before);
}

#[test]
fn overflow_keeps_previous_artifact() {
    let mut controller = BarcodeController::new();
    controller.set_input("still here");
    controller.generate();
    let revision = controller.revision();

    // Larger than the 2331-byte capacity of version 40 at Medium.
    controller.set_input("x".repeat(3000));
    assert_eq!(controller.generate(), GenerateOutcome::Failed);

    assert_eq!(controller.revision(), revision);
    assert_eq!(displayed_text(&controller), "still here");
}

#[test]
fn overflow_on_empty_display_stays_empty() {
    let mut controller = BarcodeController::new();
    controller.set_input("x".repeat(3000));
    assert_eq!(controller.generate(), GenerateOutcome::Failed);
    assert!(controller.artifact().is_none());
}

#[test]
fn clear_is_idempotent() {
    let mut controller = BarcodeController::new();
    controller.set_input("HELLO");
    controller.generate();

    controller.clear();
    let after_first = (controller.input().to_string(), controller.revision());
    controller.clear();
    let after_second = (controller.input().to_string(), controller.revision());

    assert_eq!(after_first, after_second);
    assert!(controller.artifact().is_none());
}

#[test]
fn capacity_near_limit_still_renders() {
    // Version 40 is 177 modules plus quiet zone, wider than 256 px at 2 px/module.
    let text = "y".repeat(2300);
    let mut controller = BarcodeController::with_encoder(QrEncoder::new(), RenderPolicy::default());
    controller.set_input(text);

    assert_eq!(controller.generate(), GenerateOutcome::Displayed);
    let (w, h) = controller.artifact().unwrap().dimensions();
    assert_eq!(w, h);
    assert_eq!(w, 256);
}

#[test]
fn encoder_render_is_deterministic() {
    let encoder = QrEncoder::new();
    let a = encoder.encode("same", ErrorCorrection::Medium).unwrap();
    let b = encoder.encode("same", ErrorCorrection::Medium).unwrap();
    assert_eq!(encoder.render(&a, 256), encoder.render(&b, 256));
}
