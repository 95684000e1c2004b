use base64::{engine::general_purpose, Engine};
use pretty_assertions::assert_eq;
use retro_engine::{CanvasAspect, DitherMatrix, Document, EngineError};
use serde_json::{json, Value};

fn sample_document() -> Document {
    let mut document = Document::from_preset("rune", 8, 4).unwrap();
    document.canvas_aspect = Some(CanvasAspect::Square);
    for i in 0..32 {
        document.pixels.set((i % 8, i / 8), (i % 16) as u8);
    }
    document
}

fn sample_json() -> Value {
    serde_json::from_str(&sample_document().to_json().unwrap()).unwrap()
}

fn load(value: &Value) -> retro_engine::Result<Document> {
    Document::from_json(&value.to_string())
}

#[test]
fn test_round_trip_is_identical() {
    let document = sample_document();
    let loaded = Document::from_json(&document.to_json().unwrap()).unwrap();
    assert_eq!(loaded, document);
}

#[test]
fn test_wire_layout() {
    let value = sample_json();
    assert_eq!(value["W"], json!(8));
    assert_eq!(value["H"], json!(4));
    assert_eq!(value["presetId"], json!("rune"));
    assert_eq!(value["canvasAspect"], json!("1:1"));
    assert_eq!(value["palette"][3], json!("#003bff"));
    assert_eq!(value["settings"]["ditherMatrix"], json!(4));
    assert_eq!(value["settings"]["perScanlineColorLimit"], json!(5));
    assert_eq!(value["settings"]["autoClampColors"], json!(true));

    let pixels = general_purpose::STANDARD.decode(value["pixels"].as_str().unwrap()).unwrap();
    assert_eq!(pixels.len(), 32);
    assert_eq!(pixels[9], 9);
}

#[test]
fn test_optional_fields_may_be_absent() {
    let mut value = sample_json();
    value.as_object_mut().unwrap().remove("presetId");
    value.as_object_mut().unwrap().remove("canvasAspect");

    let document = load(&value).unwrap();
    assert_eq!(document.preset_id, None);
    assert_eq!(document.canvas_aspect, None);
}

#[test]
fn test_missing_required_fields() {
    for field in ["W", "H", "palette", "settings", "pixels"] {
        let mut value = sample_json();
        value.as_object_mut().unwrap().remove(field);
        match load(&value) {
            Err(EngineError::MissingField { field: missing }) => assert_eq!(missing, field),
            other => panic!("{field}: expected missing field error, got {other:?}"),
        }
    }
}

#[test]
fn test_zero_or_empty_counts_as_missing() {
    let mut value = sample_json();
    value["W"] = json!(0);
    assert!(matches!(load(&value), Err(EngineError::MissingField { field: "W" })));

    let mut value = sample_json();
    value["pixels"] = json!("");
    assert!(matches!(load(&value), Err(EngineError::MissingField { field: "pixels" })));
}

#[test]
fn test_negative_dimensions_rejected() {
    let mut value = sample_json();
    value["H"] = json!(-4);
    assert!(matches!(load(&value), Err(EngineError::InvalidDimensions { .. })));
}

#[test]
fn test_pixel_length_must_match() {
    let mut value = sample_json();
    value["W"] = json!(9);
    assert!(matches!(load(&value), Err(EngineError::PixelLengthMismatch { expected: 36, actual: 32 })));
}

#[test]
fn test_index_outside_palette_rejected() {
    let mut value = sample_json();
    let mut pixels = vec![0u8; 32];
    pixels[5] = 16;
    value["pixels"] = json!(general_purpose::STANDARD.encode(&pixels));
    assert!(matches!(load(&value), Err(EngineError::PaletteIndexOutOfRange { index: 16, len: 16 })));
}

#[test]
fn test_malformed_payloads() {
    let mut value = sample_json();
    value["pixels"] = json!("***not base64***");
    assert!(matches!(load(&value), Err(EngineError::Base64(_))));

    let mut value = sample_json();
    value["palette"] = json!(["#000000", "nope"]);
    assert!(matches!(load(&value), Err(EngineError::InvalidHexColor { .. })));

    let mut value = sample_json();
    value["palette"] = json!([]);
    assert!(matches!(load(&value), Err(EngineError::EmptyPalette)));

    let mut value = sample_json();
    value["settings"]["ditherMatrix"] = json!(5);
    assert!(matches!(load(&value), Err(EngineError::Json(_))));

    assert!(matches!(Document::from_json("{ not json"), Err(EngineError::Json(_))));
}

#[test]
fn test_settings_are_sanitized_on_load() {
    let mut value = sample_json();
    value["settings"]["perScanlineColorLimit"] = json!(9);
    value["settings"]["bleedStrength"] = json!(3.5);
    value["settings"]["scaleX"] = json!(0);

    let document = load(&value).unwrap();
    assert_eq!(document.settings.per_scanline_color_limit, 6);
    assert_eq!(document.settings.bleed_strength, 1.0);
    assert_eq!(document.settings.scale_x, 1);
    assert_eq!(document.settings.dither_matrix, DitherMatrix::Bayer4);
}

#[test]
fn test_partial_settings_fill_from_defaults() {
    let mut value = sample_json();
    value["settings"] = json!({ "ditherMatrix": 4, "jitterEnabled": false });

    let document = load(&value).unwrap();
    assert_eq!(document.settings.dither_matrix, DitherMatrix::Bayer4);
    assert!(!document.settings.jitter_enabled);
    assert_eq!(document.settings.scale_x, 6);
}

#[test]
fn test_color_limit_outside_range_still_loads() {
    for (raw, expected) in [(json!(-1), 2), (json!(300), 6), (json!(4.0), 4)] {
        let mut value = sample_json();
        value["settings"]["perScanlineColorLimit"] = raw.clone();
        let document = load(&value).unwrap_or_else(|err| panic!("{raw}: {err}"));
        assert_eq!(document.settings.per_scanline_color_limit, expected);
    }
}
