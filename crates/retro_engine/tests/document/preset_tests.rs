use pretty_assertions::assert_eq;
use retro_engine::{CanvasAspect, Color, DitherMatrix, Document, EngineError, Preset, Size, DEFAULT_PRESET};

#[test]
fn test_catalog() {
    let ids: Vec<&str> = Preset::all().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec!["neon", "rune", "et"]);
    for preset in Preset::all() {
        assert_eq!(preset.palette().unwrap().len(), 16, "{}", preset.id);
        assert_eq!(preset.palette().unwrap().get_color(0), Color::BLACK);
    }
}

#[test]
fn test_preset_settings() {
    let neon = Preset::find("neon").unwrap().settings();
    assert_eq!((neon.scale_x, neon.scale_y), (6, 4));
    assert_eq!(neon.dither_matrix, DitherMatrix::Bayer8);
    assert_eq!(neon.per_scanline_color_limit, 4);

    let rune = Preset::find("rune").unwrap().settings();
    assert_eq!(rune.dither_matrix, DitherMatrix::Bayer4);
    assert_eq!(rune.jitter_strength, 0.06);
    assert_eq!(rune.per_scanline_color_limit, 5);

    let et = Preset::find("et").unwrap().settings();
    assert_eq!(et.dither_strength, 0.75);
    assert_eq!(et.bleed_strength, 0.4);
}

#[test]
fn test_unknown_preset() {
    assert!(matches!(Preset::find("vhs"), Err(EngineError::UnknownPreset { id }) if id == "vhs"));
    assert!(Document::from_preset("vhs", 10, 10).is_err());
}

#[test]
fn test_default_document() {
    let document = Document::default();
    assert_eq!(document.preset_id.as_deref(), Some(DEFAULT_PRESET));
    assert_eq!(document.pixels.size(), Size::new(160, 120));
    assert!(document.pixels.as_slice().iter().all(|&i| i == 0));
    assert_eq!(document.settings, Preset::find("neon").unwrap().settings());
}

#[test]
fn test_canvas_aspects() {
    assert_eq!(CanvasAspect::Wide.logical_size(), Size::new(160, 90));
    assert_eq!(CanvasAspect::Standard.logical_size(), Size::new(160, 120));
    assert_eq!(CanvasAspect::Square.logical_size(), Size::new(120, 120));
    for aspect in CanvasAspect::ALL {
        assert_eq!(CanvasAspect::from_tag(aspect.tag()), Some(aspect));
    }
    assert_eq!(CanvasAspect::from_tag("21:9"), None);
}
