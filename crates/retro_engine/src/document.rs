//! Save file layout
//!
//! ```json
//! { "W": 160, "H": 120, "palette": ["#000000", ...], "settings": { ... },
//!   "pixels": "<base64>", "presetId": "neon", "canvasAspect": "4:3" }
//! ```
//!
//! Loading is all-or-nothing: [`Document::from_json`] either returns a fully validated
//! document or an error, it never produces a partially filled one.

use base64::{engine::general_purpose, Engine};
use serde::{Deserialize, Serialize};

use crate::{EngineError, Palette, PixelBuffer, Preset, Result, Settings, Size, DEFAULT_HEIGHT, DEFAULT_PRESET, DEFAULT_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CanvasAspect {
    #[serde(rename = "16:9")]
    Wide,
    #[serde(rename = "4:3")]
    Standard,
    #[serde(rename = "1:1")]
    Square,
}

impl CanvasAspect {
    pub const ALL: [CanvasAspect; 3] = [CanvasAspect::Wide, CanvasAspect::Standard, CanvasAspect::Square];

    /// Logical canvas size for this aspect.
    pub fn logical_size(self) -> Size {
        match self {
            CanvasAspect::Wide => Size::new(160, 90),
            CanvasAspect::Standard => Size::new(160, 120),
            CanvasAspect::Square => Size::new(120, 120),
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            CanvasAspect::Wide => "16:9",
            CanvasAspect::Standard => "4:3",
            CanvasAspect::Square => "1:1",
        }
    }

    pub fn from_tag(tag: &str) -> Option<CanvasAspect> {
        Self::ALL.into_iter().find(|aspect| aspect.tag() == tag)
    }

    /// The aspect whose logical size is exactly `size`, if any.
    pub fn from_size(size: Size) -> Option<CanvasAspect> {
        Self::ALL.into_iter().find(|aspect| aspect.logical_size() == size)
    }
}

/// A complete editable document.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub pixels: PixelBuffer,
    pub palette: Palette,
    pub settings: Settings,
    pub preset_id: Option<String>,
    pub canvas_aspect: Option<CanvasAspect>,
}

/// Wire representation. Every field is optional so missing ones can be reported by name.
#[derive(Serialize, Deserialize)]
struct DocumentFile {
    #[serde(rename = "W", default)]
    width: Option<i64>,
    #[serde(rename = "H", default)]
    height: Option<i64>,
    #[serde(default)]
    palette: Option<Vec<String>>,
    #[serde(default)]
    settings: Option<Settings>,
    #[serde(default)]
    pixels: Option<String>,
    #[serde(rename = "presetId", default, skip_serializing_if = "Option::is_none")]
    preset_id: Option<String>,
    #[serde(rename = "canvasAspect", default, skip_serializing_if = "Option::is_none")]
    canvas_aspect: Option<CanvasAspect>,
}

impl Document {
    /// A blank canvas of the given size using the palette and settings of preset `id`.
    ///
    /// # Errors
    ///
    /// Fails with [`EngineError::UnknownPreset`] if `id` is not in the catalog.
    pub fn from_preset(id: &str, width: i32, height: i32) -> Result<Self> {
        let preset = Preset::find(id)?;
        Ok(Self {
            pixels: PixelBuffer::new(width, height),
            palette: preset.palette()?,
            settings: preset.settings(),
            preset_id: Some(preset.id.to_string()),
            canvas_aspect: None,
        })
    }

    pub fn to_json(&self) -> Result<String> {
        let file = DocumentFile {
            width: Some(self.pixels.width() as i64),
            height: Some(self.pixels.height() as i64),
            palette: Some(self.palette.to_hex_list()),
            settings: Some(self.settings.clone()),
            pixels: Some(general_purpose::STANDARD.encode(self.pixels.as_slice())),
            preset_id: self.preset_id.clone(),
            canvas_aspect: self.canvas_aspect,
        };
        Ok(serde_json::to_string(&file)?)
    }

    /// # Errors
    ///
    /// Fails if a required field (`W`, `H`, `palette`, `settings`, `pixels`) is absent,
    /// zero or malformed, if the pixel payload does not hold `W × H` bytes, or if a pixel
    /// references an index outside the palette.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: DocumentFile = serde_json::from_str(json)?;

        let width = file.width.filter(|w| *w != 0).ok_or(EngineError::MissingField { field: "W" })?;
        let height = file.height.filter(|h| *h != 0).ok_or(EngineError::MissingField { field: "H" })?;
        let palette = file.palette.ok_or(EngineError::MissingField { field: "palette" })?;
        let mut settings = file.settings.ok_or(EngineError::MissingField { field: "settings" })?;
        let pixels = file.pixels.filter(|p| !p.is_empty()).ok_or(EngineError::MissingField { field: "pixels" })?;

        if width < 0 || height < 0 || width > i32::MAX as i64 || height > i32::MAX as i64 {
            return Err(EngineError::InvalidDimensions { width, height });
        }

        let palette = Palette::from_hex_list(&palette)?;
        let data = general_purpose::STANDARD.decode(pixels.trim())?;
        let pixels = PixelBuffer::from_raw(width as i32, height as i32, data)?;
        if let Some(index) = pixels.first_index_outside(palette.len()) {
            return Err(EngineError::PaletteIndexOutOfRange { index, len: palette.len() });
        }
        settings.sanitize();

        Ok(Self {
            pixels,
            palette,
            settings,
            preset_id: file.preset_id,
            canvas_aspect: file.canvas_aspect,
        })
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::from_preset(DEFAULT_PRESET, DEFAULT_WIDTH, DEFAULT_HEIGHT).expect("built-in preset is valid")
    }
}
