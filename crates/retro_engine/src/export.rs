//! Image export.
//!
//! - `Raw`: one output pixel per logical pixel, plain palette color, no post processing.
//! - `Styled`: the full compositor output at display scale.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Document, EngineError, JitterSource, Palette, PixelBuffer, Result, RetroCompositor};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportMode {
    Raw,
    #[default]
    Styled,
}

impl ExportMode {
    pub fn name(&self) -> &'static str {
        match self {
            ExportMode::Raw => "raw",
            ExportMode::Styled => "styled",
        }
    }
}

/// Unprocessed palette colors, RGBA, logical resolution.
pub fn render_raw(pixels: &PixelBuffer, palette: &Palette) -> Vec<u8> {
    let mut out = Vec::with_capacity(pixels.as_slice().len() * 4);
    for &index in pixels.as_slice() {
        let color = palette.get_color(index);
        out.extend_from_slice(&[color.r, color.g, color.b, 255]);
    }
    out
}

pub fn export_image<R: JitterSource>(document: &Document, mode: ExportMode, compositor: &mut RetroCompositor<R>) -> Result<image::RgbaImage> {
    match mode {
        ExportMode::Raw => {
            let data = render_raw(&document.pixels, &document.palette);
            image::RgbaImage::from_raw(document.pixels.width() as u32, document.pixels.height() as u32, data).ok_or(EngineError::ImageBufferCreationFailed)
        }
        ExportMode::Styled => compositor.compose_document(document).to_image(),
    }
}

pub fn save_png(img: &image::RgbaImage, path: &Path) -> Result<()> {
    img.save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| EngineError::ImageSaveFailed { message: e.to_string() })
}
