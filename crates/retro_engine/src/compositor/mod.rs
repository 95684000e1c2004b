//! Retro compositor
//!
//! Turns an indexed [`PixelBuffer`] into a displayable RGBA surface that imitates analog
//! video output. One pass runs three stages:
//!
//! - **A** [`constrain_scanlines`]: caps distinct palette indices per row, remapping or
//!   reporting overflow.
//! - **B** [`synthesize`]: palette lookup, ordered dither, horizontal bleed, scanlines.
//! - **C** [`build_jitter_map`] + [`present`]: per row jitter and nearest neighbor scale up.
//!
//! All stages are pure functions of their inputs. The only state a compositor carries from
//! frame to frame is its random source, which only feeds the jitter map.

mod dither;
mod jitter;
mod present;
mod scanline_limit;
mod synthesis;

pub use dither::{dither_delta, threshold, BAYER_4, BAYER_8, DITHER_AMPLITUDE};
pub use jitter::{band_shift, build_jitter_map, JitterSource, JITTER_ROW_CHANCE};
pub use present::present;
pub use scanline_limit::{constrain_scanlines, ConstrainedIndices, ScanlineWarnings, WARNING_PREVIEW_ROWS};
pub use synthesis::{store_channel, synthesize, BLEED_EDGE_SATURATION, BLEED_MAX_MIX, SCANLINE_MAX_DARKEN};

use crate::{Document, EngineError, Palette, PixelBuffer, Result, Settings, Size};

/// One composited display frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Display surface size (`width × scale_x`, `height × scale_y`).
    pub size: Size,
    /// Tightly packed RGBA.
    pub pixels: Vec<u8>,
    /// Per row jitter offsets used for this frame.
    pub jitter: Vec<i8>,
    pub warnings: ScanlineWarnings,
}

impl Frame {
    pub fn pixel(&self, x: i32, y: i32) -> Option<[u8; 4]> {
        if x < 0 || y < 0 || x >= self.size.width || y >= self.size.height {
            return None;
        }
        let o = (y as usize * self.size.width as usize + x as usize) * 4;
        Some([self.pixels[o], self.pixels[o + 1], self.pixels[o + 2], self.pixels[o + 3]])
    }

    pub fn to_image(&self) -> Result<image::RgbaImage> {
        image::RgbaImage::from_raw(self.size.width as u32, self.size.height as u32, self.pixels.clone()).ok_or(EngineError::ImageBufferCreationFailed)
    }
}

pub struct RetroCompositor<R: JitterSource = fastrand::Rng> {
    source: R,
}

impl Default for RetroCompositor {
    fn default() -> Self {
        Self::new()
    }
}

impl RetroCompositor {
    /// Compositor with an unseeded random source.
    pub fn new() -> Self {
        Self { source: fastrand::Rng::new() }
    }

    /// Compositor whose jitter sequence is reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            source: fastrand::Rng::with_seed(seed),
        }
    }
}

impl<R: JitterSource> RetroCompositor<R> {
    pub fn with_source(source: R) -> Self {
        Self { source }
    }

    /// Runs stages A, B and C once.
    pub fn compose(&mut self, pixels: &PixelBuffer, palette: &Palette, settings: &Settings) -> Frame {
        let constrained = constrain_scanlines(pixels, palette, settings);
        let image = synthesize(&constrained, palette, settings);
        let jitter = build_jitter_map(pixels.height(), settings, &mut self.source);
        let (size, pixels) = present(&image, Size::new(constrained.width, constrained.height), &jitter, settings);
        Frame {
            size,
            pixels,
            jitter,
            warnings: constrained.warnings,
        }
    }

    pub fn compose_document(&mut self, document: &Document) -> Frame {
        self.compose(&document.pixels, &document.palette, &document.settings)
    }
}
