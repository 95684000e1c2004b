use serde::{Deserialize, Deserializer, Serialize};

use crate::EngineError;

/// Valid range of distinct palette indices per scanline.
pub const MIN_SCANLINE_COLORS: u8 = 2;
pub const MAX_SCANLINE_COLORS: u8 = 6;

/// Ordered dither threshold matrix size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum DitherMatrix {
    Bayer4,
    #[default]
    Bayer8,
}

impl DitherMatrix {
    pub fn size(self) -> usize {
        match self {
            DitherMatrix::Bayer4 => 4,
            DitherMatrix::Bayer8 => 8,
        }
    }
}

impl TryFrom<u32> for DitherMatrix {
    type Error = EngineError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            4 => Ok(DitherMatrix::Bayer4),
            8 => Ok(DitherMatrix::Bayer8),
            size => Err(EngineError::UnsupportedDitherMatrix { size }),
        }
    }
}

impl From<DitherMatrix> for u32 {
    fn from(value: DitherMatrix) -> Self {
        value.size() as u32
    }
}

/// Per-document render configuration.
///
/// Field names follow the save format. All writes from outside the crate should go through
/// the setters (or [`Settings::sanitize`]) so the documented ranges hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    #[serde(deserialize_with = "deserialize_scale")]
    pub scale_x: u32,
    #[serde(deserialize_with = "deserialize_scale")]
    pub scale_y: u32,
    pub dither_matrix: DitherMatrix,
    pub dither_enabled: bool,
    pub dither_strength: f64,
    pub bleed_enabled: bool,
    pub bleed_strength: f64,
    pub scanline_enabled: bool,
    pub scanline_strength: f64,
    pub jitter_enabled: bool,
    pub jitter_strength: f64,
    #[serde(deserialize_with = "deserialize_color_limit")]
    pub per_scanline_color_limit: u8,
    pub auto_clamp_colors: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scale_x: 6,
            scale_y: 4,
            dither_matrix: DitherMatrix::Bayer8,
            dither_enabled: true,
            dither_strength: 0.65,
            bleed_enabled: true,
            bleed_strength: 0.35,
            scanline_enabled: true,
            scanline_strength: 0.22,
            jitter_enabled: true,
            jitter_strength: 0.1,
            per_scanline_color_limit: 4,
            auto_clamp_colors: true,
        }
    }
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Rounds any number into `[min, max]`.
fn rounded_in(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        min
    } else {
        value.round().clamp(min, max)
    }
}

// Saved integers may be negative, oversized or written as floats; they are clamped, not rejected.
fn deserialize_scale<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let value = f64::deserialize(deserializer)?;
    Ok(rounded_in(value, 1.0, u32::MAX as f64) as u32)
}

fn deserialize_color_limit<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    let value = f64::deserialize(deserializer)?;
    Ok(rounded_in(value, MIN_SCANLINE_COLORS as f64, MAX_SCANLINE_COLORS as f64) as u8)
}

impl Settings {
    /// Every setting in a known state, all effects off.
    pub fn neutral() -> Self {
        Self {
            dither_enabled: false,
            bleed_enabled: false,
            scanline_enabled: false,
            jitter_enabled: false,
            auto_clamp_colors: false,
            per_scanline_color_limit: MAX_SCANLINE_COLORS,
            ..Default::default()
        }
    }

    /// Forces every field into its valid range.
    pub fn sanitize(&mut self) {
        self.scale_x = self.scale_x.max(1);
        self.scale_y = self.scale_y.max(1);
        self.dither_strength = clamp_unit(self.dither_strength);
        self.bleed_strength = clamp_unit(self.bleed_strength);
        self.scanline_strength = clamp_unit(self.scanline_strength);
        self.jitter_strength = clamp_unit(self.jitter_strength);
        self.per_scanline_color_limit = self.per_scanline_color_limit.clamp(MIN_SCANLINE_COLORS, MAX_SCANLINE_COLORS);
    }

    pub fn set_scale(&mut self, scale_x: u32, scale_y: u32) {
        self.scale_x = scale_x.max(1);
        self.scale_y = scale_y.max(1);
    }

    pub fn set_dither_strength(&mut self, strength: f64) {
        self.dither_strength = clamp_unit(strength);
    }

    pub fn set_bleed_strength(&mut self, strength: f64) {
        self.bleed_strength = clamp_unit(strength);
    }

    pub fn set_scanline_strength(&mut self, strength: f64) {
        self.scanline_strength = clamp_unit(strength);
    }

    pub fn set_jitter_strength(&mut self, strength: f64) {
        self.jitter_strength = clamp_unit(strength);
    }

    /// Accepts any integer; the stored value is clamped to [2, 6].
    pub fn set_per_scanline_color_limit(&mut self, limit: i64) {
        self.per_scanline_color_limit = limit.clamp(MIN_SCANLINE_COLORS as i64, MAX_SCANLINE_COLORS as i64) as u8;
    }

    pub fn dither_active(&self) -> bool {
        self.dither_enabled && self.dither_strength > 0.0
    }

    pub fn bleed_active(&self) -> bool {
        self.bleed_enabled && self.bleed_strength > 0.0
    }

    pub fn scanline_active(&self) -> bool {
        self.scanline_enabled && self.scanline_strength > 0.0
    }

    pub fn jitter_active(&self) -> bool {
        self.jitter_enabled && self.jitter_strength > 0.0
    }
}
