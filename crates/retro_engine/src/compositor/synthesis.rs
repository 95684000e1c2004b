//! Stage B: per pixel color synthesis
//!
//! Base palette color, then ordered dither, horizontal bleed and scanline darkening, in
//! that order. Output is tightly packed RGBA at logical resolution, always opaque.

use crate::{Color, Palette, Settings};

use super::{dither::dither_delta, ConstrainedIndices};

/// Edge magnitude (sum of both neighbors' channel differences) at which bleed saturates.
pub const BLEED_EDGE_SATURATION: f64 = 400.0;

/// Bleed mix at full strength on a saturated edge.
pub const BLEED_MAX_MIX: f64 = 0.35;

/// Brightness lost on odd rows at full scanline strength.
pub const SCANLINE_MAX_DARKEN: f64 = 0.5;

#[derive(Clone, Copy)]
struct Rgb {
    r: f64,
    g: f64,
    b: f64,
}

impl From<Color> for Rgb {
    fn from(c: Color) -> Self {
        Rgb {
            r: c.r as f64,
            g: c.g as f64,
            b: c.b as f64,
        }
    }
}

impl Rgb {
    fn map(self, f: impl Fn(f64) -> f64) -> Rgb {
        Rgb {
            r: f(self.r),
            g: f(self.g),
            b: f(self.b),
        }
    }

    fn edge(self, other: Rgb) -> f64 {
        (self.r - other.r).abs() + (self.g - other.g).abs() + (self.b - other.b).abs()
    }
}

/// Stores a channel the way a clamped byte image does: clamp, then round half to even.
pub fn store_channel(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.clamp(0.0, 255.0).round_ties_even() as u8
}

/// Renders the stage A indices into an RGBA image of `width × height` pixels.
pub fn synthesize(constrained: &ConstrainedIndices, palette: &Palette, settings: &Settings) -> Vec<u8> {
    let width = constrained.width.max(0) as usize;
    let height = constrained.height.max(0) as usize;
    let mut out = vec![0u8; width * height * 4];

    let dither = settings.dither_active();
    let bleed = settings.bleed_active();
    let scanline = settings.scanline_active();
    let darken = 1.0 - settings.scanline_strength * SCANLINE_MAX_DARKEN;

    for y in 0..height {
        let row = constrained.row(y as i32);
        for x in 0..width {
            let mut color = Rgb::from(palette.get_color(row[x]));

            if dither {
                let delta = dither_delta(settings.dither_matrix, settings.dither_strength, x, y);
                color = color.map(|c| (c + delta).clamp(0.0, 255.0));
            }

            if bleed {
                let left = Rgb::from(palette.get_color(row[x.saturating_sub(1)]));
                let right = Rgb::from(palette.get_color(row[(x + 1).min(width - 1)]));
                let edge_weight = ((color.edge(left) + color.edge(right)) / BLEED_EDGE_SATURATION).min(1.0);
                let mix = settings.bleed_strength * edge_weight * BLEED_MAX_MIX;
                color = Rgb {
                    r: color.r * (1.0 - mix) + ((left.r + right.r) * 0.5) * mix,
                    g: color.g * (1.0 - mix) + ((left.g + right.g) * 0.5) * mix,
                    b: color.b * (1.0 - mix) + ((left.b + right.b) * 0.5) * mix,
                };
            }

            if scanline && y % 2 == 1 {
                color = color.map(|c| c * darken);
            }

            let o = (y * width + x) * 4;
            out[o] = store_channel(color.r);
            out[o + 1] = store_channel(color.g);
            out[o + 2] = store_channel(color.b);
            out[o + 3] = 255;
        }
    }

    out
}
