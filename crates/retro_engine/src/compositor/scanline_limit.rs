//! Stage A: per-scanline color budget
//!
//! Each row may use at most `per_scanline_color_limit` distinct palette indices. The first
//! indices seen left to right claim the slots; later pixels with an unseen index overflow.
//! Distinctness is by index, two indices with the same RGB still take two slots.

use crate::{Palette, PixelBuffer, Settings};

/// Rows shown in [`ScanlineWarnings::message`].
pub const WARNING_PREVIEW_ROWS: usize = 5;

/// Rows that exceeded the color budget while auto clamping was off.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanlineWarnings {
    rows: Vec<i32>,
}

impl ScanlineWarnings {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[i32] {
        &self.rows
    }

    pub fn preview(&self) -> &[i32] {
        &self.rows[..self.rows.len().min(WARNING_PREVIEW_ROWS)]
    }

    /// User facing summary, empty when there is nothing to report.
    pub fn message(&self) -> String {
        if self.rows.is_empty() {
            return String::new();
        }
        let preview = self.preview().iter().map(ToString::to_string).collect::<Vec<_>>().join(", ");
        format!("Color limit exceeded on {} lines (e.g. y={preview})", self.rows.len())
    }
}

/// Result of stage A: a working copy of the indices plus the warning side channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstrainedIndices {
    pub width: i32,
    pub height: i32,
    pub indices: Vec<u8>,
    pub warnings: ScanlineWarnings,
}

impl ConstrainedIndices {
    pub fn row(&self, y: i32) -> &[u8] {
        let start = y as usize * self.width as usize;
        &self.indices[start..start + self.width as usize]
    }
}

/// Applies the per-row color budget. `pixels` is never modified.
pub fn constrain_scanlines(pixels: &PixelBuffer, palette: &Palette, settings: &Settings) -> ConstrainedIndices {
    let width = pixels.width() as usize;
    let limit = settings.per_scanline_color_limit as usize;
    let mut indices = pixels.as_slice().to_vec();
    let mut warnings = ScanlineWarnings::default();

    let mut used: Vec<u8> = Vec::with_capacity(limit);
    let mut seen = [false; 256];
    let mut overflow: Vec<usize> = Vec::new();

    for (y, row) in indices.chunks_mut(width).enumerate() {
        used.clear();
        overflow.clear();
        seen.fill(false);

        for (x, &index) in row.iter().enumerate() {
            if seen[index as usize] {
                continue;
            }
            if used.len() < limit {
                seen[index as usize] = true;
                used.push(index);
            } else {
                overflow.push(x);
            }
        }

        if overflow.is_empty() {
            continue;
        }

        if settings.auto_clamp_colors {
            for &x in &overflow {
                let original = palette.get_color(row[x]);
                if let Some(best) = palette.nearest_of(original, &used) {
                    row[x] = best;
                }
            }
        } else {
            warnings.rows.push(y as i32);
        }
    }

    if !warnings.is_empty() {
        log::debug!("{}", warnings.message());
    }

    ConstrainedIndices {
        width: pixels.width(),
        height: pixels.height(),
        indices,
        warnings,
    }
}
