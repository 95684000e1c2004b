//! Stage C part two: nearest neighbor scale up into the display surface.

use crate::{Settings, Size};

use super::jitter::band_shift;

/// Scales the logical RGBA `image` by `scale_x × scale_y` and shifts every row band by
/// its jitter offset. Uncovered display pixels stay transparent black.
pub fn present(image: &[u8], logical: Size, jitter: &[i8], settings: &Settings) -> (Size, Vec<u8>) {
    let sx = settings.scale_x.max(1) as usize;
    let sy = settings.scale_y.max(1) as usize;
    let width = logical.width.max(0) as usize;
    let height = logical.height.max(0) as usize;
    let display_w = width * sx;
    let display_h = height * sy;
    let stride = display_w * 4;

    let mut surface = vec![0u8; stride * display_h];
    let mut line = vec![0u8; stride];

    for y in 0..height {
        let src = &image[y * width * 4..(y + 1) * width * 4];
        for (x, pixel) in src.chunks_exact(4).enumerate() {
            for dx in 0..sx {
                let o = (x * sx + dx) * 4;
                line[o..o + 4].copy_from_slice(pixel);
            }
        }

        let offset = jitter.get(y).copied().unwrap_or(0);
        let shift = band_shift(offset, settings).clamp(-(display_w as i64), display_w as i64);
        let magnitude = shift.unsigned_abs() as usize * 4;

        for band_row in 0..sy {
            let start = (y * sy + band_row) * stride;
            let dst = &mut surface[start..start + stride];
            if shift >= 0 {
                dst[magnitude..].copy_from_slice(&line[..stride - magnitude]);
            } else {
                dst[..stride - magnitude].copy_from_slice(&line[magnitude..]);
            }
        }
    }

    (Size::new(display_w as i32, display_h as i32), surface)
}
