//! Drawing primitives
//!
//! GUI independent algorithms that mutate an indexed raster:
//! - Square brush stamps
//! - Lines (Bresenham's algorithm)
//! - Flood fill (4-connected, stack driven)
//!
//! All primitives are tool agnostic, the caller decides which palette index to paint.
//! They return the number of cells that actually changed so callers can track dirtiness.

use retro_engine::{PixelBuffer, Position};

/// A raster that can be painted with palette indices.
pub trait DrawTarget {
    fn width(&self) -> i32;

    fn height(&self) -> i32;

    /// `None` outside the raster.
    fn index_at(&self, pos: Position) -> Option<u8>;

    /// Returns `true` if the cell exists and its value changed.
    fn set_index(&mut self, pos: Position, index: u8) -> bool;

    fn is_valid(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.width() && pos.y < self.height()
    }
}

impl DrawTarget for PixelBuffer {
    fn width(&self) -> i32 {
        PixelBuffer::width(self)
    }

    fn height(&self) -> i32 {
        PixelBuffer::height(self)
    }

    fn index_at(&self, pos: Position) -> Option<u8> {
        self.get(pos)
    }

    fn set_index(&mut self, pos: Position, index: u8) -> bool {
        self.set(pos, index)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Brush Stamp
// ═══════════════════════════════════════════════════════════════════════════

/// Paints a `size × size` square whose top left corner is `center - floor(size / 2)`.
///
/// Even sizes therefore extend one cell further to the top left than to the bottom right.
pub fn stamp_brush<T: DrawTarget>(target: &mut T, center: Position, size: u32, index: u8) -> usize {
    let size = size.max(1) as i32;
    let half = size / 2;
    let left = center.x - half;
    let top = center.y - half;

    let mut changed = 0;
    for y in top..top + size {
        for x in left..left + size {
            if target.set_index(Position::new(x, y), index) {
                changed += 1;
            }
        }
    }
    changed
}

// ═══════════════════════════════════════════════════════════════════════════
// Bresenham Line Algorithm
// ═══════════════════════════════════════════════════════════════════════════

/// Walks the cells from `p0` to `p1`, calling `painter` for every cell including both endpoints.
pub fn rasterize_line(p0: Position, p1: Position, mut painter: impl FnMut(Position)) {
    let dx = (p1.x - p0.x).abs();
    let dy = (p1.y - p0.y).abs();
    let sx = if p0.x < p1.x { 1 } else { -1 };
    let sy = if p0.y < p1.y { 1 } else { -1 };
    let mut err = dx - dy;

    let mut x = p0.x;
    let mut y = p0.y;

    loop {
        painter(Position::new(x, y));
        if x == p1.x && y == p1.y {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }
}

/// All cells on the line from `p0` to `p1`, in traversal order.
pub fn line_points(p0: Position, p1: Position) -> Vec<Position> {
    let mut points = Vec::new();
    rasterize_line(p0, p1, |pt| points.push(pt));
    points
}

/// Stamps the brush at every cell of the line so fast strokes leave no gaps.
pub fn stroke_line<T: DrawTarget>(target: &mut T, p0: Position, p1: Position, size: u32, index: u8) -> usize {
    let mut changed = 0;
    rasterize_line(p0, p1, |pt| changed += stamp_brush(target, pt, size, index));
    changed
}

// ═══════════════════════════════════════════════════════════════════════════
// Flood Fill Algorithm
// ═══════════════════════════════════════════════════════════════════════════

/// Replaces the 4-connected region of equal index containing `start` with `replacement`.
///
/// Nothing happens if `start` is outside the raster or already holds `replacement`.
pub fn flood_fill<T: DrawTarget>(target: &mut T, start: Position, replacement: u8) -> usize {
    let Some(target_index) = target.index_at(start) else {
        return 0;
    };
    if target_index == replacement {
        return 0;
    }

    let mut changed = 0;
    let mut stack = vec![start];
    while let Some(pos) = stack.pop() {
        if target.index_at(pos) != Some(target_index) {
            continue;
        }
        target.set_index(pos, replacement);
        changed += 1;
        stack.push(Position::new(pos.x + 1, pos.y));
        stack.push(Position::new(pos.x - 1, pos.y));
        stack.push(Position::new(pos.x, pos.y + 1));
        stack.push(Position::new(pos.x, pos.y - 1));
    }
    changed
}
