//! Indexed pixel storage
//!
//! A `PixelBuffer` is a `width × height` grid of palette indices stored row major.
//! All write paths silently ignore coordinates outside the grid and report whether
//! a cell actually changed, so callers can track dirtiness exactly.

use crate::{EngineError, Position, Result, Size};

/// Canvas width used for new documents.
pub const DEFAULT_WIDTH: i32 = 160;

/// Canvas height used for new documents.
pub const DEFAULT_HEIGHT: i32 = 120;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: i32,
    height: i32,
    data: Vec<u8>,
}

impl Default for PixelBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl PixelBuffer {
    /// Creates a buffer filled with index 0. Non positive dimensions are raised to 1.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize],
        }
    }

    /// # Errors
    ///
    /// Fails if a dimension is not positive or `data` does not hold exactly `width × height` bytes.
    pub fn from_raw(width: i32, height: i32, data: Vec<u8>) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(EngineError::InvalidDimensions {
                width: width as i64,
                height: height as i64,
            });
        }
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(EngineError::PixelLengthMismatch { expected, actual: data.len() });
        }
        Ok(Self { width, height, data })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn is_valid(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.width && pos.y < self.height
    }

    fn offset(&self, pos: Position) -> Option<usize> {
        if self.is_valid(pos) {
            Some(pos.y as usize * self.width as usize + pos.x as usize)
        } else {
            None
        }
    }

    pub fn get(&self, pos: impl Into<Position>) -> Option<u8> {
        self.offset(pos.into()).map(|offset| self.data[offset])
    }

    /// Writes `index` at `pos`. Returns `true` only if the cell existed and its value changed.
    pub fn set(&mut self, pos: impl Into<Position>, index: u8) -> bool {
        let Some(offset) = self.offset(pos.into()) else {
            return false;
        };
        if self.data[offset] == index {
            return false;
        }
        self.data[offset] = index;
        true
    }

    /// Sets every cell to `index`. Returns `true` if anything changed.
    pub fn fill(&mut self, index: u8) -> bool {
        let mut changed = false;
        for cell in &mut self.data {
            if *cell != index {
                *cell = index;
                changed = true;
            }
        }
        changed
    }

    /// Returns a new buffer of the given size. The overlapping top left rectangle is
    /// copied, the remainder is index 0.
    pub fn resized(&self, new_width: i32, new_height: i32) -> PixelBuffer {
        let mut result = PixelBuffer::new(new_width, new_height);
        let copy_w = self.width.min(result.width) as usize;
        let copy_h = self.height.min(result.height) as usize;
        for y in 0..copy_h {
            let src = y * self.width as usize;
            let dst = y * result.width as usize;
            result.data[dst..dst + copy_w].copy_from_slice(&self.data[src..src + copy_w]);
        }
        result
    }

    pub fn row(&self, y: i32) -> &[u8] {
        let start = y as usize * self.width as usize;
        &self.data[start..start + self.width as usize]
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Replaces every cell with `map(cell)`. Returns the number of cells that changed.
    pub fn remap(&mut self, mut map: impl FnMut(u8) -> u8) -> usize {
        let mut changed = 0;
        for cell in &mut self.data {
            let index = map(*cell);
            if index != *cell {
                *cell = index;
                changed += 1;
            }
        }
        changed
    }

    /// Returns the first index that is not part of a palette with `palette_len` entries.
    pub fn first_index_outside(&self, palette_len: usize) -> Option<u8> {
        self.data.iter().copied().find(|&index| index as usize >= palette_len)
    }
}
