//! Ordered (Bayer) dithering thresholds.

use crate::DitherMatrix;

/// Peak to peak brightness swing of the dither pattern at full strength.
pub const DITHER_AMPLITUDE: f64 = 120.0;

pub const BAYER_4: [[u8; 4]; 4] = [[0, 8, 2, 10], [12, 4, 14, 6], [3, 11, 1, 9], [15, 7, 13, 5]];

pub const BAYER_8: [[u8; 8]; 8] = [
    [0, 48, 12, 60, 3, 51, 15, 63],
    [32, 16, 44, 28, 35, 19, 47, 31],
    [8, 56, 4, 52, 11, 59, 7, 55],
    [40, 24, 36, 20, 43, 27, 39, 23],
    [2, 50, 14, 62, 1, 49, 13, 61],
    [34, 18, 46, 30, 33, 17, 45, 29],
    [10, 58, 6, 54, 9, 57, 5, 53],
    [42, 26, 38, 22, 41, 25, 37, 21],
];

/// Matrix cell for `(x, y)` normalized to [0, 1].
pub fn threshold(matrix: DitherMatrix, x: usize, y: usize) -> f64 {
    let size = matrix.size();
    let value = match matrix {
        DitherMatrix::Bayer4 => BAYER_4[y % size][x % size],
        DitherMatrix::Bayer8 => BAYER_8[y % size][x % size],
    };
    value as f64 / (size * size - 1) as f64
}

/// Signed brightness offset added to every channel of the pixel at `(x, y)`.
pub fn dither_delta(matrix: DitherMatrix, strength: f64, x: usize, y: usize) -> f64 {
    (threshold(matrix, x, y) - 0.5) * DITHER_AMPLITUDE * strength
}
