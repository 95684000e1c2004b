#![allow(clippy::many_single_char_names)]
use std::fmt::Display;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{EngineError, Result};

lazy_static::lazy_static! {
    static ref HEX_REGEX: Regex = Regex::new(r"^#?([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})$").unwrap();
}

/// Palettes are indexed by a single byte.
pub const MAX_PALETTE_SIZE: usize = 256;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{Color: r={:02X}, g={:02X}, b={:02X}}}", self.r, self.g, self.b)
    }
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parses `#RRGGBB` (the leading `#` is optional).
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidHexColor`] if the string is not six hex digits.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let Some(cap) = HEX_REGEX.captures(hex.trim()) else {
            return Err(EngineError::InvalidHexColor { value: hex.to_string() });
        };
        let (_, [r, g, b]) = cap.extract();
        let parse = |s: &str| u8::from_str_radix(s, 16).map_err(|_| EngineError::InvalidHexColor { value: hex.to_string() });
        Ok(Color::new(parse(r)?, parse(g)?, parse(b)?))
    }

    /// Squared euclidean distance in RGB space.
    pub fn distance_sq(&self, other: &Color) -> u32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        (dr * dr + dg * dg + db * db) as u32
    }
}

/// Ordered color table. Index 0 is the background / erase color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// # Errors
    ///
    /// Fails if the palette is empty or has more than [`MAX_PALETTE_SIZE`] entries.
    pub fn new(colors: Vec<Color>) -> Result<Self> {
        if colors.is_empty() {
            return Err(EngineError::EmptyPalette);
        }
        if colors.len() > MAX_PALETTE_SIZE {
            return Err(EngineError::PaletteTooLarge {
                len: colors.len(),
                max: MAX_PALETTE_SIZE,
            });
        }
        Ok(Self { colors })
    }

    /// # Errors
    ///
    /// Fails on the first malformed entry or if the resulting palette is not a valid size.
    pub fn from_hex_list<S: AsRef<str>>(list: &[S]) -> Result<Self> {
        let colors = list.iter().map(|s| Color::from_hex(s.as_ref())).collect::<Result<Vec<_>>>()?;
        Self::new(colors)
    }

    pub fn to_hex_list(&self) -> Vec<String> {
        self.colors.iter().map(Color::to_hex).collect()
    }

    /// Out of range indices resolve to black.
    pub fn get_color(&self, index: u8) -> Color {
        self.colors.get(index as usize).copied().unwrap_or(Color::BLACK)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn contains_index(&self, index: u8) -> bool {
        (index as usize) < self.colors.len()
    }

    /// Returns the candidate index whose color is nearest to `color`.
    /// Ties go to the earliest candidate.
    pub fn nearest_of(&self, color: Color, candidates: &[u8]) -> Option<u8> {
        let mut best = None;
        let mut best_dist = u32::MAX;
        for &candidate in candidates {
            let dist = self.get_color(candidate).distance_sq(&color);
            if best.is_none() || dist < best_dist {
                best_dist = dist;
                best = Some(candidate);
            }
        }
        best
    }

    /// Index of the palette entry nearest to `color`, ties to the lowest index.
    pub fn nearest(&self, color: Color) -> u8 {
        let mut best = 0;
        let mut best_dist = u32::MAX;
        for (index, candidate) in self.colors.iter().enumerate() {
            let dist = candidate.distance_sq(&color);
            if dist < best_dist {
                best_dist = dist;
                best = index as u8;
            }
        }
        best
    }
}
