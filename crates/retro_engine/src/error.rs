//! Unified error types for retro_engine

use thiserror::Error;

/// Main error type for retro_engine operations
#[derive(Debug, Error)]
pub enum EngineError {
    // === I/O Errors ===
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Palette Errors ===
    #[error("Invalid hex color: {value}")]
    InvalidHexColor { value: String },

    #[error("Palette must contain at least one color")]
    EmptyPalette,

    #[error("Palette has {len} colors, at most {max} are supported")]
    PaletteTooLarge { len: usize, max: usize },

    #[error("Palette index {index} out of range (0..{len})")]
    PaletteIndexOutOfRange { index: u8, len: usize },

    // === Buffer Errors ===
    #[error("Invalid dimensions {width}x{height}")]
    InvalidDimensions { width: i64, height: i64 },

    #[error("Pixel data length mismatch: expected {expected}, got {actual}")]
    PixelLengthMismatch { expected: usize, actual: usize },

    // === Document Errors ===
    #[error("Invalid save data: missing field '{field}'")]
    MissingField { field: &'static str },

    #[error("Invalid save data: {message}")]
    InvalidDocument { message: String },

    #[error("Unsupported dither matrix size: {size}")]
    UnsupportedDitherMatrix { size: u32 },

    #[error("Unknown preset: {id}")]
    UnknownPreset { id: String },

    // === Export Errors ===
    #[error("Failed to create image buffer")]
    ImageBufferCreationFailed,

    #[error("Failed to save image: {message}")]
    ImageSaveFailed { message: String },

    // === External Errors ===
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Base64 error: {0}")]
    Base64(#[from] base64::DecodeError),
}

/// Result type alias for retro_engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

impl EngineError {
    /// Create an invalid document error from any displayable type
    pub fn invalid_document(msg: impl std::fmt::Display) -> Self {
        Self::InvalidDocument { message: msg.to_string() }
    }
}
