//! Built-in presets: a palette plus a full [`Settings`] block each.

use crate::{DitherMatrix, EngineError, Palette, Result, Settings};

/// Preset applied to new documents.
pub const DEFAULT_PRESET: &str = "neon";

pub struct Preset {
    pub id: &'static str,
    pub label: &'static str,
    pub palette: &'static [&'static str],
    settings: fn() -> Settings,
}

impl Preset {
    pub fn settings(&self) -> Settings {
        (self.settings)()
    }

    /// # Errors
    ///
    /// Only fails if the static palette table is malformed.
    pub fn palette(&self) -> Result<Palette> {
        Palette::from_hex_list(self.palette)
    }

    pub fn find(id: &str) -> Result<&'static Preset> {
        PRESETS.iter().find(|preset| preset.id == id).ok_or_else(|| EngineError::UnknownPreset { id: id.to_string() })
    }

    pub fn all() -> &'static [Preset] {
        PRESETS
    }
}

static PRESETS: &[Preset] = &[
    Preset {
        id: "neon",
        label: "VCS NEON (Cyan/Magenta/Yellow)",
        palette: &[
            "#000000", "#ffffff", "#1e00ff", "#00e5ff", "#ff00b3", "#ffd400", "#7a00ff", "#00ff6a", "#ff2a00", "#ff6a00", "#00a2ff", "#2b2b2b", "#6b6b6b",
            "#00ffd4", "#ff4df0", "#ffe86b",
        ],
        settings: neon_settings,
    },
    Preset {
        id: "rune",
        label: "RUNE BLUE/RED (Cinematic)",
        palette: &[
            "#000000", "#ffffff", "#001a8f", "#003bff", "#00c8ff", "#6b00ff", "#ff0050", "#ff2a00", "#ffb000", "#7bff00", "#1a6b00", "#4a2a00", "#2a2a2a",
            "#6a6aff", "#ff7ab8", "#ffe0a8",
        ],
        settings: rune_settings,
    },
    Preset {
        id: "et",
        label: "E.T PURPLE SKY (Noisy Horizon)",
        palette: &[
            "#000000", "#ffffff", "#2b004f", "#5a00d6", "#8a00ff", "#ff2a00", "#ff6a00", "#ffd400", "#7bff00", "#2b7a00", "#005a2b", "#00e5ff", "#0046ff",
            "#2b2b2b", "#6b6b6b", "#b58cff",
        ],
        settings: et_settings,
    },
];

fn neon_settings() -> Settings {
    Settings::default()
}

fn rune_settings() -> Settings {
    Settings {
        scale_x: 6,
        scale_y: 4,
        dither_matrix: DitherMatrix::Bayer4,
        dither_enabled: true,
        dither_strength: 0.45,
        bleed_enabled: true,
        bleed_strength: 0.28,
        scanline_enabled: true,
        scanline_strength: 0.18,
        jitter_enabled: true,
        jitter_strength: 0.06,
        per_scanline_color_limit: 5,
        auto_clamp_colors: true,
    }
}

fn et_settings() -> Settings {
    Settings {
        scale_x: 6,
        scale_y: 4,
        dither_matrix: DitherMatrix::Bayer8,
        dither_enabled: true,
        dither_strength: 0.75,
        bleed_enabled: true,
        bleed_strength: 0.4,
        scanline_enabled: true,
        scanline_strength: 0.25,
        jitter_enabled: true,
        jitter_strength: 0.12,
        per_scanline_color_limit: 4,
        auto_clamp_colors: true,
    }
}
