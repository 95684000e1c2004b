//! Stage C part one: per-row horizontal jitter, redrawn every frame.

use crate::Settings;

/// Probability of a row being offset at full jitter strength.
pub const JITTER_ROW_CHANCE: f64 = 0.55;

/// Source of uniform values in [0, 1). Injected so frames can be reproduced by seeding.
pub trait JitterSource {
    fn next_unit(&mut self) -> f64;
}

impl JitterSource for fastrand::Rng {
    fn next_unit(&mut self) -> f64 {
        self.f64()
    }
}

/// One entry per logical row: -1, 0 or +1.
///
/// Each row is offset with probability `jitter_strength × 0.55`, the sign is a fair coin.
/// No values are drawn when jitter is inactive.
pub fn build_jitter_map(height: i32, settings: &Settings, source: &mut impl JitterSource) -> Vec<i8> {
    let mut map = vec![0i8; height.max(0) as usize];
    if !settings.jitter_active() {
        return map;
    }

    let chance = settings.jitter_strength * JITTER_ROW_CHANCE;
    for offset in &mut map {
        if source.next_unit() < chance {
            *offset = if source.next_unit() > 0.5 { 1 } else { -1 };
        }
    }
    map
}

/// Display pixel shift of a band with the given row offset.
pub fn band_shift(offset: i8, settings: &Settings) -> i64 {
    (offset as f64 * settings.jitter_strength * settings.scale_x as f64).round() as i64
}
