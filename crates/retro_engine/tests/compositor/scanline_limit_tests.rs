use pretty_assertions::assert_eq;
use retro_engine::{compositor::constrain_scanlines, Preset, Settings};

use crate::{buffer, palette};

const BLACK: (u8, u8, u8) = (0, 0, 0);
const RED: (u8, u8, u8) = (255, 0, 0);
const BLUE: (u8, u8, u8) = (0, 0, 255);
const GREEN: (u8, u8, u8) = (0, 255, 0);

fn limited(limit: i64, auto_clamp: bool) -> Settings {
    let mut settings = Settings::neutral();
    settings.set_per_scanline_color_limit(limit);
    settings.auto_clamp_colors = auto_clamp;
    settings
}

#[test]
fn test_indices_not_colors_take_slots() {
    // indices 1 and 2 are both red but still use two slots
    let palette = palette(&[BLACK, RED, RED, BLUE, GREEN]);
    let pixels = buffer(4, 1, &[1, 2, 3, 4]);

    let result = constrain_scanlines(&pixels, &palette, &limited(2, true));

    // blue and green are equally far from both reds, the first seen one wins
    assert_eq!(result.indices, vec![1, 2, 1, 1]);
    assert!(result.warnings.is_empty());
}

#[test]
fn test_six_indices_clamped_to_four() {
    let palette = Preset::find("neon").unwrap().palette().unwrap();
    let pixels = buffer(6, 1, &[0, 1, 2, 3, 4, 5]);

    let result = constrain_scanlines(&pixels, &palette, &limited(4, true));

    // #ff00b3 is nearest to #1e00ff, #ffd400 is nearest to white
    assert_eq!(result.indices, vec![0, 1, 2, 3, 2, 1]);

    let mut distinct = result.indices.clone();
    distinct.sort_unstable();
    distinct.dedup();
    assert!(distinct.len() <= 4);
}

#[test]
fn test_remap_is_nearest_retained_color() {
    let palette = Preset::find("et").unwrap().palette().unwrap();
    let row: Vec<u8> = (0..16).collect();
    let pixels = buffer(16, 1, &row);

    let result = constrain_scanlines(&pixels, &palette, &limited(4, true));
    let retained = [0u8, 1, 2, 3];

    for (x, &index) in result.indices.iter().enumerate() {
        assert!(retained.contains(&index), "x={x} kept index {index}");
        let original = palette.get_color(row[x]);
        let best = retained.iter().map(|&i| palette.get_color(i).distance_sq(&original)).min().unwrap();
        assert_eq!(palette.get_color(index).distance_sq(&original), best, "x={x}");
    }
}

#[test]
fn test_repeated_overflow_index_is_remapped_everywhere() {
    let palette = palette(&[BLACK, RED, BLUE, GREEN]);
    let pixels = buffer(6, 1, &[1, 2, 3, 1, 3, 2]);

    let result = constrain_scanlines(&pixels, &palette, &limited(2, true));
    assert_eq!(result.indices, vec![1, 2, 1, 1, 1, 2]);
}

#[test]
fn test_rows_within_budget_are_untouched() {
    let palette = palette(&[BLACK, RED, BLUE, GREEN]);
    let pixels = buffer(4, 2, &[1, 1, 2, 2, 3, 3, 3, 0]);

    let result = constrain_scanlines(&pixels, &palette, &limited(2, true));
    assert_eq!(result.indices, pixels.as_slice());
}

#[test]
fn test_warnings_without_auto_clamp() {
    let palette = palette(&[BLACK, RED, BLUE, GREEN]);
    let pixels = buffer(3, 3, &[1, 2, 3, 0, 0, 0, 3, 2, 1]);

    let result = constrain_scanlines(&pixels, &palette, &limited(2, false));

    // reported, not remapped
    assert_eq!(result.indices, pixels.as_slice());
    assert_eq!(result.warnings.rows(), &[0, 2]);
    assert_eq!(result.warnings.message(), "Color limit exceeded on 2 lines (e.g. y=0, 2)");
}

#[test]
fn test_warning_message_previews_five_rows() {
    let palette = palette(&[BLACK, RED, BLUE, GREEN]);
    let row = [0u8, 1, 2, 3];
    let data: Vec<u8> = row.iter().copied().cycle().take(4 * 7).collect();
    let pixels = buffer(4, 7, &data);

    let result = constrain_scanlines(&pixels, &palette, &limited(2, false));

    assert_eq!(result.warnings.len(), 7);
    assert_eq!(result.warnings.preview(), &[0, 1, 2, 3, 4]);
    assert_eq!(result.warnings.message(), "Color limit exceeded on 7 lines (e.g. y=0, 1, 2, 3, 4)");
}

#[test]
fn test_no_warnings_means_empty_message() {
    let palette = palette(&[BLACK, RED]);
    let pixels = buffer(2, 1, &[0, 1]);

    let result = constrain_scanlines(&pixels, &palette, &limited(2, false));
    assert!(result.warnings.is_empty());
    assert_eq!(result.warnings.message(), "");
}

#[test]
fn test_source_buffer_is_not_modified() {
    let palette = palette(&[BLACK, RED, BLUE, GREEN]);
    let pixels = buffer(4, 1, &[0, 1, 2, 3]);
    let before = pixels.clone();

    let _ = constrain_scanlines(&pixels, &palette, &limited(2, true));
    assert_eq!(pixels, before);
}
