use pretty_assertions::assert_eq;
use retro_engine_edit::{ExportMode, Position, RetroCompositor, Size, UndoState};

use crate::small_state;

#[test]
fn test_first_tick_renders_then_idles() {
    let mut state = small_state();
    let mut compositor = RetroCompositor::with_seed(3);

    let frame = state.tick(&mut compositor).unwrap();
    assert_eq!(frame.size, Size::new(48, 32));
    assert!(state.tick(&mut compositor).is_none());
    assert_eq!(state.frames_rendered(), 1);
}

#[test]
fn test_many_edits_one_render() {
    let mut state = small_state();
    let mut compositor = RetroCompositor::with_seed(3);
    state.tick(&mut compositor);

    state.pointer_down(Position::new(0, 0));
    for x in 1..8 {
        state.pointer_move(Position::new(x, x));
    }
    state.pointer_up();

    assert!(state.tick(&mut compositor).is_some());
    assert!(state.tick(&mut compositor).is_none());
    assert_eq!(state.frames_rendered(), 2);
}

#[test]
fn test_noop_edits_do_not_request_render() {
    let mut state = small_state();
    let mut compositor = RetroCompositor::with_seed(3);
    state.tick(&mut compositor);

    state.select_color(0);
    state.stamp(Position::new(1, 1), 2, 0);
    state.flood_fill(Position::new(1, 1), 0);
    assert!(!state.needs_render());
}

#[test]
fn test_history_navigation_requests_render() {
    let mut state = small_state();
    let mut compositor = RetroCompositor::with_seed(3);
    state.stamp(Position::new(1, 1), 1, 2);
    state.tick(&mut compositor);

    state.undo();
    assert!(state.needs_render());
    state.tick(&mut compositor);
    state.redo();
    assert!(state.needs_render());
}

#[test]
fn test_tick_keeps_scanline_warnings() {
    let mut state = small_state();
    let mut compositor = RetroCompositor::with_seed(3);
    state.update_settings(|settings| {
        settings.auto_clamp_colors = false;
        settings.set_per_scanline_color_limit(2);
    });
    for x in 0..3 {
        state.stamp(Position::new(x, 5), 1, (x + 1) as u8);
    }

    let frame = state.tick(&mut compositor).unwrap();
    assert_eq!(frame.warnings.rows(), &[5]);
    assert_eq!(state.scanline_warnings().message(), "Color limit exceeded on 1 lines (e.g. y=5)");

    state.update_settings(|settings| settings.auto_clamp_colors = true);
    state.tick(&mut compositor);
    assert!(state.scanline_warnings().is_empty());
}

#[test]
fn test_export_modes() {
    let mut state = small_state();
    let mut compositor = RetroCompositor::with_seed(3);
    state.stamp(Position::new(0, 0), 1, 1);

    let raw = state.export(ExportMode::Raw, &mut compositor).unwrap();
    assert_eq!((raw.width(), raw.height()), (8, 8));
    assert_eq!(raw.get_pixel(0, 0).0, [255, 255, 255, 255]);

    let styled = state.export(ExportMode::Styled, &mut compositor).unwrap();
    assert_eq!((styled.width(), styled.height()), (48, 32));

    // exporting does not consume the pending render
    assert!(state.needs_render());
}
