use pretty_assertions::assert_eq;
use retro_engine_edit::{CanvasAspect, Document, EditState, PixelBuffer, Position, Size, UndoState};

use crate::{cells_with, small_state};

#[test]
fn test_clear_canvas_is_undoable() {
    let mut state = small_state();
    state.flood_fill(Position::new(0, 0), 6);
    state.stamp(Position::new(3, 3), 1, 2);

    state.clear_canvas();
    assert_eq!(state.pixels(), &PixelBuffer::new(8, 8));
    assert_eq!(state.undo_stack_len(), 3);

    state.undo();
    assert_eq!(state.pixels().get((3, 3)), Some(2));
    assert_eq!(cells_with(state.pixels(), 6).len(), 63);
}

#[test]
fn test_clear_blank_canvas_is_not_recorded() {
    let mut state = small_state();
    state.clear_canvas();
    assert_eq!(state.undo_stack_len(), 0);
}

#[test]
fn test_resize_keeps_overlap() {
    let mut state = small_state();
    state.stamp(Position::new(1, 1), 1, 4);
    state.stamp(Position::new(7, 7), 1, 5);

    state.resize_canvas(4, 12);

    assert_eq!(state.pixels().size(), Size::new(4, 12));
    assert_eq!(state.pixels().get((1, 1)), Some(4));
    assert!(cells_with(state.pixels(), 5).is_empty());
    assert_eq!(state.pixels().get((3, 11)), Some(0));
    assert_eq!(state.undo_description().as_deref(), Some("Resize canvas"));
}

#[test]
fn test_resize_undo_restores_size_and_content() {
    let mut state = small_state();
    state.stamp(Position::new(7, 7), 1, 5);
    let before = state.pixels().clone();

    state.resize_canvas(3, 3);
    assert!(state.undo());
    assert_eq!(state.pixels(), &before);
    assert!(state.redo());
    assert_eq!(state.pixels().size(), Size::new(3, 3));
}

#[test]
fn test_resize_to_same_size_is_noop() {
    let mut state = small_state();
    state.resize_canvas(8, 8);
    assert_eq!(state.undo_stack_len(), 0);

    state.resize_canvas(0, -5);
    assert_eq!(state.pixels().size(), Size::new(1, 1));
}

#[test]
fn test_canvas_aspect_resizes() {
    let mut state = small_state();
    state.set_canvas_aspect(CanvasAspect::Wide);
    assert_eq!(state.pixels().size(), Size::new(160, 90));
    assert_eq!(state.document().canvas_aspect, Some(CanvasAspect::Wide));

    state.set_canvas_aspect(CanvasAspect::Square);
    assert_eq!(state.pixels().size(), Size::new(120, 120));
    assert_eq!(state.undo_stack_len(), 2);
}

#[test]
fn test_undo_aspect_switch_restores_matching_tag() {
    let mut state = EditState::new();
    state.set_canvas_aspect(CanvasAspect::Square);
    assert_eq!(state.undo_description().as_deref(), Some("Canvas aspect"));

    assert!(state.undo());
    assert_eq!(state.pixels().size(), Size::new(160, 120));
    assert_eq!(state.document().canvas_aspect, Some(CanvasAspect::Standard));

    assert!(state.redo());
    assert_eq!(state.pixels().size(), Size::new(120, 120));
    assert_eq!(state.document().canvas_aspect, Some(CanvasAspect::Square));
}

#[test]
fn test_free_resize_drops_aspect_tag() {
    let mut state = EditState::new();
    state.set_canvas_aspect(CanvasAspect::Square);

    state.resize_canvas(50, 30);
    assert_eq!(state.document().canvas_aspect, None);

    // back to the square canvas, the tag follows the size
    state.undo();
    assert_eq!(state.document().canvas_aspect, Some(CanvasAspect::Square));
    state.redo();
    assert_eq!(state.document().canvas_aspect, None);
}

#[test]
fn test_saved_aspect_agrees_with_size_after_undo() {
    let mut state = small_state();
    state.set_canvas_aspect(CanvasAspect::Wide);
    state.undo();

    let saved = Document::from_json(&state.save_document().unwrap()).unwrap();
    assert_eq!(saved.pixels.size(), Size::new(8, 8));
    assert_eq!(saved.canvas_aspect, None);
}
