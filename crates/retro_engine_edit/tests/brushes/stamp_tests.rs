//! Tests for square brush stamps

use pretty_assertions::assert_eq;
use retro_engine_edit::{brushes::stamp_brush, PixelBuffer, Position};

use crate::cells_with;

#[test]
fn test_size_one_is_single_cell() {
    let mut buffer = PixelBuffer::new(5, 5);
    assert_eq!(stamp_brush(&mut buffer, Position::new(2, 2), 1, 4), 1);
    assert_eq!(cells_with(&buffer, 4), vec![(2, 2)]);
}

#[test]
fn test_even_size_extends_top_left() {
    let mut buffer = PixelBuffer::new(5, 5);
    assert_eq!(stamp_brush(&mut buffer, Position::new(2, 2), 2, 4), 4);
    assert_eq!(cells_with(&buffer, 4), vec![(1, 1), (2, 1), (1, 2), (2, 2)]);
}

#[test]
fn test_size_four() {
    let mut buffer = PixelBuffer::new(8, 8);
    assert_eq!(stamp_brush(&mut buffer, Position::new(4, 4), 4, 1), 16);
    let cells = cells_with(&buffer, 1);
    assert_eq!(cells.first(), Some(&(2, 2)));
    assert_eq!(cells.last(), Some(&(5, 5)));
}

#[test]
fn test_stamp_clips_at_edges() {
    let mut buffer = PixelBuffer::new(4, 4);
    assert_eq!(stamp_brush(&mut buffer, Position::new(0, 0), 4, 2), 4);
    assert_eq!(cells_with(&buffer, 2), vec![(0, 0), (1, 0), (0, 1), (1, 1)]);

    assert_eq!(stamp_brush(&mut buffer, Position::new(-10, 3), 2, 2), 0);
}

#[test]
fn test_restamp_changes_nothing() {
    let mut buffer = PixelBuffer::new(4, 4);
    stamp_brush(&mut buffer, Position::new(1, 1), 2, 3);
    assert_eq!(stamp_brush(&mut buffer, Position::new(1, 1), 2, 3), 0);
}

#[test]
fn test_size_zero_acts_as_one() {
    let mut buffer = PixelBuffer::new(4, 4);
    assert_eq!(stamp_brush(&mut buffer, Position::new(3, 3), 0, 9), 1);
}
