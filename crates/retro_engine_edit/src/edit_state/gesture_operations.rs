//! Pointer gestures and the drawing primitives they drive

use retro_engine::Position;

use super::{EditState, Tool, PEN_SIZE_STEPS};
use crate::brushes;

impl EditState {
    // ═══════════════════════════════════════════════════════════════════════
    // Pointer gestures
    // ═══════════════════════════════════════════════════════════════════════

    /// Starts a gesture at `cell`.
    ///
    /// The bucket fills right away as its own transaction. Pen and eraser open the gesture
    /// transaction and stamp once; the transaction stays open until [`Self::pointer_up`].
    pub fn pointer_down(&mut self, cell: Position) {
        match self.session.tool {
            Tool::Bucket => {
                let replacement = self.session.selected_color;
                self.flood_fill(cell, replacement);
            }
            Tool::Pen | Tool::Eraser => {
                let description = match self.session.tool {
                    Tool::Eraser => "Erase",
                    _ => "Draw",
                };
                self.begin_transaction(description);
                self.session.is_drawing = true;
                self.session.previous_cell = Some(cell);
                let index = self.session.paint_index();
                let size = self.session.pen_size;
                self.stamp(cell, size, index);
            }
        }
    }

    /// Continues a gesture. Ignored unless a pen or eraser gesture is in progress.
    pub fn pointer_move(&mut self, cell: Position) {
        if !self.session.is_drawing {
            return;
        }
        let index = self.session.paint_index();
        let size = self.session.pen_size;
        match self.session.previous_cell {
            Some(previous) => {
                self.draw_line(previous, cell, size, index);
            }
            None => {
                self.stamp(cell, size, index);
            }
        }
        self.session.previous_cell = Some(cell);
    }

    /// Ends the gesture and commits its transaction.
    pub fn pointer_up(&mut self) {
        self.session.reset_gesture();
        self.end_transaction();
    }

    /// Maps a point inside a `rect_width × rect_height` display rectangle to the logical
    /// cell under it, clamped to the canvas.
    pub fn cell_from_display(&self, px: f64, py: f64, rect_width: f64, rect_height: f64) -> Position {
        let width = self.document.pixels.width();
        let height = self.document.pixels.height();
        let map = |p: f64, extent: f64, cells: i32| {
            if extent <= 0.0 || !p.is_finite() {
                return 0;
            }
            let cell = ((p / extent) * cells as f64).floor();
            cell.clamp(0.0, (cells - 1) as f64) as i32
        };
        Position::new(map(px, rect_width, width), map(py, rect_height, height))
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Primitives
    // ═══════════════════════════════════════════════════════════════════════

    /// Stamps a `size × size` brush of `index` centered on `cell`. Returns the changed cell count.
    pub fn stamp(&mut self, cell: Position, size: u32, index: u8) -> usize {
        self.with_transaction("Stamp", |state| {
            let changed = brushes::stamp_brush(&mut state.document.pixels, cell, size, index);
            state.note_changes(changed);
            changed
        })
    }

    /// Stamps the brush at every cell of the line from `from` to `to`.
    pub fn draw_line(&mut self, from: Position, to: Position, size: u32, index: u8) -> usize {
        self.with_transaction("Line", |state| {
            let changed = brushes::stroke_line(&mut state.document.pixels, from, to, size, index);
            state.note_changes(changed);
            changed
        })
    }

    /// Fills the 4-connected region under `start` with `replacement`.
    ///
    /// A fill outside the canvas or onto the same index is a no-op and leaves no undo step.
    pub fn flood_fill(&mut self, start: Position, replacement: u8) -> usize {
        self.with_transaction("Fill", |state| {
            let changed = brushes::flood_fill(&mut state.document.pixels, start, replacement);
            state.note_changes(changed);
            changed
        })
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Tool selection
    // ═══════════════════════════════════════════════════════════════════════

    pub fn set_tool(&mut self, tool: Tool) {
        self.session.tool = tool;
    }

    /// Sets the pen size; zero is raised to one.
    pub fn set_pen_size(&mut self, size: u32) {
        self.session.pen_size = size.max(PEN_SIZE_STEPS[0]);
    }

    pub fn step_pen_size(&mut self, up: bool) {
        self.session.step_pen_size(up);
    }

    /// Selects the paint color. Returns `false` (selection unchanged) if `index` is not in the palette.
    pub fn select_color(&mut self, index: u8) -> bool {
        if !self.document.palette.contains_index(index) {
            return false;
        }
        self.session.selected_color = index;
        true
    }
}
