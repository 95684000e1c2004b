use retro_engine::CanvasAspect;

use super::{session::ERASE_INDEX, EditState};

impl EditState {
    /// Sets every cell to index 0 as one undoable step.
    pub fn clear_canvas(&mut self) {
        self.with_transaction("Clear canvas", |state| {
            if state.document.pixels.fill(ERASE_INDEX) {
                state.note_changes(1);
            }
        });
    }

    /// Resizes the canvas keeping the overlapping top left rectangle, as one undoable step.
    ///
    /// Dimensions below one are raised to one. Resizing to the current size does nothing.
    /// The canvas aspect tag is dropped, use [`Self::set_canvas_aspect`] to keep one.
    pub fn resize_canvas(&mut self, width: i32, height: i32) {
        if self.resize_pixels("Resize canvas", width, height) {
            self.document.canvas_aspect = None;
        }
    }

    /// Switches to the logical size of `aspect` as one undoable step.
    pub fn set_canvas_aspect(&mut self, aspect: CanvasAspect) {
        let size = aspect.logical_size();
        self.resize_pixels("Canvas aspect", size.width, size.height);
        self.document.canvas_aspect = Some(aspect);
    }

    /// The aspect tag is not part of history. After the buffer was swapped by undo or redo it
    /// is kept if it still matches the size, otherwise derived from the size.
    pub(crate) fn reconcile_canvas_aspect(&mut self) {
        let size = self.document.pixels.size();
        if self.document.canvas_aspect.is_some_and(|aspect| aspect.logical_size() == size) {
            return;
        }
        self.document.canvas_aspect = CanvasAspect::from_size(size);
    }

    fn resize_pixels(&mut self, description: &str, width: i32, height: i32) -> bool {
        let (width, height) = (width.max(1), height.max(1));
        if width == self.document.pixels.width() && height == self.document.pixels.height() {
            return false;
        }
        self.with_transaction(description, |state| {
            log::info!(
                "Resizing canvas {}x{} -> {}x{}",
                state.document.pixels.width(),
                state.document.pixels.height(),
                width,
                height
            );
            state.document.pixels = state.document.pixels.resized(width, height);
            state.session.reset_gesture();
            state.note_changes(1);
        });
        true
    }
}
