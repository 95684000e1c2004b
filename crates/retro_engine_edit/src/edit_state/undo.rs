//! Undo/Redo for the pixel editor
//!
//! All pixel modifications run inside a transaction:
//! - A gesture opens one on pointer down and closes it on pointer up
//! - Standalone operations open their own; if a gesture transaction is already open they
//!   join it instead, so a whole stroke is undone as one unit
//! - A transaction that changed nothing leaves no undo step behind

use super::EditState;

pub trait UndoState {
    /// Get description of the next undo operation
    fn undo_description(&self) -> Option<String>;

    /// Check if undo is available
    fn can_undo(&self) -> bool;

    /// Restore the buffer before the last committed transaction.
    /// Returns `false` if there was nothing to undo.
    fn undo(&mut self) -> bool;

    /// Get description of the next redo operation
    fn redo_description(&self) -> Option<String>;

    /// Check if redo is available
    fn can_redo(&self) -> bool;

    /// Reapply the last undone transaction.
    /// Returns `false` if there was nothing to redo.
    fn redo(&mut self) -> bool;
}

impl EditState {
    /// Opens a transaction unless one is already open.
    ///
    /// Returns `true` if this call opened it; only that caller should close it again.
    pub fn begin_transaction(&mut self, description: impl Into<String>) -> bool {
        self.history.begin(&self.document.pixels, description)
    }

    /// Closes the open transaction. Returns `true` if it was committed as an undo step.
    pub fn end_transaction(&mut self) -> bool {
        let committed = self.history.end();
        if committed {
            self.scheduler.request();
        }
        committed
    }

    pub fn is_transaction_open(&self) -> bool {
        self.history.is_open()
    }

    /// Runs `op` inside its own transaction, or inside the already open one.
    pub(crate) fn with_transaction<T>(&mut self, description: &str, op: impl FnOnce(&mut Self) -> T) -> T {
        let opened = self.begin_transaction(description);
        let result = op(self);
        if opened {
            self.end_transaction();
        }
        result
    }

    pub fn undo_stack_len(&self) -> usize {
        self.history.undo_len()
    }

    pub fn redo_stack_len(&self) -> usize {
        self.history.redo_len()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// UndoState Trait Implementation
// ═══════════════════════════════════════════════════════════════════════════

impl UndoState for EditState {
    fn undo_description(&self) -> Option<String> {
        self.history.undo_description().map(str::to_string)
    }

    fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    fn undo(&mut self) -> bool {
        self.session.reset_gesture();
        let restored = self.history.undo(&mut self.document.pixels);
        self.reconcile_canvas_aspect();
        // open transactions may have committed on the way
        self.scheduler.request();
        restored
    }

    fn redo_description(&self) -> Option<String> {
        self.history.redo_description().map(str::to_string)
    }

    fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    fn redo(&mut self) -> bool {
        self.session.reset_gesture();
        let restored = self.history.redo(&mut self.document.pixels);
        self.reconcile_canvas_aspect();
        self.scheduler.request();
        restored
    }
}
