//! Snapshot based undo/redo
//!
//! Every transaction stores one full copy of the pixel buffer taken when it opened. Buffers
//! are small and edits are per gesture, so whole copies are simpler than inverse operations.
//! Snapshots are owned values, so no stack entry ever aliases the live buffer.
//!
//! A transaction is only recorded if something inside it actually changed a cell. Until
//! then the snapshot is held aside, so an empty gesture touches neither stack.

use std::collections::VecDeque;

use retro_engine::PixelBuffer;

/// Maximum number of undo steps kept; the oldest is evicted first.
pub const MAX_UNDO_ENTRIES: usize = 80;

/// An immutable snapshot of the buffer before (undo) or after (redo) a transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    description: String,
    snapshot: PixelBuffer,
}

impl HistoryEntry {
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn snapshot(&self) -> &PixelBuffer {
        &self.snapshot
    }
}

#[derive(Debug)]
pub struct HistoryManager {
    undo_stack: VecDeque<HistoryEntry>,
    redo_stack: Vec<HistoryEntry>,
    pending: Option<HistoryEntry>,
    dirty: bool,
    capacity: usize,
}

impl Default for HistoryManager {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryManager {
    pub fn new() -> Self {
        Self::with_capacity(MAX_UNDO_ENTRIES)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
            pending: None,
            dirty: false,
            capacity: capacity.max(1),
        }
    }

    /// Opens a transaction. Returns `false` (and does nothing) if one is already open.
    pub fn begin(&mut self, current: &PixelBuffer, description: impl Into<String>) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.pending = Some(HistoryEntry {
            description: description.into(),
            snapshot: current.clone(),
        });
        self.dirty = false;
        true
    }

    /// Records that the open transaction changed at least one cell.
    pub fn mark_dirty(&mut self) {
        if self.pending.is_some() {
            self.dirty = true;
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    /// Closes the open transaction. Returns `true` if it was committed as an undo step,
    /// `false` if nothing was open or nothing changed.
    pub fn end(&mut self) -> bool {
        let Some(entry) = self.pending.take() else {
            return false;
        };
        if !self.dirty {
            log::debug!("Discarding empty transaction '{}'", entry.description);
            return false;
        }
        self.dirty = false;
        log::debug!("Committing '{}'", entry.description);
        self.undo_stack.push_back(entry);
        while self.undo_stack.len() > self.capacity {
            self.undo_stack.pop_front();
        }
        self.redo_stack.clear();
        true
    }

    /// Restores the previous snapshot into `current`. An open transaction is closed first.
    pub fn undo(&mut self, current: &mut PixelBuffer) -> bool {
        self.end();
        let Some(entry) = self.undo_stack.pop_back() else {
            return false;
        };
        log::debug!("Undo '{}'", entry.description);
        let previous = std::mem::replace(current, entry.snapshot);
        self.redo_stack.push(HistoryEntry {
            description: entry.description,
            snapshot: previous,
        });
        true
    }

    /// Reapplies the last undone snapshot into `current`. An open transaction is closed first.
    pub fn redo(&mut self, current: &mut PixelBuffer) -> bool {
        self.end();
        let Some(entry) = self.redo_stack.pop() else {
            return false;
        };
        log::debug!("Redo '{}'", entry.description);
        let previous = std::mem::replace(current, entry.snapshot);
        self.undo_stack.push_back(HistoryEntry {
            description: entry.description,
            snapshot: previous,
        });
        while self.undo_stack.len() > self.capacity {
            self.undo_stack.pop_front();
        }
        true
    }

    /// Drops both stacks and any open transaction.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.pending = None;
        self.dirty = false;
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn undo_description(&self) -> Option<&str> {
        self.undo_stack.back().map(HistoryEntry::description)
    }

    pub fn redo_description(&self) -> Option<&str> {
        self.redo_stack.last().map(HistoryEntry::description)
    }

    /// Oldest first.
    pub fn undo_entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.undo_stack.iter()
    }
}
