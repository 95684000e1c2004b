//! Edit state
//!
//! The single owned context object of an editing session. Input handlers call methods on
//! it; nothing is global. Each method runs to completion before the next one starts, so the
//! render tick always observes a consistent buffer.
//!
//! ## Mutation rules
//!
//! - Pixel edits happen inside a history transaction (see `undo.rs`). Operations open their
//!   own transaction, which joins an already open gesture transaction if there is one.
//! - Every actual cell change marks the transaction dirty and requests a render. Writes that
//!   do not change a cell are invisible to both.
//! - Settings, palette and preset changes request a render but are not part of history.

use retro_engine::{Document, Palette, PixelBuffer, Result, ScanlineWarnings, Settings, DEFAULT_PRESET};

use crate::{HistoryManager, RenderScheduler};

use super::EditSession;

pub struct EditState {
    pub(crate) document: Document,
    pub(crate) history: HistoryManager,
    pub(crate) scheduler: RenderScheduler,
    pub(crate) session: EditSession,
    pub(crate) active_preset: String,
    pub(crate) last_warnings: ScanlineWarnings,
}

impl Default for EditState {
    fn default() -> Self {
        Self::new()
    }
}

impl EditState {
    /// Blank 160×120 canvas with the default preset.
    pub fn new() -> Self {
        Self::from_document(Document::default())
    }

    /// Blank canvas of the given size with preset `preset_id`.
    pub fn with_preset(preset_id: &str, width: i32, height: i32) -> Result<Self> {
        Ok(Self::from_document(Document::from_preset(preset_id, width, height)?))
    }

    pub fn from_document(document: Document) -> Self {
        let active_preset = document.preset_id.clone().unwrap_or_else(|| DEFAULT_PRESET.to_string());
        let mut state = Self {
            document,
            history: HistoryManager::new(),
            scheduler: RenderScheduler::new(),
            session: EditSession::default(),
            active_preset,
            last_warnings: ScanlineWarnings::default(),
        };
        state.clamp_selected_color();
        state
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn pixels(&self) -> &PixelBuffer {
        &self.document.pixels
    }

    pub fn palette(&self) -> &Palette {
        &self.document.palette
    }

    pub fn settings(&self) -> &Settings {
        &self.document.settings
    }

    pub fn session(&self) -> &EditSession {
        &self.session
    }

    pub fn history(&self) -> &HistoryManager {
        &self.history
    }

    pub fn active_preset(&self) -> &str {
        &self.active_preset
    }

    /// Warnings of the most recently rendered frame.
    pub fn scanline_warnings(&self) -> &ScanlineWarnings {
        &self.last_warnings
    }

    pub(crate) fn clamp_selected_color(&mut self) {
        let last = (self.document.palette.len() - 1).min(u8::MAX as usize) as u8;
        self.session.selected_color = self.session.selected_color.min(last);
    }

    /// Records `changed` cell writes against the open transaction.
    pub(crate) fn note_changes(&mut self, changed: usize) {
        if changed > 0 {
            self.history.mark_dirty();
            self.scheduler.request();
        }
    }
}
