//! Editing layer for the retro pixel editor
//!
//! Mutations of a [`retro_engine::Document`] go through [`EditState`], which owns the
//! document, the undo history, the render scheduler and the gesture session. There is
//! exactly one mutator, so no locking is involved anywhere.

pub mod brushes;

mod history;
pub use history::{HistoryEntry, HistoryManager, MAX_UNDO_ENTRIES};

mod render_scheduler;
pub use render_scheduler::RenderScheduler;

mod edit_state;
pub use edit_state::*;

pub use retro_engine::{
    CanvasAspect, Color, Document, EngineError, ExportMode, Frame, Palette, PixelBuffer, Position, Preset, Result, RetroCompositor, ScanlineWarnings,
    Settings, Size,
};
