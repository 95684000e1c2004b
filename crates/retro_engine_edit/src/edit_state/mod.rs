//! Edit state module structure
//!
//! - `state.rs` - Struct definition, constructors, getters
//! - `session.rs` - Per gesture tool state (tool, pen size, selected color)
//! - `undo.rs` - Transaction bracketing and undo/redo
//! - `gesture_operations.rs` - Pointer down/move/up and the primitives they drive
//! - `canvas_operations.rs` - Clear, resize, canvas aspect
//! - `document_operations.rs` - Presets, settings, save/load
//! - `render.rs` - Render tick and export

mod canvas_operations;
mod document_operations;
mod gesture_operations;
mod render;
mod session;
mod state;
mod undo;

pub use session::{EditSession, Tool, ERASE_INDEX, PEN_SIZE_STEPS};
pub use state::EditState;
pub use undo::UndoState;
