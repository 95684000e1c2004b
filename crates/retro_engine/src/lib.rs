#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_lossless,
    clippy::cast_precision_loss,
    clippy::must_use_candidate,
    clippy::struct_excessive_bools,
    clippy::return_self_not_must_use,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]
mod error;
pub use error::*;

mod position;
pub use position::*;

mod palette;
pub use palette::*;

mod pixel_buffer;
pub use pixel_buffer::*;

mod settings;
pub use settings::*;

mod presets;
pub use presets::*;

mod document;
pub use document::*;

pub mod compositor;
pub use compositor::{Frame, JitterSource, RetroCompositor, ScanlineWarnings};

pub mod export;
pub use export::ExportMode;
