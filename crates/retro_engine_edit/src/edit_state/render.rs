use retro_engine::{export, ExportMode, Frame, JitterSource, Result, RetroCompositor};

use super::EditState;

impl EditState {
    pub fn request_render(&mut self) {
        self.scheduler.request();
    }

    pub fn needs_render(&self) -> bool {
        self.scheduler.needs_render()
    }

    pub fn frames_rendered(&self) -> u64 {
        self.scheduler.frames_rendered()
    }

    /// Per frame tick: composites once if anything changed since the last tick.
    ///
    /// The frame's scanline warnings are kept and available via [`Self::scanline_warnings`].
    pub fn tick<R: JitterSource>(&mut self, compositor: &mut RetroCompositor<R>) -> Option<Frame> {
        let document = &self.document;
        let frame = self.scheduler.tick(|| compositor.compose_document(document))?;
        self.last_warnings = frame.warnings.clone();
        Some(frame)
    }

    /// Renders the current document for export. Does not touch the render schedule.
    pub fn export<R: JitterSource>(&self, mode: ExportMode, compositor: &mut RetroCompositor<R>) -> Result<image::RgbaImage> {
        export::export_image(&self.document, mode, compositor)
    }
}
