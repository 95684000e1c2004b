//! Preset, settings and save file operations
//!
//! None of these are part of undo history: settings and palette changes only request a
//! render, and anything that swaps the pixel buffer for unrelated content clears history.

use retro_engine::{CanvasAspect, Document, Preset, Result, Settings};

use super::EditState;

impl EditState {
    /// Replaces palette and settings with those of preset `id`.
    ///
    /// With `keep_pixels` the canvas stays as it is (menu switch), except that cells whose index
    /// is not part of the new palette are moved to the nearest new color; if any were, history
    /// is dropped because its snapshots still hold those indices. Without `keep_pixels` every
    /// cell is reset to index 0 and history is dropped, since the old strokes belong to a
    /// different palette. Unknown ids fail and leave the state untouched.
    pub fn apply_preset(&mut self, id: &str, keep_pixels: bool) -> Result<()> {
        let preset = Preset::find(id)?;
        let palette = preset.palette()?;

        self.session.reset_gesture();
        self.history.end();
        let old_palette = std::mem::replace(&mut self.document.palette, palette);
        self.document.settings = preset.settings();
        self.document.preset_id = Some(preset.id.to_string());
        self.active_preset = preset.id.to_string();
        if keep_pixels {
            let palette = &self.document.palette;
            let remapped = self.document.pixels.remap(|index| {
                if palette.contains_index(index) {
                    index
                } else {
                    palette.nearest(old_palette.get_color(index))
                }
            });
            if remapped > 0 {
                log::info!("Moved {remapped} cells outside the '{}' palette to the nearest color", preset.id);
                self.history.clear();
            }
        } else {
            self.document.pixels.fill(0);
            self.history.clear();
        }
        self.clamp_selected_color();
        self.scheduler.request();
        log::info!("Applied preset '{}' (keep pixels: {keep_pixels})", preset.id);
        Ok(())
    }

    /// Starts over with a blank canvas of `aspect` using preset `id`. History is cleared.
    pub fn new_document(&mut self, id: &str, aspect: CanvasAspect) -> Result<()> {
        let size = aspect.logical_size();
        let mut document = Document::from_preset(id, size.width, size.height)?;
        document.canvas_aspect = Some(aspect);
        self.replace_document(document);
        Ok(())
    }

    /// Mutates the settings through `update`, then forces them back into range.
    pub fn update_settings(&mut self, update: impl FnOnce(&mut Settings)) {
        update(&mut self.document.settings);
        self.document.settings.sanitize();
        self.scheduler.request();
    }

    /// Replaces the whole settings block.
    pub fn set_settings(&mut self, settings: Settings) {
        self.update_settings(|current| *current = settings);
    }

    /// Serializes the current document, tagged with the active preset.
    pub fn save_document(&self) -> Result<String> {
        let mut document = self.document.clone();
        document.preset_id = Some(self.active_preset.clone());
        document.to_json()
    }

    /// Loads a save file.
    ///
    /// Either the whole document is replaced and history is cleared, or (on any validation
    /// failure) the error is returned and nothing changes. A file without `presetId` keeps
    /// the active preset.
    pub fn load_document(&mut self, json: &str) -> Result<()> {
        let mut document = match Document::from_json(json) {
            Ok(document) => document,
            Err(err) => {
                log::warn!("Failed to load document: {err}");
                return Err(err);
            }
        };
        if document.preset_id.is_none() {
            document.preset_id = Some(self.active_preset.clone());
        }
        self.replace_document(document);
        Ok(())
    }

    fn replace_document(&mut self, document: Document) {
        log::info!(
            "Loaded {}x{} document, {} colors",
            document.pixels.width(),
            document.pixels.height(),
            document.palette.len()
        );
        if let Some(id) = &document.preset_id {
            self.active_preset.clone_from(id);
        }
        self.document = document;
        self.history.clear();
        self.session.reset_gesture();
        self.clamp_selected_color();
        self.scheduler.request();
    }
}
