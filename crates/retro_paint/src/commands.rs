use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use retro_engine::{export::save_png, CanvasAspect, ExportMode, Preset, RetroCompositor};
use retro_engine_edit::EditState;

use crate::Options;

pub fn list_presets() -> anyhow::Result<()> {
    for preset in Preset::all() {
        let palette = preset.palette()?;
        println!("{:<6} {} ({} colors)", preset.id, preset.label, palette.len());
    }
    Ok(())
}

pub fn new_document(preset: &str, aspect: CanvasAspect, out: &Path) -> anyhow::Result<()> {
    let mut state = EditState::new();
    state.new_document(preset, aspect)?;
    let json = state.save_document()?;
    fs::write(out, json).with_context(|| format!("writing {}", out.display()))?;
    let size = aspect.logical_size();
    println!("Wrote {}x{} '{}' document to {}", size.width, size.height, state.active_preset(), out.display());
    Ok(())
}

/// `<dir>/<document stem>.png`, where `dir` is `export_dir` or the document's own directory.
pub fn default_render_path(document: &Path, export_dir: Option<&Path>) -> PathBuf {
    let file_name = document.with_extension("png");
    match (export_dir, file_name.file_name()) {
        (Some(dir), Some(name)) => dir.join(name),
        _ => file_name,
    }
}

fn load(path: &Path) -> anyhow::Result<EditState> {
    let txt = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let mut state = EditState::new();
    state.load_document(&txt).with_context(|| format!("loading {}", path.display()))?;
    Ok(state)
}

fn compositor(seed: Option<u64>) -> RetroCompositor {
    match seed {
        Some(seed) => RetroCompositor::with_seed(seed),
        None => RetroCompositor::new(),
    }
}

pub fn render(path: &Path, out: &Path, mode: ExportMode, seed: Option<u64>) -> anyhow::Result<()> {
    let mut state = load(path)?;
    let mut compositor = compositor(seed);

    if let Some(frame) = state.tick(&mut compositor) {
        if !frame.warnings.is_empty() {
            log::warn!("{}", frame.warnings.message());
        }
    }

    let img = state.export(mode, &mut compositor)?;
    save_png(&img, out)?;
    println!("Rendered {} ({}, {}x{}) to {}", path.display(), mode.name(), img.width(), img.height(), out.display());
    Ok(())
}

pub fn info(path: &Path) -> anyhow::Result<()> {
    let mut state = load(path)?;
    let mut compositor = RetroCompositor::with_seed(0);
    let frame = state.tick(&mut compositor);

    let document = state.document();
    let settings = state.settings();
    println!("Document:   {}", path.display());
    println!("Preset:     {}", state.active_preset());
    println!("Canvas:     {}x{}", document.pixels.width(), document.pixels.height());
    if let Some(aspect) = document.canvas_aspect {
        println!("Aspect:     {}", aspect.tag());
    }
    println!("Palette:    {} colors", document.palette.len());
    println!("Scale:      {}x{}", settings.scale_x, settings.scale_y);
    println!(
        "Limit:      {} colors per line{}",
        settings.per_scanline_color_limit,
        if settings.auto_clamp_colors { " (auto clamp)" } else { "" }
    );
    if let Some(frame) = frame {
        println!("Display:    {}x{}", frame.size.width, frame.size.height);
    }
    let warnings = state.scanline_warnings();
    if warnings.is_empty() {
        println!("Warnings:   none");
    } else {
        println!("Warnings:   {}", warnings.message());
    }
    Ok(())
}

pub fn show_options(options: &Options) {
    println!("Preset:     {}", options.default_preset);
    println!("Export:     {}", options.export_mode.name());
    println!("Aspect:     {}", options.canvas_aspect.tag());
    match options.export_path() {
        Some(dir) => println!("Renders to: {}", dir.display()),
        None => println!("Renders to: next to the document"),
    }
}
