#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::cast_sign_loss, clippy::cast_possible_truncation, clippy::cast_possible_wrap, clippy::cast_lossless)]

mod commands;
mod options;

pub use options::*;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, Naming};
use retro_engine::{CanvasAspect, ExportMode};

#[derive(Parser, Debug)]
#[command(version, about = "Headless renderer and document tool for the retro pixel editor", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(about = "List the built-in presets")]
    Presets,

    #[command(about = "Write a blank document")]
    New {
        #[arg(help = "Preset id (defaults to the configured preset)", long)]
        preset: Option<String>,

        #[arg(help = "Canvas aspect: 16:9, 4:3 or 1:1", long, value_parser = parse_aspect)]
        aspect: Option<CanvasAspect>,

        #[arg(help = "Output document path", long, short)]
        out: PathBuf,
    },

    #[command(about = "Render a document to PNG")]
    Render {
        #[arg(help = "Document to render", value_name = "DOCUMENT")]
        path: PathBuf,

        #[arg(help = "Output PNG path (defaults to the document name with .png)", long, short)]
        out: Option<PathBuf>,

        #[arg(help = "Export mode: raw or styled", long, value_parser = parse_mode)]
        mode: Option<ExportMode>,

        #[arg(help = "Seed for a reproducible jitter pattern", long)]
        seed: Option<u64>,
    },

    #[command(about = "Print a document summary and its scanline warnings")]
    Info {
        #[arg(help = "Document to inspect", value_name = "DOCUMENT")]
        path: PathBuf,
    },

    #[command(about = "Show or change the stored defaults")]
    Config {
        #[arg(help = "Default preset id", long)]
        preset: Option<String>,

        #[arg(help = "Default export mode: raw or styled", long, value_parser = parse_mode)]
        mode: Option<ExportMode>,

        #[arg(help = "Default canvas aspect: 16:9, 4:3 or 1:1", long, value_parser = parse_aspect)]
        aspect: Option<CanvasAspect>,

        #[arg(help = "Default render directory, empty to render next to the document", long)]
        export_path: Option<String>,
    },
}

fn parse_aspect(tag: &str) -> Result<CanvasAspect, String> {
    CanvasAspect::from_tag(tag).ok_or_else(|| format!("unknown canvas aspect '{tag}', expected 16:9, 4:3 or 1:1"))
}

fn parse_mode(name: &str) -> Result<ExportMode, String> {
    match name.to_ascii_lowercase().as_str() {
        "raw" => Ok(ExportMode::Raw),
        "styled" => Ok(ExportMode::Styled),
        _ => Err(format!("unknown export mode '{name}', expected raw or styled")),
    }
}

fn get_log_dir() -> Option<PathBuf> {
    let dir = Options::get_config_dir()?;
    if !dir.exists() {
        std::fs::create_dir_all(&dir).ok()?;
    }
    Some(dir)
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    // keep the handle alive, dropping it stops the logger
    let _logger = if let Some(log_dir) = get_log_dir() {
        Logger::try_with_env_or_str("info")?
            .log_to_file(FileSpec::default().directory(&log_dir).basename("retro_paint").suffix("log").suppress_timestamp())
            .rotate(Criterion::Size(64 * 1024), Naming::Numbers, Cleanup::KeepLogFiles(3))
            .duplicate_to_stderr(flexi_logger::Duplicate::Warn)
            .start()
            .ok()
    } else {
        eprintln!("Failed to create log file, logging to stderr");
        Logger::try_with_env_or_str("info")?.start().ok()
    };

    log::info!("Starting retro_paint {}", env!("CARGO_PKG_VERSION"));
    let mut options = Options::load_options();

    match args.command {
        Commands::Presets => commands::list_presets(),
        Commands::New { preset, aspect, out } => {
            let preset = preset.unwrap_or_else(|| options.default_preset.clone());
            commands::new_document(&preset, aspect.unwrap_or(options.canvas_aspect), &out)
        }
        Commands::Render { path, out, mode, seed } => {
            let out = out.unwrap_or_else(|| commands::default_render_path(&path, options.export_path().as_deref()));
            commands::render(&path, &out, mode.unwrap_or(options.export_mode), seed)
        }
        Commands::Info { path } => commands::info(&path),
        Commands::Config {
            preset,
            mode,
            aspect,
            export_path,
        } => {
            let changed = preset.is_some() || mode.is_some() || aspect.is_some() || export_path.is_some();
            if let Some(preset) = preset {
                retro_engine::Preset::find(&preset)?;
                options.default_preset = preset;
            }
            if let Some(mode) = mode {
                options.export_mode = mode;
            }
            if let Some(aspect) = aspect {
                options.canvas_aspect = aspect;
            }
            if let Some(export_path) = export_path {
                options.export_path = export_path;
            }
            if changed {
                options.store_options();
            }
            commands::show_options(&options);
            Ok(())
        }
    }
}
