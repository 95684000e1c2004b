use std::{fs, path::PathBuf};

use retro_engine::{CanvasAspect, ExportMode, DEFAULT_PRESET};
use serde::{Deserialize, Serialize};

const APP_NAME: &str = "retro_paint";
const OPTIONS_FILE: &str = "options.toml";

/// User defaults, stored as `options.toml` in the configuration directory.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Options {
    /// Preset used by `new` when none is given.
    #[serde(default = "default_preset")]
    pub default_preset: String,

    #[serde(default)]
    pub export_mode: ExportMode,

    #[serde(default = "default_aspect")]
    pub canvas_aspect: CanvasAspect,

    /// Output directory for renders without an explicit `--out`. Empty means next to the document.
    #[serde(default)]
    pub export_path: String,
}

fn default_preset() -> String {
    DEFAULT_PRESET.to_string()
}

fn default_aspect() -> CanvasAspect {
    CanvasAspect::Standard
}

impl Default for Options {
    fn default() -> Self {
        Self {
            default_preset: default_preset(),
            export_mode: ExportMode::default(),
            canvas_aspect: default_aspect(),
            export_path: String::new(),
        }
    }
}

impl Options {
    pub fn load_options() -> Self {
        if let Some(proj_dirs) = directories::ProjectDirs::from("com", "GitHub", APP_NAME) {
            if !proj_dirs.config_dir().exists() && fs::create_dir_all(proj_dirs.config_dir()).is_err() {
                log::error!("Can't create configuration directory {:?}", proj_dirs.config_dir());
                return Self::default();
            }
            let options_file = proj_dirs.config_dir().join(OPTIONS_FILE);
            if options_file.exists() {
                match fs::read_to_string(options_file) {
                    Ok(txt) => match Self::from_toml(&txt) {
                        Ok(result) => return result,
                        Err(err) => log::error!("Error parsing options file: {}", err),
                    },
                    Err(err) => log::error!("Error reading options file: {}", err),
                }
            }
        }
        Self::default()
    }

    pub fn store_options(&self) {
        if let Some(proj_dirs) = directories::ProjectDirs::from("com", "GitHub", APP_NAME) {
            let file_name = proj_dirs.config_dir().join(OPTIONS_FILE);
            match toml::to_string(self) {
                Ok(text) => {
                    if let Err(err) = fs::write(file_name, text) {
                        log::error!("Error writing options file: {}", err);
                    }
                }
                Err(err) => log::error!("Error writing options file: {}", err),
            }
        }
    }

    pub fn from_toml(txt: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(txt)
    }

    pub fn get_config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "GitHub", APP_NAME).map(|proj_dirs| proj_dirs.config_dir().to_path_buf())
    }

    pub fn export_path(&self) -> Option<PathBuf> {
        if self.export_path.is_empty() {
            None
        } else {
            Some(PathBuf::from(&self.export_path))
        }
    }
}
