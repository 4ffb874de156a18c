use crate::errors::{PanelError, Result};
use crate::slider::Normalization;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const FONT_SIZE_MIN: f32 = 10.0;
pub const FONT_SIZE_MAX: f32 = 100.0;
pub const DEFAULT_FONT_SIZE: f32 = 16.0;
pub const DEFAULT_FONT_STEP: f32 = 2.0;

const SETTINGS_FILE: &str = "settings.json";
const MIN_WINDOW_SIZE: (f32, f32) = (320.0, 480.0);

/// Whether a window size is worth restoring on the next launch.
pub fn is_usable_window_size((w, h): (f32, f32)) -> bool {
    w.is_finite() && h.is_finite() && w >= MIN_WINDOW_SIZE.0 && h >= MIN_WINDOW_SIZE.1
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Appearance
    pub theme: Theme,

    // Display
    pub font_size: f32,
    /// Amount the font-size buttons change the size by
    pub font_step: f32,
    pub face_to_face: bool,

    // Slider
    pub slider_normalization: Normalization,

    /// Font file with Japanese glyphs. Searched for when unset.
    pub cjk_font_path: Option<PathBuf>,

    // Window state
    pub window_size: (f32, f32),
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::Light,

            font_size: DEFAULT_FONT_SIZE,
            font_step: DEFAULT_FONT_STEP,
            face_to_face: false,

            slider_normalization: Normalization::Span,

            cjk_font_path: None,

            window_size: (720.0, 960.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    Dark,
    Light,
}

impl Settings {
    /// Location of the settings file, if the platform has a config directory.
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "kanapad", "Kanapad")
            .map(|proj_dirs| proj_dirs.config_dir().join(SETTINGS_FILE))
    }

    /// Load settings, falling back to defaults on any problem.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            log::warn!("No config directory available, using default settings");
            return Self::default();
        };
        if !path.exists() {
            log::debug!("No settings file at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                e.log();
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&content)?;
        Ok(settings.sanitized())
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path().ok_or_else(|| PanelError::SettingsError {
            message: "no config directory available".to_string(),
        })?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::debug!("Saved settings to {}", path.display());
        Ok(())
    }

    /// Replace out-of-range values from a hand-edited file.
    pub fn sanitized(mut self) -> Self {
        if self.font_size.is_nan() {
            self.font_size = DEFAULT_FONT_SIZE;
        }
        self.font_size = self.font_size.clamp(FONT_SIZE_MIN, FONT_SIZE_MAX);
        if !self.font_step.is_finite() || self.font_step <= 0.0 {
            self.font_step = DEFAULT_FONT_STEP;
        }
        if !is_usable_window_size(self.window_size) {
            self.window_size = Settings::default().window_size;
        }
        self
    }
}
