use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PanelError {
    #[error("Invalid slider range: lower bound {lower} must be below upper bound {upper}")]
    InvalidRange { lower: f32, upper: f32 },

    #[error("Invalid track height: {height} (must be a positive number of pixels)")]
    InvalidTrackHeight { height: f32 },

    #[error("Invalid slider step: {step}")]
    InvalidStep { step: f32 },

    #[error("No CJK font found (searched {searched} locations)")]
    FontNotFound { searched: usize },

    #[error("Failed to load font '{path}': {source}")]
    FontLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Not a TrueType/OpenType font: {path}")]
    InvalidFont { path: PathBuf },

    #[error("Settings error: {message}")]
    SettingsError { message: String },

    #[error("Clipboard error: {message}")]
    ClipboardError { message: String },

    #[error("IO error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("JSON parsing error: {source}")]
    JsonError {
        #[from]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, PanelError>;

impl PanelError {
    /// Returns true if the user can do something about this error at runtime
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            PanelError::FontNotFound { .. }
                | PanelError::FontLoad { .. }
                | PanelError::InvalidFont { .. }
                | PanelError::ClipboardError { .. }
                | PanelError::IoError { .. }
                | PanelError::SettingsError { .. }
        )
    }

    /// Returns a user-friendly error message with recovery suggestions
    pub fn user_message(&self) -> String {
        let base_message = self.to_string();
        let suggestion = match self {
            PanelError::InvalidRange { .. }
            | PanelError::InvalidTrackHeight { .. }
            | PanelError::InvalidStep { .. } => "This is a configuration bug in the control layout.",
            PanelError::FontNotFound { .. } => {
                "Install a Japanese font (e.g. Noto Sans CJK) or set `cjk_font_path` in settings.json."
            }
            PanelError::FontLoad { .. } => "Check that the font file exists and is readable.",
            PanelError::InvalidFont { .. } => "Point `cjk_font_path` at a .ttf, .otf or .ttc file.",
            PanelError::ClipboardError { .. } => "The system clipboard is unavailable. Try again.",
            PanelError::SettingsError { .. } | PanelError::JsonError { .. } => {
                "Settings were reset to defaults. Delete settings.json if the problem persists."
            }
            PanelError::IoError { .. } => "File system error occurred. Check disk space and permissions.",
        };

        format!("{}\n\n{}", base_message, suggestion)
    }

    /// Returns an error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            PanelError::InvalidRange { .. } => "INVALID_RANGE",
            PanelError::InvalidTrackHeight { .. } => "INVALID_TRACK_HEIGHT",
            PanelError::InvalidStep { .. } => "INVALID_STEP",
            PanelError::FontNotFound { .. } => "FONT_NOT_FOUND",
            PanelError::FontLoad { .. } => "FONT_LOAD_ERROR",
            PanelError::InvalidFont { .. } => "INVALID_FONT",
            PanelError::SettingsError { .. } => "SETTINGS_ERROR",
            PanelError::ClipboardError { .. } => "CLIPBOARD_ERROR",
            PanelError::IoError { .. } => "IO_ERROR",
            PanelError::JsonError { .. } => "JSON_ERROR",
        }
    }

    /// Logs the error at a level matching its severity
    pub fn log(&self) {
        if self.is_recoverable() {
            log::warn!("[{}] {}", self.error_code(), self);
        } else {
            log::error!("[{}] {}", self.error_code(), self);
        }
    }
}
