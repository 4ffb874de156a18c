use super::KanaPadApp;
use crate::errors::{PanelError, Result};
use crate::kana::Key;
use crate::settings::is_usable_window_size;

use std::time::Instant;

impl KanaPadApp {
    pub fn press_key(&mut self, key: Key) {
        if self.composer.push_key(key) {
            log::debug!("key {:?} -> {} chars", key.text, self.composer.char_count());
        }
    }

    pub fn clear_text(&mut self) {
        if !self.composer.is_empty() {
            log::debug!("cleared {} chars", self.composer.char_count());
        }
        self.composer.clear();
    }

    pub fn increase_font_size(&mut self) {
        self.font_size.increase(self.settings.font_step);
    }

    pub fn decrease_font_size(&mut self) {
        self.font_size.decrease(self.settings.font_step);
    }

    /// Called after the slider widget wrote to the binding.
    pub fn font_size_dragged(&mut self) {
        self.font_size.settle();
    }

    pub fn toggle_face_to_face(&mut self) {
        self.face_to_face = !self.face_to_face;
        log::info!("face-to-face display {}", if self.face_to_face { "on" } else { "off" });
    }

    /// There is no playback backend; the request is only logged.
    pub fn request_play(&mut self) {
        log::info!("play requested for {:?}", self.composer.text());
        self.set_status_message("Playback is not available".to_string());
    }

    pub fn copy_to_clipboard(&mut self) -> Result<()> {
        if self.composer.is_empty() {
            self.set_status_message("Nothing to copy".to_string());
            return Ok(());
        }
        let mut clipboard = arboard::Clipboard::new().map_err(|e| PanelError::ClipboardError {
            message: e.to_string(),
        })?;
        clipboard
            .set_text(self.composer.text().to_owned())
            .map_err(|e| PanelError::ClipboardError {
                message: e.to_string(),
            })?;
        self.set_status_message(format!("Copied {} characters", self.composer.char_count()));
        Ok(())
    }

    /// Copy and report failures in the status line.
    pub fn copy_or_report(&mut self) {
        if let Err(e) = self.copy_to_clipboard() {
            e.log();
            self.set_status_message(e.to_string());
        }
    }

    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some((message, Instant::now()));
    }

    /// Track the live window size. Minimized or collapsed windows are
    /// ignored so the next launch does not open tiny.
    pub fn record_window_size(&mut self, inner: Option<egui::Rect>) {
        if let Some(rect) = inner {
            let size = (rect.width(), rect.height());
            if is_usable_window_size(size) {
                self.window_size = size;
            }
        }
    }

    /// Fold session state worth keeping back into the settings. Entered text
    /// is never stored.
    pub fn sync_settings(&mut self) {
        self.settings.font_size = self.font_size.value();
        self.settings.face_to_face = self.face_to_face;
        self.settings.window_size = self.window_size;
    }

    pub fn save_settings(&mut self) {
        self.sync_settings();
        if let Err(e) = self.settings.save() {
            e.log();
        }
    }
}
