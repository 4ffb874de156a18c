use crate::composer::{font_size_range, Composer, FontSize};
use crate::errors::Result;
use crate::settings::Settings;
use crate::slider::SliderTrack;

use eframe::egui;
use std::path::PathBuf;
use std::time::Instant;

/// Track height of the font-size slider, in points
pub const FONT_SLIDER_HEIGHT: f32 = 100.0;
/// Dragging the font-size slider moves in whole points
pub const FONT_SLIDER_STEP: f32 = 1.0;

pub struct KanaPadApp {
    // Settings
    pub settings: Settings,

    // Entry state
    pub composer: Composer,
    pub font_size: FontSize,
    pub face_to_face: bool,

    // Inner size of the window as last seen
    pub window_size: (f32, f32),

    // Font-size slider configuration
    pub slider_track: SliderTrack,

    // CJK font in use, if one was found
    pub font_path: Option<PathBuf>,

    // Status message
    pub status_message: Option<(String, Instant)>,
}

impl KanaPadApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings) -> Result<Self> {
        configure_style(&cc.egui_ctx);

        let mut app = Self::with_settings(settings)?;
        match crate::fonts::install_cjk_font(&cc.egui_ctx, app.settings.cjk_font_path.as_deref()) {
            Ok(path) => app.font_path = Some(path),
            Err(e) => {
                e.log();
                app.set_status_message(e.to_string());
            }
        }
        Ok(app)
    }

    /// Application state without a UI context.
    pub fn with_settings(settings: Settings) -> Result<Self> {
        let range = font_size_range()?;
        let slider_track = SliderTrack::new(FONT_SLIDER_HEIGHT, range)?
            .with_normalization(settings.slider_normalization)
            .with_step(FONT_SLIDER_STEP)?;

        Ok(Self {
            font_size: FontSize::new(settings.font_size, range),
            face_to_face: settings.face_to_face,
            window_size: settings.window_size,
            composer: Composer::new(),
            slider_track,
            font_path: None,
            status_message: None,
            settings,
        })
    }
}

fn configure_style(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    style.visuals.window_shadow = egui::epaint::Shadow::NONE;
    style.visuals.popup_shadow = egui::epaint::Shadow::NONE;
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(8.0, 4.0);
    ctx.set_style(style);
}
