use crate::settings::{Settings, Theme};
use egui::Color32;

pub fn apply_theme(ctx: &egui::Context, settings: &Settings) {
    let visuals = match settings.theme {
        Theme::Light => {
            let mut visuals = egui::Visuals::light();
            visuals.panel_fill = Color32::from_rgb(242, 242, 247);
            visuals.selection.bg_fill = Color32::from_rgb(0, 122, 255);
            visuals
        }
        Theme::Dark => {
            let mut visuals = egui::Visuals::dark();
            visuals.panel_fill = Color32::from_rgb(28, 28, 30);
            visuals.selection.bg_fill = Color32::from_rgb(10, 132, 255);
            visuals
        }
    };
    ctx.set_visuals(visuals);
}
