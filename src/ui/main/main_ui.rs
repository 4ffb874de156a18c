use crate::app::KanaPadApp;
use crate::ui::display::text_display;
use crate::ui::keypad::keypad;
use egui::{self, Vec2};

/// Width reserved for the font-size column right of the display
const FONT_CONTROLS_WIDTH: f32 = 72.0;
/// Display height as a share of the window height
const DISPLAY_HEIGHT_RATIO: f32 = 0.28;

impl eframe::App for KanaPadApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keyboard(ctx);
        self.record_window_size(ctx.input(|i| i.viewport().inner_rect));

        crate::ui::main::theme::apply_theme(ctx, &self.settings);

        // Bottom panels first so the central panel gets what is left
        self.render_statusbar(ctx);
        self.render_controls_bar(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::central_panel(&ctx.style()).inner_margin(egui::Margin::same(16)))
            .show(ctx, |ui| {
                let display_height = (ui.available_height() * DISPLAY_HEIGHT_RATIO).max(120.0);
                ui.horizontal(|ui| {
                    let display_width = (ui.available_width() - FONT_CONTROLS_WIDTH).max(80.0);
                    text_display(
                        ui,
                        Vec2::new(display_width, display_height),
                        &self.composer,
                        self.font_size.value(),
                        self.face_to_face,
                    );
                    ui.vertical(|ui| {
                        ui.set_width(FONT_CONTROLS_WIDTH - 8.0);
                        self.render_font_controls(ui);
                    });
                });

                ui.add_space(20.0);

                egui::ScrollArea::vertical().show(ui, |ui| {
                    if let Some(key) = keypad(ui) {
                        self.press_key(key);
                    }
                });
            });
    }

    fn save(&mut self, _storage: &mut dyn eframe::Storage) {
        self.save_settings();
    }
}
