use super::common::{icon_button, text_button};
use super::VerticalSlider;
use crate::app::KanaPadApp;
use egui::{self, Align, Layout, RichText};

impl KanaPadApp {
    /// "文字 大", the font-size slider and "文字 小", stacked vertically.
    pub(crate) fn render_font_controls(&mut self, ui: &mut egui::Ui) {
        let mut increase = false;
        let mut decrease = false;

        ui.with_layout(Layout::top_down(Align::Center), |ui| {
            if text_button(ui, "文字\n大", "Larger text (+)").clicked() {
                increase = true;
            }

            ui.add_space(8.0);
            let track = self.slider_track;
            let response = ui.add(VerticalSlider::new(self.font_size.binding(), track));
            if response.changed() {
                self.font_size_dragged();
            }
            ui.label(
                RichText::new(format!("{:.0}", self.font_size.value()))
                    .size(11.0)
                    .monospace(),
            );
            ui.add_space(8.0);

            if text_button(ui, "文字\n小", "Smaller text (-)").clicked() {
                decrease = true;
            }
        });

        if increase {
            self.increase_font_size();
        }
        if decrease {
            self.decrease_font_size();
        }
    }

    /// Play, clear, copy and face-to-face buttons.
    pub(crate) fn render_controls_bar(&mut self, ctx: &egui::Context) {
        let mut play = false;
        let mut clear = false;
        let mut copy = false;
        let mut flip = false;
        let face_to_face = self.face_to_face;

        egui::TopBottomPanel::bottom("controls_bar")
            .frame(egui::Frame::NONE.inner_margin(egui::Margin::symmetric(16, 12)))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = 12.0;
                    play = icon_button(ui, "▶", "Play", false).clicked();
                    clear = icon_button(ui, "✖", "Clear text (Esc)", false).clicked();
                    copy = icon_button(ui, "📋", "Copy text (Ctrl+C)", false).clicked();
                    flip = icon_button(ui, "🔄", "Face-to-face display (F2)", face_to_face)
                        .clicked();
                });
            });

        if play {
            self.request_play();
        }
        if clear {
            self.clear_text();
        }
        if copy {
            self.copy_or_report();
        }
        if flip {
            self.toggle_face_to_face();
        }
    }
}
