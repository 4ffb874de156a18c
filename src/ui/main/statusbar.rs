use crate::ui::common::STATUS_TEXT;
use crate::app::KanaPadApp;
use egui::{self, Color32, Margin, RichText};

/// Seconds a status message stays visible
const STATUS_TIMEOUT_SECS: u64 = 3;

impl KanaPadApp {
    pub(crate) fn render_statusbar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("statusbar")
            .frame(egui::Frame::NONE.inner_margin(Margin::symmetric(12, 4)))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(format!("{} chars", self.composer.char_count()))
                            .color(Color32::GRAY)
                            .size(11.0),
                    );
                    ui.label(
                        RichText::new(format!("{:.0} pt", self.font_size.value()))
                            .color(Color32::GRAY)
                            .size(11.0),
                    );
                    if self.face_to_face {
                        ui.label(
                            RichText::new("face-to-face")
                                .color(Color32::from_rgb(255, 149, 0))
                                .size(11.0),
                        );
                    }
                    if self.font_path.is_none() {
                        ui.label(
                            RichText::new("[no CJK font]")
                                .color(Color32::from_rgb(255, 100, 100))
                                .size(11.0),
                        );
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if let Some((msg, time)) = &self.status_message {
                            if time.elapsed().as_secs() < STATUS_TIMEOUT_SECS {
                                ui.label(RichText::new(msg).color(STATUS_TEXT).size(11.0));
                            }
                        }
                    });
                });
            });

        // Keep repainting until the message expires
        if let Some((_, time)) = &self.status_message {
            if time.elapsed().as_secs() < STATUS_TIMEOUT_SECS {
                ctx.request_repaint_after(std::time::Duration::from_millis(250));
            } else {
                self.status_message = None;
            }
        }
    }
}
