use crate::kana::{column_keys, digit_keys, Key};
use crate::layout::{column_color, display_columns, key_font_size, key_size, DIGIT_KEY_COLOR, KEY_SPACING};
use egui::{self, Color32, CornerRadius, RichText, Vec2};

/// Digit row above the kana grid. Returns the key pressed this frame.
pub fn keypad(ui: &mut egui::Ui) -> Option<Key> {
    let size = key_size(ui.available_width());
    let font_size = key_font_size(size);
    let mut pressed = None;

    ui.spacing_mut().item_spacing = Vec2::splat(KEY_SPACING);

    ui.horizontal(|ui| {
        for key in digit_keys() {
            if key_button(ui, key, size, font_size, DIGIT_KEY_COLOR) {
                pressed = Some(key);
            }
        }
    });

    ui.add_space(KEY_SPACING);

    ui.horizontal_top(|ui| {
        for column in display_columns() {
            ui.vertical(|ui| {
                for key in column_keys(column) {
                    if key_button(ui, key, size, font_size, column_color(column)) {
                        pressed = Some(key);
                    }
                }
            });
        }
    });

    pressed
}

fn key_button(ui: &mut egui::Ui, key: Key, size: Vec2, font_size: f32, fill: Color32) -> bool {
    let button = egui::Button::new(
        RichText::new(key.label())
            .size(font_size)
            .strong()
            .color(Color32::WHITE),
    )
    .fill(fill)
    .corner_radius(CornerRadius::same(8));

    // Gap keys keep their slot but do not react
    ui.add_enabled_ui(!key.is_gap(), |ui| ui.add_sized(size, button))
        .inner
        .clicked()
}
