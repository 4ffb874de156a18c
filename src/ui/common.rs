use egui::{self, Color32, CornerRadius, RichText, Stroke, Vec2};

// Common color constants used across panels
pub const ACTION_BLUE: Color32 = Color32::from_rgb(0, 122, 255);
pub const DISPLAY_FILL: Color32 = Color32::WHITE;
pub const DISPLAY_BORDER: Color32 = Color32::BLACK;
pub const PLACEHOLDER_TEXT: Color32 = Color32::from_rgb(160, 160, 165);
pub const STATUS_TEXT: Color32 = Color32::from_rgb(100, 200, 100);

/// Square icon button with a solid fill, used by the bottom controls bar
pub fn icon_button(ui: &mut egui::Ui, icon: &str, tooltip: &str, active: bool) -> egui::Response {
    let fill = if active {
        Color32::from_rgb(255, 149, 0)
    } else {
        ACTION_BLUE
    };
    ui.add(
        egui::Button::new(RichText::new(icon).size(28.0).color(Color32::WHITE))
            .fill(fill)
            .stroke(Stroke::NONE)
            .corner_radius(CornerRadius::same(8))
            .min_size(Vec2::new(66.0, 66.0)),
    )
    .on_hover_text(tooltip)
}

/// Two-line bold text button ("文字" over "大"/"小")
pub fn text_button(ui: &mut egui::Ui, text: &str, tooltip: &str) -> egui::Response {
    ui.add(
        egui::Button::new(RichText::new(text).size(22.0).strong())
            .fill(Color32::TRANSPARENT)
            .stroke(Stroke::NONE)
            .corner_radius(CornerRadius::same(8)),
    )
    .on_hover_text(tooltip)
}
