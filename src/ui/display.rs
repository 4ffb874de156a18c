use super::common::{DISPLAY_BORDER, DISPLAY_FILL, PLACEHOLDER_TEXT};
use crate::composer::Composer;
use egui::epaint::TextShape;
use egui::{self, Color32, CornerRadius, FontId, Pos2, Rect, Sense, Stroke, StrokeKind, Vec2};
use std::f32::consts::PI;

const CORNER_RADIUS: u8 = 25;
const BORDER_WIDTH: f32 = 2.0;
const TEXT_PADDING: f32 = 16.0;

/// Rounded text display. In face-to-face mode the upper half carries a copy
/// rotated by 180 degrees for the reader on the other side.
pub fn text_display(
    ui: &mut egui::Ui,
    size: Vec2,
    composer: &Composer,
    font_size: f32,
    face_to_face: bool,
) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(size, Sense::hover());
    if !ui.is_rect_visible(rect) {
        return response;
    }

    let painter = ui.painter();
    painter.rect(
        rect,
        CornerRadius::same(CORNER_RADIUS),
        DISPLAY_FILL,
        Stroke::new(BORDER_WIDTH, DISPLAY_BORDER),
        StrokeKind::Inside,
    );

    let color = if composer.is_empty() {
        PLACEHOLDER_TEXT
    } else {
        Color32::BLACK
    };
    let inner = rect.shrink(TEXT_PADDING);

    if face_to_face {
        let (upper, lower) = split_halves(inner);
        painter.hline(
            inner.x_range(),
            rect.center().y,
            Stroke::new(1.0, Color32::from_gray(200)),
        );
        paint_text(ui, upper, composer.display_text(), font_size, color, true);
        paint_text(ui, lower, composer.display_text(), font_size, color, false);
    } else {
        paint_text(ui, inner, composer.display_text(), font_size, color, false);
    }

    response
}

/// Upper and lower halves of `rect` with a small gap between them.
pub fn split_halves(rect: Rect) -> (Rect, Rect) {
    let gap = 4.0;
    let mid = rect.center().y;
    let upper = Rect::from_min_max(rect.min, Pos2::new(rect.max.x, mid - gap));
    let lower = Rect::from_min_max(Pos2::new(rect.min.x, mid + gap), rect.max);
    (upper, lower)
}

/// Anchor for a galley of `size` centred in `area`. Rotation happens around
/// the anchor, so a flipped galley is anchored at its far corner.
pub fn text_anchor(area: Rect, size: Vec2, flipped: bool) -> Pos2 {
    if flipped {
        area.center() + size / 2.0
    } else {
        area.center() - size / 2.0
    }
}

fn paint_text(
    ui: &egui::Ui,
    area: Rect,
    text: &str,
    font_size: f32,
    color: Color32,
    flipped: bool,
) {
    let painter = ui.painter().with_clip_rect(area);
    let galley = painter.layout(
        text.to_owned(),
        FontId::proportional(font_size),
        color,
        area.width().max(1.0),
    );
    let anchor = text_anchor(area, galley.size(), flipped);
    let mut shape = TextShape::new(anchor, galley, color);
    if flipped {
        shape = shape.with_angle(PI);
    }
    painter.add(shape);
}
