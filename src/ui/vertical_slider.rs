use crate::slider::{SliderGesture, SliderTrack};
use egui::{self, Color32, CornerRadius, CursorIcon, Pos2, Rect, Sense, Stroke, Vec2, Widget};

const TRACK_WIDTH: f32 = 4.0;
const THUMB_RADIUS: f32 = 9.0;
/// Space above and below the track so the thumb and its outline stay inside
/// the widget at either end.
const THUMB_INSET: f32 = THUMB_RADIUS + 2.0;

/// Vertical slider bound to an `f32` owned by the caller.
///
/// Dragging anywhere on the track writes `track.value_at(pointer_y)` into the
/// binding on every frame the pointer moves. The response is marked changed
/// whenever the bound value moved.
pub struct VerticalSlider<'a> {
    value: &'a mut f32,
    track: SliderTrack,
}

impl<'a> VerticalSlider<'a> {
    pub fn new(value: &'a mut f32, track: SliderTrack) -> Self {
        Self { value, track }
    }
}

impl Widget for VerticalSlider<'_> {
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        let size = Vec2::new(
            THUMB_RADIUS * 2.0 + 4.0,
            self.track.height() + 2.0 * THUMB_INSET,
        );
        let (rect, mut response) = ui.allocate_exact_size(size, Sense::drag());
        let area = track_area(rect);

        // Gesture phase survives between frames in egui's temp storage
        let id = response.id;
        let mut gesture: SliderGesture = ui.data(|d| d.get_temp(id)).unwrap_or_default();

        if response.drag_started() {
            gesture.begin();
        }
        if response.dragged() {
            if let Some(pointer) = response.interact_pointer_pos() {
                if gesture.update(&self.track, pointer.y - area.top(), self.value) {
                    response.mark_changed();
                }
            }
        } else if gesture.is_dragging() {
            // Released or cancelled
            gesture.end();
        }

        ui.data_mut(|d| d.insert_temp(id, gesture));

        if ui.is_rect_visible(rect) {
            paint_slider(ui, area, &self.track, *self.value, &response);
        }

        response.on_hover_cursor(CursorIcon::ResizeVertical)
    }
}

/// The span the thumb centre travels: the widget minus the end insets.
fn track_area(rect: Rect) -> Rect {
    rect.shrink2(Vec2::new(0.0, THUMB_INSET))
}

fn thumb_center(area: Rect, track: &SliderTrack, value: f32) -> Pos2 {
    Pos2::new(area.center().x, area.center().y + track.thumb_offset(value))
}

fn paint_slider(
    ui: &egui::Ui,
    area: Rect,
    track: &SliderTrack,
    value: f32,
    response: &egui::Response,
) {
    let visuals = ui.style().interact(response);
    let painter = ui.painter();

    let track_rect = Rect::from_center_size(area.center(), Vec2::new(TRACK_WIDTH, area.height()));
    painter.rect_filled(track_rect, CornerRadius::same(2), ui.visuals().extreme_bg_color);

    let thumb = thumb_center(area, track, value);

    // Filled part runs from the thumb down to the bottom of the track
    let filled = Rect::from_min_max(
        Pos2::new(track_rect.left(), thumb.y.min(track_rect.bottom())),
        track_rect.right_bottom(),
    );
    painter.rect_filled(filled, CornerRadius::same(2), ui.visuals().selection.bg_fill);

    painter.circle(
        thumb,
        THUMB_RADIUS,
        Color32::WHITE,
        Stroke::new(visuals.fg_stroke.width.max(1.5), visuals.fg_stroke.color),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slider::{Normalization, SliderRange};
    use egui::{Event, Modifiers, PointerButton, RawInput};

    fn font_track() -> SliderTrack {
        SliderTrack::new(100.0, SliderRange::new(10.0, 100.0).unwrap())
            .unwrap()
            .with_step(1.0)
            .unwrap()
    }

    fn primary(pos: Pos2, pressed: bool) -> Event {
        Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::NONE,
        }
    }

    /// Run one frame with the slider in a central panel.
    fn run_frame(ctx: &egui::Context, events: Vec<Event>, value: &mut f32) -> egui::Response {
        let input = RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, Vec2::splat(400.0))),
            events,
            ..Default::default()
        };
        let mut response = None;
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                response = Some(ui.add(VerticalSlider::new(&mut *value, font_track())));
            });
        });
        response.unwrap()
    }

    #[test]
    fn test_drag_overwrites_binding_each_frame() {
        let ctx = egui::Context::default();
        let mut value = 16.0;

        // Lay the widget out once so the press lands on it
        let area = track_area(run_frame(&ctx, vec![], &mut value).rect);
        let at = |dy: f32| Pos2::new(area.center().x, area.top() + dy);

        let response = run_frame(
            &ctx,
            vec![Event::PointerMoved(at(50.0)), primary(at(50.0), true)],
            &mut value,
        );
        assert_eq!(value, 55.0);
        assert!(response.changed());

        for (dy, expected, changed) in [
            (40.0, 64.0, true),
            (20.0, 82.0, true),
            (0.0, 100.0, true),
            // Above the track: clamped, nothing new to report
            (-30.0, 100.0, false),
            (250.0, 10.0, true),
        ] {
            let response = run_frame(&ctx, vec![Event::PointerMoved(at(dy))], &mut value);
            assert_eq!(value, expected, "pointer at {dy}");
            assert_eq!(response.changed(), changed, "pointer at {dy}");
        }

        run_frame(&ctx, vec![primary(at(250.0), false)], &mut value);
        let response = run_frame(&ctx, vec![Event::PointerMoved(at(20.0))], &mut value);
        assert_eq!(value, 10.0);
        assert!(!response.changed());

        let gesture: SliderGesture = ctx.data(|d| d.get_temp(response.id)).unwrap();
        assert!(!gesture.is_dragging());
    }

    #[test]
    fn test_hover_without_press_leaves_value() {
        let ctx = egui::Context::default();
        let mut value = 16.0;
        let area = track_area(run_frame(&ctx, vec![], &mut value).rect);

        for dy in [0.0, 50.0, 100.0] {
            let pos = Pos2::new(area.center().x, area.top() + dy);
            let response = run_frame(&ctx, vec![Event::PointerMoved(pos)], &mut value);
            assert!(!response.changed());
        }
        assert_eq!(value, 16.0);
    }

    #[test]
    fn test_thumb_stays_inside_widget() {
        let rect = Rect::from_min_size(Pos2::new(30.0, 40.0), Vec2::new(22.0, 100.0 + 2.0 * THUMB_INSET));
        let area = track_area(rect);
        for normalization in [Normalization::Span, Normalization::UpperBound] {
            let track = font_track().with_normalization(normalization);
            for value in [10.0, 55.0, 100.0] {
                let thumb = thumb_center(area, &track, value);
                let outline = Rect::from_center_size(thumb, Vec2::splat(2.0 * THUMB_RADIUS + 2.0));
                assert!(rect.contains_rect(outline), "{normalization:?} value={value}");
            }
        }

        let track = font_track();
        assert_eq!(thumb_center(area, &track, 100.0).y, area.top());
        assert_eq!(thumb_center(area, &track, 10.0).y, area.bottom());
    }
}
