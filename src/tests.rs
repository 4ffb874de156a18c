use crate::app::{KanaPadApp, FONT_SLIDER_HEIGHT};
use crate::errors::PanelError;
use crate::kana::{column_keys, digit_keys, Key};
use crate::settings::{Settings, FONT_SIZE_MAX, FONT_SIZE_MIN};
use crate::slider::{Normalization, SliderGesture};

fn app() -> KanaPadApp {
    KanaPadApp::with_settings(Settings::default()).unwrap()
}

#[test]
fn test_typing_a_word() {
    let mut app = app();
    let keys: Vec<Key> = column_keys(1).chain(column_keys(9)).collect();
    // こ, ん
    app.press_key(keys[4]);
    app.press_key(keys[9]);
    app.press_key(digit_keys().next().unwrap());
    assert_eq!(app.composer.text(), "こん1");

    app.clear_text();
    assert!(app.composer.is_empty());
}

#[test]
fn test_font_buttons_use_configured_step() {
    let mut app = KanaPadApp::with_settings(Settings {
        font_step: 5.0,
        ..Settings::default()
    })
    .unwrap();
    app.increase_font_size();
    assert_eq!(app.font_size.value(), 21.0);
    app.decrease_font_size();
    app.decrease_font_size();
    assert_eq!(app.font_size.value(), 11.0);
    app.decrease_font_size();
    assert_eq!(app.font_size.value(), FONT_SIZE_MIN);
}

#[test]
fn test_slider_and_buttons_share_the_value() {
    let mut app = app();
    let track = app.slider_track;
    let mut gesture = SliderGesture::default();

    gesture.begin();
    // Top of the track is the largest size
    gesture.update(&track, 0.0, app.font_size.binding());
    gesture.end();
    app.font_size_dragged();
    assert_eq!(app.font_size.value(), FONT_SIZE_MAX);

    app.decrease_font_size();
    assert_eq!(app.font_size.value(), FONT_SIZE_MAX - 2.0);

    // Dragging far below the track bottoms out
    gesture.begin();
    gesture.update(&track, FONT_SLIDER_HEIGHT * 3.0, app.font_size.binding());
    gesture.end();
    assert_eq!(app.font_size.value(), FONT_SIZE_MIN);
}

#[test]
fn test_slider_uses_configured_normalization() {
    let app = KanaPadApp::with_settings(Settings {
        slider_normalization: Normalization::UpperBound,
        ..Settings::default()
    })
    .unwrap();
    assert_eq!(app.slider_track.normalization(), Normalization::UpperBound);
    // 20 is drawn at 20% of the track height, not 11%
    let offset = app.slider_track.thumb_offset(20.0);
    assert!((offset - 30.0).abs() < 1e-3);
}

#[test]
fn test_settings_sync_keeps_text_out() {
    let mut app = app();
    app.press_key(Key::new("あ"));
    app.increase_font_size();
    app.toggle_face_to_face();
    app.sync_settings();

    assert_eq!(app.settings.font_size, 18.0);
    assert!(app.settings.face_to_face);
    let json = serde_json::to_string(&app.settings).unwrap();
    assert!(!json.contains('あ'));
}

#[test]
fn test_window_size_is_saved_from_live_window() {
    let mut app = app();
    assert_eq!(app.window_size, Settings::default().window_size);

    let resized = egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(800.0, 1000.0));
    app.record_window_size(Some(resized));
    // Minimized windows and frames without viewport info keep the last size
    app.record_window_size(Some(egui::Rect::from_min_size(egui::Pos2::ZERO, egui::Vec2::ZERO)));
    app.record_window_size(None);

    app.sync_settings();
    assert_eq!(app.settings.window_size, (800.0, 1000.0));
}

#[test]
fn test_initial_state_from_settings() {
    let app = KanaPadApp::with_settings(Settings {
        font_size: 250.0,
        face_to_face: true,
        ..Settings::default()
    })
    .unwrap();
    assert_eq!(app.font_size.value(), FONT_SIZE_MAX);
    assert!(app.face_to_face);
    assert!(app.status_message.is_none());
}

#[test]
fn test_play_reports_status() {
    let mut app = app();
    app.request_play();
    assert!(app.status_message.is_some());
}

#[test]
fn test_copy_with_nothing_to_copy() {
    let mut app = app();
    assert!(app.copy_to_clipboard().is_ok());
    let (message, _) = app.status_message.unwrap();
    assert_eq!(message, "Nothing to copy");
}

#[test]
fn test_error_messages() {
    let error = PanelError::FontNotFound { searched: 7 };
    assert!(error.is_recoverable());
    assert_eq!(error.error_code(), "FONT_NOT_FOUND");
    assert!(error.to_string().contains("7 locations"));
    assert!(error.user_message().contains("Noto Sans CJK"));

    let error = PanelError::InvalidRange {
        lower: 10.0,
        upper: 10.0,
    };
    assert!(!error.is_recoverable());
    assert_eq!(error.error_code(), "INVALID_RANGE");
}
