//! Keypad geometry.

use crate::kana::KANA_COLUMNS;
use egui::{Color32, Vec2};

/// Horizontal space kept free around the key grid
pub const GRID_MARGIN: f32 = 50.0;
pub const KEY_SPACING: f32 = 5.0;

pub const EVEN_COLUMN_COLOR: Color32 = Color32::from_rgb(0, 122, 255);
pub const ODD_COLUMN_COLOR: Color32 = Color32::from_rgb(255, 149, 0);
pub const DIGIT_KEY_COLOR: Color32 = Color32::BLACK;

/// Size of one key for a grid `available_width` pixels wide.
///
/// Width splits the width minus the margin across the columns; height uses
/// one extra column so keys stay slightly shorter than they are wide.
pub fn key_size(available_width: f32) -> Vec2 {
    let columns = KANA_COLUMNS.len() as f32;
    let width = ((available_width - GRID_MARGIN) / columns).max(0.0);
    let height = (available_width / (columns + 1.0)).max(0.0);
    Vec2::new(width, height)
}

/// Kana column indices in display order, left to right. The あ column sits on
/// the right, as in a printed gojūon table.
pub fn display_columns() -> impl Iterator<Item = usize> {
    (0..KANA_COLUMNS.len()).rev()
}

pub fn column_color(column: usize) -> Color32 {
    if column % 2 == 0 {
        EVEN_COLUMN_COLOR
    } else {
        ODD_COLUMN_COLOR
    }
}

/// Glyph size that fits inside a key without clipping.
pub fn key_font_size(key: Vec2) -> f32 {
    (key.x.min(key.y) * 0.6).clamp(8.0, 32.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_size() {
        let size = key_size(600.0);
        assert_eq!(size.x, 55.0);
        assert!((size.y - 600.0 / 11.0).abs() < 1e-4);
    }

    #[test]
    fn test_key_size_never_negative() {
        let size = key_size(20.0);
        assert_eq!(size.x, 0.0);
        assert!(size.y > 0.0);
        assert_eq!(key_size(-10.0), Vec2::ZERO);
    }

    #[test]
    fn test_display_order_is_right_to_left() {
        let order: Vec<usize> = display_columns().collect();
        assert_eq!(order.first(), Some(&9));
        assert_eq!(order.last(), Some(&0));
        assert_eq!(order.len(), 10);
    }

    #[test]
    fn test_column_colors_alternate() {
        assert_eq!(column_color(0), EVEN_COLUMN_COLOR);
        assert_eq!(column_color(1), ODD_COLUMN_COLOR);
        assert_eq!(column_color(8), EVEN_COLUMN_COLOR);
        assert_eq!(column_color(9), ODD_COLUMN_COLOR);
    }

    #[test]
    fn test_key_font_size_bounds() {
        assert_eq!(key_font_size(Vec2::new(5.0, 5.0)), 8.0);
        assert_eq!(key_font_size(Vec2::new(200.0, 200.0)), 32.0);
        assert!((key_font_size(Vec2::new(40.0, 30.0)) - 18.0).abs() < 1e-4);
    }
}
