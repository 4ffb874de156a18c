//! Fixed key tables.

/// Kana columns in gojūon order. Empty strings are gaps in the table.
pub const KANA_COLUMNS: [[&str; 5]; 10] = [
    ["あ", "い", "う", "え", "お"],
    ["か", "き", "く", "け", "こ"],
    ["さ", "し", "す", "せ", "そ"],
    ["た", "ち", "つ", "て", "と"],
    ["な", "に", "ぬ", "ね", "の"],
    ["は", "ひ", "ふ", "へ", "ほ"],
    ["ま", "み", "む", "め", "も"],
    ["や", "", "ゆ", "", "よ"],
    ["ら", "り", "る", "れ", "ろ"],
    ["わ", "", "を", "", "ん"],
];

pub const DIGITS: [&str; 10] = ["1", "2", "3", "4", "5", "6", "7", "8", "9", "0"];

/// Shown on gap keys so they keep their width.
pub const GAP_GLYPH: &str = "\u{3000}";

/// One key of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Key {
    pub text: &'static str,
}

impl Key {
    pub const fn new(text: &'static str) -> Self {
        Self { text }
    }

    pub fn is_gap(&self) -> bool {
        self.text.is_empty()
    }

    /// Text drawn on the key face.
    pub fn label(&self) -> &'static str {
        if self.is_gap() {
            GAP_GLYPH
        } else {
            self.text
        }
    }
}

pub fn digit_keys() -> impl Iterator<Item = Key> {
    DIGITS.iter().map(|d| Key::new(d))
}

pub fn column_keys(column: usize) -> impl Iterator<Item = Key> {
    KANA_COLUMNS
        .get(column)
        .into_iter()
        .flat_map(|col| col.iter().map(|k| Key::new(k)))
}
