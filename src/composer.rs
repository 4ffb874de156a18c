//! Session state edited by the panel: the entered text and its font size.

use crate::errors::Result;
use crate::kana::Key;
use crate::settings::{FONT_SIZE_MAX, FONT_SIZE_MIN};
use crate::slider::SliderRange;

pub const PLACEHOLDER: &str = "テキストを入力";

/// Entered text. Lives for the session only.
#[derive(Debug, Clone, Default)]
pub struct Composer {
    text: String,
}

impl Composer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Text to draw, falling back to the placeholder.
    pub fn display_text(&self) -> &str {
        if self.text.is_empty() {
            PLACEHOLDER
        } else {
            &self.text
        }
    }

    /// Append a key. Gap keys are ignored.
    pub fn push_key(&mut self, key: Key) -> bool {
        if key.is_gap() {
            return false;
        }
        self.text.push_str(key.text);
        true
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

/// Font size of the display, bound to both the +/- buttons and the slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSize {
    value: f32,
    range: SliderRange,
}

impl FontSize {
    pub fn new(value: f32, range: SliderRange) -> Self {
        Self {
            value: range.clamp(value),
            range,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// The bound cell handed to the slider widget. Callers must not leave it
    /// outside the range; `settle` restores the invariant if they do.
    pub fn binding(&mut self) -> &mut f32 {
        &mut self.value
    }

    pub fn settle(&mut self) {
        self.value = self.range.clamp(self.value);
    }

    pub fn set(&mut self, value: f32) {
        self.value = self.range.clamp(value);
    }

    pub fn increase(&mut self, step: f32) {
        self.set(self.value + step);
    }

    pub fn decrease(&mut self, step: f32) {
        self.set(self.value - step);
    }
}

pub fn font_size_range() -> Result<SliderRange> {
    SliderRange::new(FONT_SIZE_MIN, FONT_SIZE_MAX)
}
