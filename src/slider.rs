//! Drag-to-value mapping for the vertical font-size slider.
//!
//! Everything here is pure: the egui widget in `ui::vertical_slider` feeds it
//! track geometry and pointer positions and renders whatever comes back.
//!
//! Coordinates follow egui's screen space: `py = 0` is the top of the track,
//! `py = height` the bottom. The top of the track maps to the upper bound.

use crate::errors::{PanelError, Result};
use serde::{Deserialize, Serialize};

/// An immutable closed interval `[lower, upper]` with `lower < upper`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderRange {
    lower: f32,
    upper: f32,
}

impl SliderRange {
    pub fn new(lower: f32, upper: f32) -> Result<Self> {
        if !lower.is_finite() || !upper.is_finite() || lower >= upper {
            return Err(PanelError::InvalidRange { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    pub fn lower(&self) -> f32 {
        self.lower
    }

    pub fn upper(&self) -> f32 {
        self.upper
    }

    pub fn span(&self) -> f32 {
        self.upper - self.lower
    }

    /// Clamp into the range. NaN maps to the lower bound.
    pub fn clamp(&self, value: f32) -> f32 {
        if value.is_nan() {
            return self.lower;
        }
        value.clamp(self.lower, self.upper)
    }

    #[cfg(test)]
    pub fn contains(&self, value: f32) -> bool {
        (self.lower..=self.upper).contains(&value)
    }
}

/// How a value is normalized against the range when mapping to and from
/// track positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Normalization {
    /// `v / upper`, ignoring the lower bound. Values below the lower bound
    /// correspond to track positions that clamp to it, so the bottom of the
    /// track is a dead zone when `lower > 0`.
    UpperBound,
    /// `(v - lower) / (upper - lower)`. The full track covers the range.
    #[default]
    Span,
}

/// Validated geometry and mapping configuration for one slider track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderTrack {
    height: f32,
    range: SliderRange,
    normalization: Normalization,
    step: Option<f32>,
}

impl SliderTrack {
    pub fn new(height: f32, range: SliderRange) -> Result<Self> {
        if !height.is_finite() || height <= 0.0 {
            return Err(PanelError::InvalidTrackHeight { height });
        }
        Ok(Self {
            height,
            range,
            normalization: Normalization::default(),
            step: None,
        })
    }

    pub fn with_normalization(mut self, normalization: Normalization) -> Self {
        self.normalization = normalization;
        self
    }

    /// Quantize dragged values to `lower + k * step`.
    pub fn with_step(mut self, step: f32) -> Result<Self> {
        if !step.is_finite() || step <= 0.0 {
            return Err(PanelError::InvalidStep { step });
        }
        self.step = Some(step);
        Ok(self)
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn range(&self) -> SliderRange {
        self.range
    }

    pub fn normalization(&self) -> Normalization {
        self.normalization
    }

    /// Fraction of the track (0 = bottom, 1 = top) that `value` occupies.
    fn fraction_of(&self, value: f32) -> f32 {
        match self.normalization {
            Normalization::UpperBound => value / self.range.upper,
            Normalization::Span => (value - self.range.lower) / self.range.span(),
        }
    }

    /// Vertical offset of the thumb centre from the track centre, in pixels.
    /// Negative is up.
    pub fn thumb_offset(&self, value: f32) -> f32 {
        let value = self.range.clamp(value);
        -self.fraction_of(value) * self.height + self.height / 2.0
    }

    /// Value before clamping for a pointer at `py` below the top of the track.
    pub fn raw_value_at(&self, py: f32) -> f32 {
        let fraction = (self.height - py) / self.height;
        match self.normalization {
            Normalization::UpperBound => fraction * self.range.upper,
            Normalization::Span => self.range.lower + fraction * self.range.span(),
        }
    }

    /// Value written to the binding for a pointer at `py`. Always inside the
    /// range, whatever `py` is.
    pub fn value_at(&self, py: f32) -> f32 {
        let raw = self.raw_value_at(py);
        let raw = match self.step {
            Some(step) if raw.is_finite() => {
                self.range.lower + ((raw - self.range.lower) / step).round() * step
            }
            _ => raw,
        };
        self.range.clamp(raw)
    }

    /// Pointer position whose drag produces `value` (before stepping).
    #[cfg(test)]
    pub fn position_of(&self, value: f32) -> f32 {
        self.height - self.fraction_of(value) * self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging,
}

/// Idle/dragging state machine. The bound value is only written while
/// dragging.
#[derive(Debug, Clone, Copy, Default)]
pub struct SliderGesture {
    phase: DragPhase,
}

impl SliderGesture {
    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == DragPhase::Dragging
    }

    pub fn begin(&mut self) {
        if self.phase == DragPhase::Idle {
            log::trace!("slider drag started");
        }
        self.phase = DragPhase::Dragging;
    }

    /// Apply a pointer movement. Returns true if the bound value changed.
    pub fn update(&mut self, track: &SliderTrack, py: f32, value: &mut f32) -> bool {
        if self.phase != DragPhase::Dragging {
            return false;
        }
        let new_value = track.value_at(py);
        let changed = new_value != *value;
        *value = new_value;
        changed
    }

    /// Gesture end or cancellation.
    pub fn end(&mut self) {
        if self.phase == DragPhase::Dragging {
            log::trace!("slider drag ended");
        }
        self.phase = DragPhase::Idle;
    }
}
