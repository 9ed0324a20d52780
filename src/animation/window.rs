use crate::{
    animation::ease::Ease,
    foundation::error::{ScrollError, ScrollResult},
    foundation::math::{clamp01, is_unit},
};

/// Local progress of `p` through `[start, end]`: 0 at or below `start`, 1 at or above `end`,
/// linear in between.
///
/// `start == end` degrades to a step at `start` rather than dividing by zero.
pub fn window_progress(p: f64, start: f64, end: f64) -> f64 {
    if p.is_nan() || p <= start {
        return 0.0;
    }
    if p >= end {
        return 1.0;
    }
    (p - start) / (end - start)
}

/// Triangular pulse over `[start, end]`: 0 at both ends, 1 at the midpoint.
pub fn spotlight(p: f64, start: f64, end: f64) -> f64 {
    clamp01(1.0 - (window_progress(p, start, end) - 0.5).abs() * 2.0)
}

/// One linear segment of an animation curve.
///
/// Holds `from` up to `start`, moves to `to` across the window and holds `to` afterwards.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct KeyframeWindow {
    /// Progress where the segment begins.
    pub start: f64,
    /// Progress where the segment ends.
    pub end: f64,
    /// Output at and before `start`.
    pub from: f64,
    /// Output at and after `end`.
    pub to: f64,
    /// Shaping applied to the window-local progress.
    #[serde(default, skip_serializing_if = "Ease::is_linear")]
    pub ease: Ease,
}

impl KeyframeWindow {
    /// Linear window.
    pub const fn new(start: f64, end: f64, from: f64, to: f64) -> Self {
        Self {
            start,
            end,
            from,
            to,
            ease: Ease::Linear,
        }
    }

    /// Replace the window's easing.
    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Check `0 <= start < end <= 1` and finite endpoint values.
    pub fn validate(&self) -> ScrollResult<()> {
        if !is_unit(self.start) || !is_unit(self.end) {
            return Err(ScrollError::validation(format!(
                "window [{}, {}] must lie within [0, 1]",
                self.start, self.end
            )));
        }
        if self.start >= self.end {
            return Err(ScrollError::validation(format!(
                "window start {} must be < end {}",
                self.start, self.end
            )));
        }
        if !self.from.is_finite() || !self.to.is_finite() {
            return Err(ScrollError::validation("window values must be finite"));
        }
        Ok(())
    }

    /// Evaluate the window at progress `p`. Never extrapolates past `from`/`to`.
    pub fn sample(&self, p: f64) -> f64 {
        if p.is_nan() || p <= self.start {
            return self.from;
        }
        if p >= self.end {
            return self.to;
        }
        let t = self.ease.apply((p - self.start) / (self.end - self.start));
        self.from + (self.to - self.from) * t
    }

    /// The window's contribution relative to `from`: zero before `start`, the full
    /// `to - from` after `end`.
    pub fn delta(&self, p: f64) -> f64 {
        self.sample(p) - self.from
    }
}

/// A spotlight pulse window; serialized as `{ "start": .., "end": .. }`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpotlightWindow {
    /// Progress where the pulse starts rising.
    pub start: f64,
    /// Progress where the pulse is back at zero.
    pub end: f64,
}

impl SpotlightWindow {
    /// Pulse value at `p`.
    pub fn sample(&self, p: f64) -> f64 {
        spotlight(p, self.start, self.end)
    }

    /// Same bounds check as [`KeyframeWindow::validate`].
    pub fn validate(&self) -> ScrollResult<()> {
        KeyframeWindow::new(self.start, self.end, 0.0, 1.0).validate()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/window.rs"]
mod tests;
