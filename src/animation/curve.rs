use crate::{
    animation::window::KeyframeWindow,
    foundation::error::{ScrollError, ScrollResult},
};

/// A channel curve built by stacking keyframe windows additively.
///
/// `sample(p) = base + sum(window.delta(p))`. Each window contributes nothing before its start
/// and its full delta after its end, so intro/emphasis/outro phases compose without special
/// cases at the transitions.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Curve {
    /// Resting value. Defaults to the first window's `from`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<f64>,
    /// Windows in any order; they may overlap.
    pub windows: Vec<KeyframeWindow>,
}

impl Curve {
    /// Curve with an implicit base taken from the first window.
    pub fn new(windows: Vec<KeyframeWindow>) -> Self {
        Self {
            base: None,
            windows,
        }
    }

    /// Single-window curve: `from -> to` across `[start, end]`.
    pub fn linear(start: f64, end: f64, from: f64, to: f64) -> Self {
        Self::new(vec![KeyframeWindow::new(start, end, from, to)])
    }

    /// Curve with an explicit resting value.
    pub fn with_base(mut self, base: f64) -> Self {
        self.base = Some(base);
        self
    }

    /// Resolved resting value.
    pub fn base(&self) -> f64 {
        self.base
            .or_else(|| self.windows.first().map(|w| w.from))
            .unwrap_or(0.0)
    }

    /// Validate every window and the base.
    pub fn validate(&self) -> ScrollResult<()> {
        if self.windows.is_empty() && self.base.is_none() {
            return Err(ScrollError::validation(
                "curve must have at least one window or a base value",
            ));
        }
        if let Some(base) = self.base
            && !base.is_finite()
        {
            return Err(ScrollError::validation("curve base must be finite"));
        }
        for w in &self.windows {
            w.validate()?;
        }
        Ok(())
    }

    /// Evaluate at progress `p`.
    pub fn sample(&self, p: f64) -> f64 {
        match (self.base, self.windows.split_first()) {
            // Implicit base: start from the first window's own value so a single-window curve
            // is exactly `KeyframeWindow::sample`.
            (None, Some((first, rest))) => rest
                .iter()
                .fold(first.sample(p), |acc, w| acc + w.delta(p)),
            _ => self
                .windows
                .iter()
                .fold(self.base(), |acc, w| acc + w.delta(p)),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/curve.rs"]
mod tests;
