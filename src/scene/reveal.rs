use std::collections::BTreeSet;

use crate::{foundation::math::clamp01, scene::config::RevealConfig};

/// Fraction of an element's height that lies inside the viewport, whose bottom edge is moved
/// by `bottom_margin * viewport_height` (negative shrinks it).
///
/// Zero-height elements count as fully visible while their top is inside the root.
pub fn intersection_ratio(
    element_top: f64,
    element_height: f64,
    viewport_height: f64,
    bottom_margin: f64,
) -> f64 {
    let root_bottom = viewport_height * (1.0 + bottom_margin);
    if !(element_top.is_finite() && element_height.is_finite() && root_bottom.is_finite()) {
        return 0.0;
    }
    if element_height <= 0.0 {
        return if (0.0..=root_bottom).contains(&element_top) {
            1.0
        } else {
            0.0
        };
    }
    let visible = (element_top + element_height).min(root_bottom) - element_top.max(0.0);
    clamp01(visible / element_height)
}

/// Emitted once per element when it latches to revealed.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RevealEvent {
    /// Element id.
    pub id: String,
    /// Ratio that crossed the threshold.
    pub ratio: f64,
}

/// One-shot reveal latch over a set of observed elements.
///
/// An element is revealed the first time its intersection ratio reaches the threshold; it is
/// then unobserved and never reported again.
#[derive(Clone, Debug, Default)]
pub struct RevealObserver {
    config: RevealConfig,
    observed: BTreeSet<String>,
    revealed: BTreeSet<String>,
}

impl RevealObserver {
    /// Empty observer.
    pub fn new(config: RevealConfig) -> Self {
        Self {
            config,
            observed: BTreeSet::new(),
            revealed: BTreeSet::new(),
        }
    }

    /// Active settings.
    pub fn config(&self) -> RevealConfig {
        self.config
    }

    /// Start observing `id`. Returns false if it is already observed or already revealed.
    pub fn observe(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.revealed.contains(&id) {
            return false;
        }
        self.observed.insert(id)
    }

    /// Stop observing `id` without revealing it.
    pub fn unobserve(&mut self, id: &str) -> bool {
        self.observed.remove(id)
    }

    /// Whether `id` still receives intersection updates.
    pub fn is_observed(&self, id: &str) -> bool {
        self.observed.contains(id)
    }

    /// Whether `id` has latched.
    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }

    /// Number of elements still observed.
    pub fn observed_len(&self) -> usize {
        self.observed.len()
    }

    /// Feed an intersection ratio for `id`. Unobserved ids are ignored.
    pub fn update(&mut self, id: &str, ratio: f64) -> Option<RevealEvent> {
        if !self.observed.contains(id) {
            return None;
        }
        let ratio = clamp01(ratio);
        let crossed = if self.config.threshold > 0.0 {
            ratio >= self.config.threshold
        } else {
            ratio > 0.0
        };
        if !crossed {
            return None;
        }
        self.observed.remove(id);
        self.revealed.insert(id.to_string());
        tracing::debug!(id, ratio, threshold = self.config.threshold, "element revealed");
        Some(RevealEvent {
            id: id.to_string(),
            ratio,
        })
    }

    /// Feed element geometry; the ratio is computed with the configured bottom margin.
    pub fn update_geometry(
        &mut self,
        id: &str,
        element_top: f64,
        element_height: f64,
        viewport_height: f64,
    ) -> Option<RevealEvent> {
        let ratio = intersection_ratio(
            element_top,
            element_height,
            viewport_height,
            self.config.bottom_margin,
        );
        self.update(id, ratio)
    }

    /// Drop all observed and revealed state.
    pub fn clear(&mut self) {
        self.observed.clear();
        self.revealed.clear();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/reveal.rs"]
mod tests;
