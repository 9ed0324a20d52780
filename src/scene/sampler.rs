use crate::foundation::math::clamp;

/// Bounding geometry of the scroll region, measured relative to the viewport.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollGeometry {
    /// Top edge of the region relative to the viewport origin; negative once scrolled past.
    pub region_top: f64,
    /// Full height of the region.
    pub region_height: f64,
    /// Visible viewport height.
    pub viewport_height: f64,
}

impl ScrollGeometry {
    /// Build from raw numbers.
    pub const fn new(region_top: f64, region_height: f64, viewport_height: f64) -> Self {
        Self {
            region_top,
            region_height,
            viewport_height,
        }
    }

    /// Build from a bounding client rect (viewport coordinates).
    pub fn from_rect(rect: kurbo::Rect, viewport_height: f64) -> Self {
        Self::new(rect.y0, rect.height(), viewport_height)
    }

    /// Scroll distance over which the region is traversed. Never below 1.
    pub fn total_scroll(&self) -> f64 {
        let span = finite_or_zero(self.region_height) - finite_or_zero(self.viewport_height);
        span.max(1.0)
    }

    /// Normalized progress through the region in `[0, 1]`.
    ///
    /// Regions shorter than the viewport get `total_scroll() == 1`, so progress jumps to 1
    /// as soon as the region top passes one unit above the viewport.
    pub fn progress(&self) -> f64 {
        let total = self.total_scroll();
        let consumed = clamp(-finite_or_zero(self.region_top), 0.0, total);
        consumed / total
    }
}

fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/sampler.rs"]
mod tests;
