use crate::{
    animation::span::Span,
    foundation::error::{ScrollError, ScrollResult},
    foundation::math::clamp01,
};

/// Elliptical corner radii in percent: four horizontal radii followed by four vertical radii
/// (top-left, top-right, bottom-right, bottom-left in each group).
pub type BorderRadius = [f64; 8];

/// Shape and drift of one organic "blob" layer, driven by a single phase.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MorphSpec {
    /// Corner radii at phase 0 and phase 1.
    pub radius: Span<BorderRadius>,
    /// Horizontal translation in percent of the layer size.
    pub x: Span<f64>,
    /// Vertical translation in percent of the layer size.
    pub y: Span<f64>,
    /// Rotation in degrees.
    pub rotate: Span<f64>,
}

impl Default for MorphSpec {
    fn default() -> Self {
        Self {
            radius: Span::new(
                [40.0, 60.0, 62.0, 38.0, 54.0, 43.0, 57.0, 46.0],
                [58.0, 42.0, 44.0, 56.0, 38.0, 60.0, 40.0, 63.0],
            ),
            x: Span::new(-2.5, 2.5),
            y: Span::new(2.0, -2.0),
            rotate: Span::new(-3.0, 3.0),
        }
    }
}

/// One evaluated blob pose.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct MorphFrame {
    /// Phase that produced this pose.
    pub phase: f64,
    /// Corner radii in percent.
    pub radius: BorderRadius,
    /// Horizontal offset in percent.
    pub x: f64,
    /// Vertical offset in percent.
    pub y: f64,
    /// Rotation in degrees.
    pub rotate: f64,
}

impl MorphSpec {
    /// Evaluate at `progress + offset`, clamped to `[0, 1]`. One phase drives all channels.
    pub fn frame(&self, progress: f64, offset: f64) -> MorphFrame {
        let phase = clamp01(progress + offset);
        MorphFrame {
            phase,
            radius: self.radius.at(phase),
            x: self.x.at(phase),
            y: self.y.at(phase),
            rotate: self.rotate.at(phase),
        }
    }

    /// Radii must be finite and non-negative; offsets finite.
    pub fn validate(&self) -> ScrollResult<()> {
        let radii = self.radius.from.iter().chain(self.radius.to.iter());
        for r in radii {
            if !r.is_finite() || *r < 0.0 {
                return Err(ScrollError::validation(
                    "morph radius values must be finite and >= 0",
                ));
            }
        }
        let spans = [self.x, self.y, self.rotate];
        if spans
            .iter()
            .any(|s| !s.from.is_finite() || !s.to.is_finite())
        {
            return Err(ScrollError::validation("morph offsets must be finite"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/morph.rs"]
mod tests;
