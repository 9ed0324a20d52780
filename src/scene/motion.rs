/// Reduced-motion fallback state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum MotionPreference {
    /// Frames follow progress.
    #[default]
    Animated,
    /// Frames are pinned to identity values.
    Static,
}

impl MotionPreference {
    /// State for a "prefers reduced motion" signal value.
    pub fn from_reduced_motion(reduced: bool) -> Self {
        if reduced { Self::Static } else { Self::Animated }
    }

    /// Next state for a signal change. No intermediate states, no hysteresis.
    pub fn transition(self, reduced: bool) -> Self {
        let next = Self::from_reduced_motion(reduced);
        if next != self {
            tracing::debug!(from = ?self, to = ?next, "motion preference changed");
        }
        next
    }

    /// True in the reduced-motion state.
    pub fn is_static(self) -> bool {
        matches!(self, Self::Static)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/motion.rs"]
mod tests;
