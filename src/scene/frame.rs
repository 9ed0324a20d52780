use crate::{animation::morph::BorderRadius, scene::config::TargetKind, scene::motion::MotionPreference};

/// Unit of a frame's translation channels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum LengthUnit {
    /// CSS pixels.
    #[default]
    Px,
    /// Percent of the element's own box.
    Percent,
}

impl LengthUnit {
    /// CSS suffix.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Px => "px",
            Self::Percent => "%",
        }
    }
}

/// Derived output parameters for one element instance.
///
/// `None` channels are not animated by the target and are left untouched by style sinks.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct Frame {
    /// Horizontal offset.
    pub translate_x: Option<f64>,
    /// Vertical offset.
    pub translate_y: Option<f64>,
    /// Unit of both translation channels.
    pub unit: LengthUnit,
    /// Rotation in degrees.
    pub rotate_deg: Option<f64>,
    /// Uniform scale factor.
    pub scale: Option<f64>,
    /// Gaussian blur radius in px.
    pub blur_px: Option<f64>,
    /// Opacity in `[0, 1]`.
    pub opacity: Option<f64>,
    /// Spotlight emphasis in `[0, 1]`.
    pub spotlight: Option<f64>,
    /// Border-radius control points in percent.
    pub radius: Option<BorderRadius>,
    /// Set when the frame was forced to identity values by the reduced-motion fallback.
    pub neutral: bool,
}

impl Frame {
    /// Replace every animated channel with its identity value, keeping the set of channels.
    ///
    /// Border radius is dropped rather than reset.
    pub fn neutralized(self) -> Self {
        let zero = |v: Option<f64>| v.map(|_| 0.0);
        let one = |v: Option<f64>| v.map(|_| 1.0);
        Self {
            translate_x: zero(self.translate_x),
            translate_y: zero(self.translate_y),
            unit: self.unit,
            rotate_deg: zero(self.rotate_deg),
            scale: one(self.scale),
            blur_px: zero(self.blur_px),
            opacity: one(self.opacity),
            spotlight: zero(self.spotlight),
            radius: None,
            neutral: true,
        }
    }

    /// Whether any transform channel is present.
    pub fn has_transform(&self) -> bool {
        self.translate_x.is_some()
            || self.translate_y.is_some()
            || self.rotate_deg.is_some()
            || self.scale.is_some()
    }
}

/// All frames for one configured target, one per bound element instance.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TargetFrames {
    /// Target name from the scene configuration.
    pub name: String,
    /// Target kind.
    pub kind: TargetKind,
    /// Frames in instance-index order.
    pub frames: Vec<Frame>,
}

/// Output of one update cycle. Fully replaces the previous cycle's output.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SceneFrame {
    /// Sampled progress.
    pub progress: f64,
    /// Motion state the frame was evaluated under.
    pub motion: MotionPreference,
    /// Targets with at least one bound instance, in configuration order.
    pub targets: Vec<TargetFrames>,
}

impl SceneFrame {
    /// Look up a target's frames by name.
    pub fn target(&self, name: &str) -> Option<&TargetFrames> {
        self.targets.iter().find(|t| t.name == name)
    }

    /// Frame of instance `index` of target `name`.
    pub fn frame(&self, name: &str, index: usize) -> Option<&Frame> {
        self.target(name).and_then(|t| t.frames.get(index))
    }

    /// Total number of element frames.
    pub fn len(&self) -> usize {
        self.targets.iter().map(|t| t.frames.len()).sum()
    }

    /// True when no element was bound.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
