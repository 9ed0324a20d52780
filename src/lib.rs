//! scroll-curves evaluates scroll-driven animation curves for landing-page scenes.
//!
//! The crate owns the numeric core of parallax, reveal and morphing-blob effects and leaves
//! the DOM to the embedder:
//!
//! 1. **Sample**: `ScrollGeometry -> progress` in `[0, 1]`
//! 2. **Interpolate**: `SceneConfig + Bindings + progress -> SceneFrame` via additive keyframe
//!    windows, phase-shifted blob layers and spotlight pulses
//! 3. **Apply**: a [`StyleSink`] writes the frame (see [`CssSink`] for CSS declarations)
//!
//! [`SceneContext`] ties the steps together with the per-frame update throttle, the
//! reduced-motion fallback and the one-shot reveal latch.
//!
//! Sampling and interpolation are total: every input is clamped and nothing in the hot path
//! returns an error.
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod animation;
mod foundation;
mod scene;
mod style;

pub use animation::curve::Curve;
pub use animation::ease::Ease;
pub use animation::morph::{BorderRadius, MorphFrame, MorphSpec};
pub use animation::span::{Lerp, Span};
pub use animation::window::{KeyframeWindow, SpotlightWindow, spotlight, window_progress};
pub use foundation::error::{ScrollError, ScrollResult};
pub use foundation::math::{clamp, clamp01, lerp};
pub use scene::config::{
    Bindings, ChannelCurves, RevealConfig, SceneConfig, TargetKind, TargetSpec,
};
pub use scene::context::SceneContext;
pub use scene::evaluator::SceneEvaluator;
pub use scene::frame::{Frame, LengthUnit, SceneFrame, TargetFrames};
pub use scene::motion::MotionPreference;
pub use scene::presets::PRESET_NAMES;
pub use scene::reveal::{RevealEvent, RevealObserver, intersection_ratio};
pub use scene::sampler::ScrollGeometry;
pub use scene::scheduler::{FrameScheduler, UpdateTrigger};
pub use style::css::{CssSink, ElementKey, SPOTLIGHT_PROPERTY, declarations, transform_value};
pub use style::sink::{InMemorySink, StyleSink};
