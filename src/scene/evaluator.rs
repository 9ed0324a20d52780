use crate::{
    foundation::math::clamp01,
    scene::config::{Bindings, SceneConfig, TargetKind, TargetSpec},
    scene::frame::{Frame, LengthUnit, SceneFrame, TargetFrames},
    scene::motion::MotionPreference,
};

/// Stateless evaluator from scene configuration and progress to frames.
pub struct SceneEvaluator;

impl SceneEvaluator {
    /// Evaluate every bound target at `progress`.
    ///
    /// Targets with no bound instances are skipped. Under [`MotionPreference::Static`] every
    /// frame is neutralized regardless of progress.
    #[tracing::instrument(skip(config, bindings), fields(scene = %config.name))]
    pub fn eval(
        config: &SceneConfig,
        bindings: &Bindings,
        progress: f64,
        motion: MotionPreference,
    ) -> SceneFrame {
        let progress = clamp01(progress);
        let mut targets = Vec::with_capacity(config.targets.len());
        for target in &config.targets {
            let count = bindings.count(&target.name);
            if count == 0 {
                tracing::trace!(name = %target.name, "no bound elements, skipping");
                continue;
            }
            let frames = (0..count)
                .map(|index| {
                    let frame = Self::eval_target(target, index, progress);
                    if motion.is_static() {
                        frame.neutralized()
                    } else {
                        frame
                    }
                })
                .collect();
            targets.push(TargetFrames {
                name: target.name.clone(),
                kind: target.kind,
                frames,
            });
        }
        SceneFrame {
            progress,
            motion,
            targets,
        }
    }

    /// Frame for instance `index` of `target`.
    ///
    /// The instance phase is `progress + index * stagger`. Element channels clamp through
    /// their windows; morph layers clamp the phase itself.
    pub fn eval_target(target: &TargetSpec, index: usize, progress: f64) -> Frame {
        let offset = index as f64 * target.stagger;
        let ch = &target.channels;
        match (target.kind, &target.morph) {
            (TargetKind::Morph, Some(morph)) => {
                let m = morph.frame(progress, offset);
                Frame {
                    translate_x: Some(m.x),
                    translate_y: Some(m.y),
                    unit: LengthUnit::Percent,
                    rotate_deg: Some(m.rotate),
                    radius: Some(m.radius),
                    spotlight: ch.spotlight.map(|s| s.sample(m.phase)),
                    ..Frame::default()
                }
            }
            _ => {
                let p = progress + offset;
                let drift = ch.drift_for(index);
                Frame {
                    translate_x: ch.translate_x.as_ref().map(|c| c.sample(p) * drift),
                    translate_y: ch.translate_y.as_ref().map(|c| c.sample(p)),
                    unit: LengthUnit::Px,
                    rotate_deg: ch.rotate.as_ref().map(|c| c.sample(p)),
                    scale: ch.scale.as_ref().map(|c| c.sample(p)),
                    blur_px: ch.blur.as_ref().map(|c| c.sample(p).max(0.0)),
                    opacity: ch.opacity.as_ref().map(|c| clamp01(c.sample(p))),
                    spotlight: ch.spotlight.map(|s| s.sample(p)),
                    radius: None,
                    neutral: false,
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/evaluator.rs"]
mod tests;
