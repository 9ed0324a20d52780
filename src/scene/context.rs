use crate::{
    foundation::error::ScrollResult,
    scene::config::{Bindings, SceneConfig},
    scene::evaluator::SceneEvaluator,
    scene::frame::SceneFrame,
    scene::motion::MotionPreference,
    scene::reveal::{RevealEvent, RevealObserver},
    scene::sampler::ScrollGeometry,
    scene::scheduler::{FrameScheduler, UpdateTrigger},
    style::sink::StyleSink,
};

/// Per-view state for one animated scene: configuration, element bindings, motion
/// preference, the update throttle and the reveal latch.
///
/// Lifecycle: [`SceneContext::attach`] when the view appears, [`SceneContext::detach`] when it
/// goes away. A detached context ignores update requests and reveal updates.
#[derive(Debug)]
pub struct SceneContext {
    config: SceneConfig,
    bindings: Bindings,
    motion: MotionPreference,
    scheduler: FrameScheduler,
    reveal: RevealObserver,
    attached: bool,
}

impl SceneContext {
    /// Validate `config` and build a detached context.
    pub fn new(config: SceneConfig) -> ScrollResult<Self> {
        config.validate()?;
        let reveal = RevealObserver::new(config.reveal);
        Ok(Self {
            config,
            bindings: Bindings::new(),
            motion: MotionPreference::Animated,
            scheduler: FrameScheduler::new(),
            reveal,
            attached: false,
        })
    }

    /// Scene configuration.
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Current element bindings.
    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    /// Current motion state.
    pub fn motion(&self) -> MotionPreference {
        self.motion
    }

    /// Whether the context is attached to a view.
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Whether an update is waiting for the next animation frame.
    pub fn is_update_pending(&self) -> bool {
        self.scheduler.is_pending()
    }

    /// Attach to a view with the given element bindings and schedule the initial render.
    pub fn attach(&mut self, bindings: Bindings) {
        let unknown = bindings.unknown_targets(&self.config);
        if !unknown.is_empty() {
            tracing::warn!(?unknown, "bindings name targets the scene does not define");
        }
        self.bindings = bindings;
        self.attached = true;
        tracing::debug!(scene = %self.config.name, "scene attached");
        self.scheduler.request(UpdateTrigger::Initial);
    }

    /// Tear down: drop bindings, any pending update and all reveal state.
    pub fn detach(&mut self) {
        self.bindings = Bindings::new();
        self.scheduler.cancel();
        self.reveal.clear();
        self.attached = false;
        tracing::debug!(scene = %self.config.name, "scene detached");
    }

    /// Forward a scroll/resize/load signal to the throttle. Returns true if the caller should
    /// request an animation frame.
    pub fn request_update(&mut self, trigger: UpdateTrigger) -> bool {
        if !self.attached {
            return false;
        }
        self.scheduler.request(trigger)
    }

    /// Feed the reduced-motion signal. A change schedules an update. Returns whether the state
    /// changed.
    pub fn set_reduced_motion(&mut self, reduced: bool) -> bool {
        let next = self.motion.transition(reduced);
        if next == self.motion {
            return false;
        }
        self.motion = next;
        self.request_update(UpdateTrigger::MotionPreferenceChange);
        true
    }

    /// Evaluate the scene for `geometry` without touching the throttle.
    pub fn evaluate(&self, geometry: ScrollGeometry) -> SceneFrame {
        let progress = geometry.progress();
        tracing::trace!(progress, "sampled scroll progress");
        SceneEvaluator::eval(&self.config, &self.bindings, progress, self.motion)
    }

    /// Animation-frame tick: if an update is pending, evaluate and apply it. Returns whether
    /// anything was applied.
    #[tracing::instrument(skip(self, sink), fields(scene = %self.config.name))]
    pub fn on_animation_frame(
        &mut self,
        geometry: ScrollGeometry,
        sink: &mut dyn StyleSink,
    ) -> ScrollResult<bool> {
        let Some(trigger) = self.scheduler.take() else {
            return Ok(false);
        };
        if !self.attached {
            return Ok(false);
        }
        tracing::trace!(?trigger, "running scheduled update");
        sink.apply(&self.evaluate(geometry))?;
        Ok(true)
    }

    /// Evaluate and apply immediately, bypassing the throttle.
    pub fn update_now(
        &mut self,
        geometry: ScrollGeometry,
        sink: &mut dyn StyleSink,
    ) -> ScrollResult<()> {
        self.scheduler.cancel();
        sink.apply(&self.evaluate(geometry))
    }

    /// Observe an element for reveal-on-intersect.
    pub fn observe_reveal(&mut self, id: impl Into<String>) -> bool {
        self.attached && self.reveal.observe(id)
    }

    /// Report an element's intersection ratio.
    pub fn report_intersection(&mut self, id: &str, ratio: f64) -> Option<RevealEvent> {
        if !self.attached {
            return None;
        }
        self.reveal.update(id, ratio)
    }

    /// Reveal latch state.
    pub fn reveal(&self) -> &RevealObserver {
        &self.reveal
    }

    /// Mutable reveal latch, e.g. for geometry-based updates.
    pub fn reveal_mut(&mut self) -> &mut RevealObserver {
        &mut self.reveal
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/context.rs"]
mod tests;
