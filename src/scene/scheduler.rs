/// External signal that asked for a recomputation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum UpdateTrigger {
    /// First render after attaching.
    Initial,
    /// Viewport scrolled.
    Scroll,
    /// Viewport resized.
    Resize,
    /// Page finished loading.
    Load,
    /// The reduced-motion preference flipped.
    MotionPreferenceChange,
}

/// Coalesces update requests to at most one pending recomputation per display refresh.
///
/// `request` sets a single in-flight flag; the animation-frame tick calls `take` to clear it.
/// Requests arriving while an update is pending are dropped, not queued.
#[derive(Clone, Debug, Default)]
pub struct FrameScheduler {
    pending: Option<UpdateTrigger>,
    coalesced: u64,
}

impl FrameScheduler {
    /// Idle scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask for an update. Returns true if this call scheduled one (the caller should request an
    /// animation frame), false if it was folded into the pending update.
    pub fn request(&mut self, trigger: UpdateTrigger) -> bool {
        if let Some(pending) = self.pending {
            self.coalesced += 1;
            tracing::trace!(?trigger, ?pending, "update request coalesced");
            return false;
        }
        self.pending = Some(trigger);
        true
    }

    /// Clear the in-flight flag, returning the trigger that scheduled it.
    pub fn take(&mut self) -> Option<UpdateTrigger> {
        self.pending.take()
    }

    /// Whether an update is pending.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop a pending update without running it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Requests dropped because one was already pending.
    pub fn coalesced(&self) -> u64 {
        self.coalesced
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/scheduler.rs"]
mod tests;
