use crate::foundation::error::ScrollResult;
use crate::scene::frame::SceneFrame;

/// Consumer of evaluated scene frames (the "style applier").
///
/// Contract: each `apply` fully replaces the previously applied values; channels a frame
/// leaves as `None` are not touched.
pub trait StyleSink {
    /// Write one update cycle's output.
    fn apply(&mut self, frame: &SceneFrame) -> ScrollResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    pub(crate) frames: Vec<SceneFrame>,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow every applied frame, oldest first.
    pub fn frames(&self) -> &[SceneFrame] {
        &self.frames
    }

    /// Most recently applied frame.
    pub fn last(&self) -> Option<&SceneFrame> {
        self.frames.last()
    }
}

impl StyleSink for InMemorySink {
    fn apply(&mut self, frame: &SceneFrame) -> ScrollResult<()> {
        self.frames.push(frame.clone());
        Ok(())
    }
}

impl<S: StyleSink + ?Sized> StyleSink for &mut S {
    fn apply(&mut self, frame: &SceneFrame) -> ScrollResult<()> {
        (**self).apply(frame)
    }
}
