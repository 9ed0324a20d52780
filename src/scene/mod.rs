pub(crate) mod config;
pub(crate) mod context;
pub(crate) mod evaluator;
pub(crate) mod frame;
pub(crate) mod motion;
pub(crate) mod presets;
pub(crate) mod reveal;
pub(crate) mod sampler;
pub(crate) mod scheduler;
