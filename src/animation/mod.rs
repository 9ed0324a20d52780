pub(crate) mod curve;
pub(crate) mod ease;
pub(crate) mod morph;
pub(crate) mod span;
pub(crate) mod window;
